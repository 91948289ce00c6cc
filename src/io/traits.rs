/// IO 抽象层 - trait 定义
///
/// 剥离器通过这两个 trait 读写文件，便于注入和 mock。
use std::path::Path;

use crate::utils::StripError;

/// 文本读取 trait
///
/// # 职责
/// - 读取整个文件并解码为 UTF-8 文本
/// - 不做任何内容处理
pub trait TextReader {
    /// 读取文件全部内容
    ///
    /// # 参数
    /// * `path` - 文件路径
    fn read_text(&self, path: &Path) -> Result<String, StripError>;
}

/// 文本写入 trait
///
/// # 职责
/// - 截断目标文件并写入全部内容
pub trait TextWriter {
    /// 覆盖写入文件
    ///
    /// # 参数
    /// * `path` - 目标文件路径
    /// * `content` - 新内容
    fn write_text(&self, path: &Path, content: &str) -> Result<(), StripError>;
}

impl<T: TextReader + ?Sized> TextReader for &T {
    fn read_text(&self, path: &Path) -> Result<String, StripError> {
        (**self).read_text(path)
    }
}

impl<T: TextWriter + ?Sized> TextWriter for &T {
    fn write_text(&self, path: &Path, content: &str) -> Result<(), StripError> {
        (**self).write_text(path, content)
    }
}
