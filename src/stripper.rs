use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::io::{FsTextReader, FsTextWriter, TextReader, TextWriter};
use crate::pattern::strip_ids;
use crate::utils::StripError;


/// 单次剥离的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripReport {
    /// 目标文件
    pub path: PathBuf,
    /// 删除的片段数
    pub matches_removed: usize,
    /// 处理前字节数
    pub bytes_before: usize,
    /// 处理后字节数
    pub bytes_after: usize,
    /// 是否已写回磁盘
    pub written: bool,
}

impl StripReport {
    /// 序列化为格式化的JSON
    pub fn to_json(&self) -> Result<String, StripError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::fmt::Display for StripReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== 剥离结果 ===")?;
        writeln!(f, "文件: {}", self.path.display())?;
        writeln!(f, "删除片段: {}", self.matches_removed)?;
        writeln!(f, "大小: {} -> {} 字节", self.bytes_before, self.bytes_after)?;
        writeln!(f, "已写回: {}", if self.written { "是" } else { "否" })?;
        Ok(())
    }
}

/// 模式剥离器：读取 → 替换 → 覆盖写回
///
/// 没有备份，也不写临时文件。写入中途失败可能留下被截断的文件。
#[derive(Debug, Clone, Default)]
pub struct PatternStripper<R = FsTextReader, W = FsTextWriter> {
    reader: R,
    writer: W,
}

impl<R: TextReader, W: TextWriter> PatternStripper<R, W> {
    /// 使用指定的读写实现创建剥离器
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// 删除文件中所有 `'id' => N, ` 片段并写回原路径
    ///
    /// 没有匹配时照常写回（内容不变）。
    pub fn strip(&self, path: &Path) -> Result<StripReport, StripError> {
        let (report, content) = self.transform(path)?;

        self.writer.write_text(path, &content)?;
        info!(path = %path.display(), removed = report.matches_removed, "rewrote file");

        Ok(StripReport { written: true, ..report })
    }

    /// 只计算结果，不写文件
    pub fn preview(&self, path: &Path) -> Result<StripReport, StripError> {
        self.transform(path).map(|(report, _)| report)
    }

    fn transform(&self, path: &Path) -> Result<(StripReport, String), StripError> {
        let original = self.reader.read_text(path)?;
        debug!(path = %path.display(), bytes = original.len(), "read file");

        let stripped = strip_ids(&original);
        if !stripped.changed() {
            warn!(path = %path.display(), "no 'id' fragments found");
        }

        let content = stripped.text.into_owned();
        let report = StripReport {
            path: path.to_path_buf(),
            matches_removed: stripped.removed,
            bytes_before: original.len(),
            bytes_after: content.len(),
            written: false,
        };
        debug!(removed = report.matches_removed, bytes_after = report.bytes_after, "transformed");

        Ok((report, content))
    }
}

/// 使用默认文件系统实现剥离单个文件
pub fn strip_file<P: AsRef<Path>>(path: P) -> Result<StripReport, StripError> {
    PatternStripper::<FsTextReader, FsTextWriter>::default().strip(path.as_ref())
}
