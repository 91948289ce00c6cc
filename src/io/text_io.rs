/// 文本文件 IO 实现
///
/// 提供基于文件系统的默认读写实现
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use super::traits::{TextReader, TextWriter};
use crate::utils::StripError;

/// 默认的文本读取器（基于 std::fs，严格 UTF-8）
#[derive(Debug, Clone, Default)]
pub struct FsTextReader;

impl TextReader for FsTextReader {
    fn read_text(&self, path: &Path) -> Result<String, StripError> {
        let bytes = std::fs::read(path).map_err(|e| StripError::from_io(e, path))?;

        // BOM 当作普通内容保留，写回时字节不变
        match UTF_8.decode_without_bom_handling_and_without_replacement(&bytes) {
            Some(text) => Ok(text.into_owned()),
            None => Err(StripError::Encoding {
                path: path.to_path_buf(),
                valid_up_to: Encoding::utf8_valid_up_to(&bytes),
            }),
        }
    }
}

/// 默认的文本写入器（基于 std::fs，截断后写入）
#[derive(Debug, Clone, Default)]
pub struct FsTextWriter;

impl TextWriter for FsTextWriter {
    fn write_text(&self, path: &Path, content: &str) -> Result<(), StripError> {
        // 不创建父目录：目标文件必须已存在
        std::fs::write(path, content).map_err(|e| StripError::from_io(e, path))
    }
}
