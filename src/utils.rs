use thiserror::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum StripError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("{path} is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    Encoding {
        path: PathBuf,
        valid_up_to: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StripError {
    /// 按 ErrorKind 归类 IO 错误，附带出错路径
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            ErrorKind::NotFound => StripError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => StripError::PermissionDenied(path.to_path_buf()),
            _ => StripError::Io(err),
        }
    }
}
