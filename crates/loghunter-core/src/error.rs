//! 错误类型（对外暴露）
use std::path::PathBuf;

use thiserror::Error;

/// 扫描失败的唯一类别：输入文件打开或读取出错
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
