//! 扫描选项与统计信息（模块）

/// 报告输出格式
/// - Text：固定格式的人读报告。
/// - Json：单个紧凑 JSON 对象，便于下游处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 最大文件大小（字节）；超过则整次扫描报错，不做部分扫描
    pub max_file_size: Option<u64>,
    /// 报告格式：Text（人读）或 Json（机器读）
    pub format: ReportFormat,
    /// 是否附加文件特征分析（大小 / 熵 / 威胁打分）
    pub with_features: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_file_size: None,
            format: ReportFormat::Text,
            with_features: false,
        }
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub lines_scanned: usize,
    pub suspicious: usize,
}
