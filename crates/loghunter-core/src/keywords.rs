//! 关键词表（作为数据维护，匹配逻辑只做“任一子串命中”判定）

/// 行级可疑关键词（全部 ASCII，匹配时大小写不敏感）
pub(crate) const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "failed login",
    "error",
    "attack",
    "injection",
    "brute",
    "ransomware",
];

/// 文件级威胁关键词（特征分析用）
pub(crate) const THREAT_KEYWORDS: &[&str] = &["malware", "virus", "exec", "shell"];

/// 可疑行数超过该阈值即判定为高危
pub(crate) const HIGH_RISK_THRESHOLD: usize = 3;
