//! 关键词检测器（Aho-Corasick）
use aho_corasick::{AhoCorasick, AhoCorasickBuilder};

use crate::keywords::{SUSPICIOUS_KEYWORDS, THREAT_KEYWORDS};

/// 固定关键词集合上的子串匹配器
/// - ASCII 大小写不敏感（关键词全为 ASCII，等价于先小写化再查子串）
/// - 不做词边界处理："errors occurred" 同样命中 "error"
pub(crate) struct KeywordDetector {
    ac: AhoCorasick,
}

impl KeywordDetector {
    /// 行级可疑关键词检测器
    pub(crate) fn suspicious() -> Self {
        Self::from_keywords(SUSPICIOUS_KEYWORDS)
    }

    /// 文件级威胁关键词检测器（特征分析用）
    pub(crate) fn threat() -> Self {
        Self::from_keywords(THREAT_KEYWORDS)
    }

    fn from_keywords(keywords: &[&str]) -> Self {
        let ac = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(keywords)
            .expect("build aho-corasick");
        Self { ac }
    }

    /// 任一关键词作为子串出现即命中
    pub(crate) fn matches(&self, text: &[u8]) -> bool {
        self.ac.is_match(text)
    }
}
