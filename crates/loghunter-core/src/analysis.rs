//! 文件特征分析（大小 / 熵 / 威胁打分）
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Serialize;

use crate::detector::KeywordDetector;
use crate::error::ScanError;

/// 大文件加分阈值（字节）
const LARGE_FILE_MIN: u64 = 50_000;
/// 命中任一威胁关键词的加分
const KEYWORD_SCORE: u32 = 60;
/// 超过大小阈值的加分
const LARGE_FILE_SCORE: u32 = 20;
/// 威胁判定阈值：总分超过该值视为威胁
const THREAT_ALERT_MIN: u32 = 50;

/// 单个文件的特征
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FileFeatures {
    /// 文件大小（字节）
    pub file_size: u64,
    /// 字节分布的香农熵（bit/byte，保留两位小数）
    pub entropy: f64,
    /// 威胁打分（0–100）
    pub threat_score: u32,
}

impl FileFeatures {
    /// 打分是否达到威胁判定阈值
    pub fn is_threat(&self) -> bool {
        self.threat_score > THREAT_ALERT_MIN
    }
}

/// 读取整个文件并计算特征
/// 与逐行扫描互相独立：此处需要原始字节（熵按字节分布计算）
pub fn analyze_file(path: &Path) -> Result<FileFeatures, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(analyze_bytes(&buf))
}

/// 在内存缓冲区上计算特征
pub(crate) fn analyze_bytes(buf: &[u8]) -> FileFeatures {
    let file_size = buf.len() as u64;
    let entropy = (shannon_entropy(buf) * 100.0).round() / 100.0;

    let detector = KeywordDetector::threat();
    let mut threat_score = 0;
    if detector.matches(buf) {
        threat_score += KEYWORD_SCORE;
    }
    if file_size > LARGE_FILE_MIN {
        threat_score += LARGE_FILE_SCORE;
    }

    FileFeatures {
        file_size,
        entropy,
        threat_score,
    }
}

/// 字节分布的香农熵；空缓冲区为 0.0
fn shannon_entropy(buf: &[u8]) -> f64 {
    if buf.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for &b in buf {
        counts[b as usize] += 1;
    }
    let len = buf.len() as f64;
    let mut h = 0.0;
    for &c in counts.iter() {
        if c == 0 {
            continue;
        }
        let p = c as f64 / len;
        h -= p * p.log2();
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_degenerate_inputs() {
        assert_eq!(shannon_entropy(b""), 0.0);
        assert_eq!(shannon_entropy(&[0xAA; 1024]), 0.0);
    }

    #[test]
    fn entropy_two_symbols_is_one_bit() {
        let e = shannon_entropy(b"abababab");
        assert!((e - 1.0).abs() < 1e-9);
    }

    #[test]
    fn threat_score_keyword_hit() {
        let f = analyze_bytes(b"this build ships a VIRUS payload");
        assert_eq!(f.threat_score, 60);
        assert!(f.is_threat());
    }

    #[test]
    fn threat_score_size_only() {
        let buf = vec![b'a'; 50_001];
        let f = analyze_bytes(&buf);
        assert_eq!(f.threat_score, 20);
        assert!(!f.is_threat());
    }

    #[test]
    fn threat_score_keyword_and_size() {
        let mut buf = vec![b' '; 50_001];
        buf.extend_from_slice(b"malware");
        let f = analyze_bytes(&buf);
        assert_eq!(f.threat_score, 80);
        assert!(f.is_threat());
    }

    #[test]
    fn clean_small_file() {
        let f = analyze_bytes(b"hi there");
        assert_eq!(f.file_size, 8);
        assert_eq!(f.threat_score, 0);
        assert!(!f.is_threat());
    }
}
