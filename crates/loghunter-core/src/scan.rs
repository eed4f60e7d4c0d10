//! 扫描主流程
use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::analysis::analyze_file;
use crate::detector::KeywordDetector;
use crate::error::ScanError;
use crate::options::{ReportFormat, ScanOptions, ScanStats};
use crate::report::ScanReport;

/// 对任意带缓冲的输入流执行逐行扫描
/// - 行序列惰性且有限，流不可重放（重扫需要新的流）
/// - 行按字节读取（`read_until`），UTF-8 解码失败不会中断扫描
/// - 命中行经有损转换后原样保留（不做小写化），顺序与文件中一致
pub fn scan_reader<R: BufRead>(mut reader: R) -> std::io::Result<ScanReport> {
    let detector = KeywordDetector::suspicious();
    let mut report = ScanReport::default();
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        // 去掉行尾换行（兼容 \r\n）
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        report.lines_scanned += 1;
        if detector.matches(&line) {
            report.suspicious += 1;
            report.alerts.push(String::from_utf8_lossy(&line).into_owned());
        }
    }

    Ok(report)
}

/// 扫描单个日志文件
/// 输入流是作用域资源：函数返回时（含错误路径）随 reader 一起关闭
pub fn scan_file(path: &Path) -> Result<ScanReport, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    scan_reader(reader).map_err(|e| ScanError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// 扫描文件并将报告写入 `out`，返回统计信息
pub fn scan_and_write(path: &Path, out: &mut dyn Write, opts: &ScanOptions) -> Result<ScanStats> {
    // 大小上限检查（可选）：超限直接报错，不做部分扫描
    if let Some(max) = opts.max_file_size {
        let md = std::fs::metadata(path).map_err(|e| ScanError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if md.len() > max {
            anyhow::bail!(
                "{}: file size {} exceeds size limit {}",
                path.display(),
                md.len(),
                max
            );
        }
    }

    let report = scan_file(path)?;
    // 特征分析需要重读文件（扫描用的流不可重放）
    let features = if opts.with_features {
        Some(analyze_file(path)?)
    } else {
        None
    };

    match opts.format {
        ReportFormat::Text => report.write_text(features.as_ref(), out)?,
        ReportFormat::Json => report.write_json(features.as_ref(), out)?,
    }

    Ok(ScanStats {
        lines_scanned: report.lines_scanned,
        suspicious: report.suspicious,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RiskLevel;
    use std::io::Cursor;

    #[test]
    fn count_matches_alert_list() {
        let input = "ok\nERROR one\nbrute force\nfine\n";
        let report = scan_reader(Cursor::new(input)).unwrap();
        assert_eq!(report.suspicious, report.alerts.len());
        assert_eq!(report.suspicious, 2);
        assert_eq!(report.lines_scanned, 4);
    }

    #[test]
    fn empty_input() {
        let report = scan_reader(Cursor::new("")).unwrap();
        assert_eq!(report.lines_scanned, 0);
        assert_eq!(report.suspicious, 0);
        assert!(report.alerts.is_empty());
        assert_eq!(report.risk_level(), RiskLevel::Normal);
    }

    #[test]
    fn alerts_keep_original_case_and_order() {
        let input = "Failed Login from 10.0.0.1\nnothing here\nSQL Injection attempt\n";
        let report = scan_reader(Cursor::new(input)).unwrap();
        assert_eq!(
            report.alerts,
            vec![
                "Failed Login from 10.0.0.1".to_string(),
                "SQL Injection attempt".to_string(),
            ]
        );
    }

    #[test]
    fn crlf_and_missing_trailing_newline() {
        // 最后一行无换行符
        let input = "attack detected\r\nlast line error";
        let report = scan_reader(Cursor::new(input)).unwrap();
        assert_eq!(report.suspicious, 2);
        assert_eq!(report.alerts[0], "attack detected");
        assert_eq!(report.alerts[1], "last line error");
    }

    #[test]
    fn invalid_utf8_line_is_kept_lossily() {
        let input = b"error \xFF\xFE byte salad\n".to_vec();
        let report = scan_reader(Cursor::new(input)).unwrap();
        assert_eq!(report.suspicious, 1);
        assert!(report.alerts[0].starts_with("error "));
    }
}
