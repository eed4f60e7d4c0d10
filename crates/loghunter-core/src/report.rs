//! 报告模型与渲染（文本 / JSON）
use std::io::{self, Write};

use serde::Serialize;

use crate::analysis::FileFeatures;
use crate::keywords::HIGH_RISK_THRESHOLD;

/// 风险等级（仅由可疑行数与固定阈值推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Normal,
    HighRisk,
}

/// 单次扫描的结果
/// 不变量：`suspicious == alerts.len()`
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// 扫描过的总行数
    pub lines_scanned: usize,
    /// 可疑行计数
    pub suspicious: usize,
    /// 命中行原文（未做小写化），按文件中出现顺序排列
    pub alerts: Vec<String>,
}

impl ScanReport {
    /// 推导风险等级：可疑行数大于阈值为高危
    pub fn risk_level(&self) -> RiskLevel {
        if self.suspicious > HIGH_RISK_THRESHOLD {
            RiskLevel::HighRisk
        } else {
            RiskLevel::Normal
        }
    }

    /// 渲染文本报告（格式与行序固定）
    pub fn write_text(&self, features: Option<&FileFeatures>, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "=== Java Log Forensics Report ===")?;
        writeln!(out, "Total suspicious entries: {}", self.suspicious)?;
        match self.risk_level() {
            RiskLevel::HighRisk => writeln!(out, "HIGH RISK: Potential incident detected")?,
            RiskLevel::Normal => writeln!(out, "Log appears normal.")?,
        }
        if !self.alerts.is_empty() {
            writeln!(out, "\nAlerts:")?;
            for a in &self.alerts {
                writeln!(out, " - {}", a)?;
            }
        }
        if let Some(f) = features {
            writeln!(out, "\n=== File Feature Analysis ===")?;
            writeln!(out, "Size: {} bytes", f.file_size)?;
            writeln!(out, "Entropy: {:.2}", f.entropy)?;
            writeln!(out, "Threat score: {}/100", f.threat_score)?;
            if f.is_threat() {
                writeln!(out, "ALERT: Potential threat detected!")?;
            } else {
                writeln!(out, "Clean.")?;
            }
        }
        Ok(())
    }

    /// 渲染 JSON 报告（单个紧凑对象）
    pub fn write_json(
        &self,
        features: Option<&FileFeatures>,
        out: &mut dyn Write,
    ) -> serde_json::Result<()> {
        let doc = serde_json::json!({
            "lines_scanned": self.lines_scanned,
            "suspicious": self.suspicious,
            "risk_level": self.risk_level(),
            "alerts": &self.alerts,
            "features": features,
        });
        serde_json::to_writer(out, &doc)
    }
}
