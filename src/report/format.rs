//! Formatted terminal output for diagnosis reports.
//!
//! We keep formatting code in one place so:
//! - the scoring code stays free of presentation concerns
//! - output changes are localized

use crate::domain::{AcuteDiagnosis, ChronicDiagnosis, ScoredAcuteGauge};
use crate::engine::DiagnosisReport;
use crate::io::RejectedReading;

/// Full multi-section summary of one report.
pub fn format_report(report: &DiagnosisReport) -> String {
    let mut out = String::new();

    out.push_str("=== gauge - economic health diagnosis ===\n");
    out.push_str(&format!("Profile: {}\n", report.profile_id()));
    out.push_str(&format!("Period: {}\n", report.period()));
    out.push_str(&format!("Generated: {}\n", report.generated_at().to_rfc3339()));

    let verdict = report.verdict();
    out.push_str(&format!("\nVerdict: {} [{}]\n", verdict.label, verdict.priority.tag()));
    let mut flags = Vec::new();
    if verdict.master_alarm {
        flags.push("MASTER ALARM");
    }
    if verdict.hold {
        flags.push("hold");
    }
    if verdict.satellite_hold {
        flags.push("satellite hold");
    }
    if !flags.is_empty() {
        out.push_str(&format!("Flags: {}\n", flags.join(", ")));
    }

    out.push('\n');
    out.push_str(&format_chronic(report.chronic()));
    out.push('\n');
    match report.acute() {
        Some(acute) => out.push_str(&format_acute(acute)),
        None => out.push_str("Acute layer: unavailable\n"),
    }

    out
}

fn format_chronic(chronic: &ChronicDiagnosis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Chronic: score={:.2} level={} ({})\n",
        chronic.overall_score, chronic.level.level, chronic.level.name
    ));

    out.push_str(&format!("{:<24} {:>6} {:>3}  {}\n", "axis", "score", "n", "worst gauge"));
    for axis in chronic.axes.values() {
        let worst = axis
            .gauges
            .first()
            .map(|g| format!("{} ({:.2})", g.id, g.severity))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<24} {:>6.2} {:>3}  {}\n",
            axis.name, axis.score, axis.count, worst
        ));
    }

    if chronic.cross_signals.is_empty() {
        out.push_str("Cross-signals: none active\n");
    } else {
        out.push_str(&format!("Cross-signals ({} active):\n", chronic.cross_signals.len()));
        for signal in &chronic.cross_signals {
            out.push_str(&format!(
                "  {:<22} {} x {} = {:.2} ({})\n",
                signal.name, signal.axes[0], signal.axes[1], signal.combined, signal.level.name
            ));
        }
    }

    out.push_str(&format!("Dual lock: {}\n", chronic.dual_lock.reason));
    for alert in &chronic.alerts {
        out.push_str(&format!("  ! {}\n", alert.message));
    }
    out
}

fn format_acute(acute: &AcuteDiagnosis) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Acute: level={} ({}) inputs={} outputs={} warnings={} available={}/7{}\n",
        acute.alert_level,
        acute.label,
        acute.input_stars,
        acute.output_stars,
        acute.input_warnings,
        acute.available,
        if acute.has_data { "" } else { " (insufficient)" }
    ));
    for g in &acute.gauges {
        out.push_str(&format_gauge(g));
    }
    out.push_str(&format!(
        "sustained={} simultaneous={} escalated={} peripheral={}\n",
        acute.sustained, acute.simultaneous, acute.escalated, acute.peripheral_warning
    ));
    out.push_str(&format!(
        "blockade: input={} output={}{}\n",
        acute.blockade.cam_status.label(),
        acute.blockade.dlt_status.label(),
        if acute.blockade.dual_blockade { " (DUAL)" } else { "" }
    ));
    out
}

fn format_gauge(g: &ScoredAcuteGauge) -> String {
    let value = g.value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string());
    format!("  {:<18} {:>7} {:>9}  {:?}\n", g.gauge.id(), value, g.grade, g.group)
}

/// One line per report, for batch output.
pub fn format_batch_line(source: &str, report: &DiagnosisReport) -> String {
    let verdict = report.verdict();
    let acute = verdict
        .acute_level
        .map(|l| l.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{source}: {} chronic={} acute={} {}",
        verdict.priority.tag(),
        verdict.chronic_level,
        acute,
        verdict.label
    )
}

/// Summarize rejected readings (empty string when nothing was rejected).
pub fn format_rejected(rejected: &[RejectedReading]) -> String {
    let mut out = String::new();
    if rejected.is_empty() {
        return out;
    }
    out.push_str(&format!("Rejected readings ({}):\n", rejected.len()));
    for r in rejected {
        out.push_str(&format!("  {} = {} ({})\n", r.id, r.value, r.reason));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::EngineConfig;
    use crate::domain::Readings;
    use crate::engine::{DiagnosisEngine, DiagnosisRequest};

    fn report(with_acute: bool) -> DiagnosisReport {
        let config = Arc::new(EngineConfig::default());
        let engine = if with_acute {
            DiagnosisEngine::new(config)
        } else {
            DiagnosisEngine::without_acute(config)
        };
        let mut current = Readings::new();
        current.insert("rate_change_bp".to_string(), Some(40.0));
        current.insert("reserves_mom".to_string(), Some(-12.0));
        current.insert("cpi_yoy".to_string(), Some(2.0));
        engine.diagnose(&DiagnosisRequest::new("kr", "2026-09", current))
    }

    #[test]
    fn report_mentions_verdict_and_layers() {
        let text = format_report(&report(true));
        assert!(text.contains("Profile: kr"));
        assert!(text.contains("confirmed-acute"));
        assert!(text.contains("MASTER ALARM"));
        assert!(text.contains("stage2-alert"));
        assert!(text.contains("Monetary Conditions"));
    }

    #[test]
    fn missing_acute_layer_is_reported() {
        let text = format_report(&report(false));
        assert!(text.contains("Acute layer: unavailable"));
    }

    #[test]
    fn batch_line_is_single_line() {
        let line = format_batch_line("a.json", &report(true));
        assert!(line.starts_with("a.json: confirmed-acute"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn rejected_summary() {
        assert!(format_rejected(&[]).is_empty());
        let text = format_rejected(&[RejectedReading {
            id: "x".to_string(),
            value: 1.0,
            reason: "unknown indicator id".to_string(),
        }]);
        assert!(text.contains("x = 1 (unknown indicator id)"));
    }
}
