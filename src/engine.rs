//! Diagnosis engine: runs both layers and resolves the final verdict.
//!
//! The engine owns nothing mutable. It holds the shared configuration and an
//! optional acute evaluator; every `diagnose` call works only on its own
//! request, so one engine can serve many threads at once (see `diagnose_batch`).
//!
//! The acute layer is injected rather than hard-wired. Leaving it out is the
//! documented "acute layer unavailable" path. When it is present, an error or a
//! panic inside it is contained here: it is logged and the report still carries
//! the chronic diagnosis, with `acute = None`.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::acute::evaluate_acute;
use crate::chronic::evaluate_chronic;
use crate::config::EngineConfig;
use crate::domain::{AcuteDiagnosis, ChronicDiagnosis, CrossCheck, LayerVerdict, Readings};
use crate::error::AppError;
use crate::verdict::resolve;

/// Acute-layer evaluator: `(config, current, previous) -> diagnosis`.
pub type AcuteEvaluator =
    Arc<dyn Fn(&EngineConfig, &Readings, Option<&Readings>) -> Result<AcuteDiagnosis, AppError> + Send + Sync>;

/// One evaluation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub profile_id: String,
    pub period: String,
    pub current: Readings,
    #[serde(default)]
    pub previous: Option<Readings>,
    #[serde(default)]
    pub cross_check: Option<CrossCheck>,
}

impl DiagnosisRequest {
    pub fn new(profile_id: impl Into<String>, period: impl Into<String>, current: Readings) -> Self {
        Self {
            profile_id: profile_id.into(),
            period: period.into(),
            current,
            previous: None,
            cross_check: None,
        }
    }

    pub fn with_previous(mut self, previous: Readings) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn with_cross_check(mut self, cross_check: CrossCheck) -> Self {
        self.cross_check = Some(cross_check);
        self
    }
}

/// Terminal result of one evaluation. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisReport {
    profile_id: String,
    period: String,
    generated_at: DateTime<Utc>,
    chronic: ChronicDiagnosis,
    acute: Option<AcuteDiagnosis>,
    verdict: LayerVerdict,
}

impl DiagnosisReport {
    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    pub fn period(&self) -> &str {
        &self.period
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn chronic(&self) -> &ChronicDiagnosis {
        &self.chronic
    }

    pub fn acute(&self) -> Option<&AcuteDiagnosis> {
        self.acute.as_ref()
    }

    pub fn verdict(&self) -> &LayerVerdict {
        &self.verdict
    }
}

#[derive(Clone)]
pub struct DiagnosisEngine {
    config: Arc<EngineConfig>,
    acute: Option<AcuteEvaluator>,
}

impl std::fmt::Debug for DiagnosisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosisEngine")
            .field("indicators", &self.config.indicators.len())
            .field("axes", &self.config.axes.len())
            .field("acute", &self.acute.is_some())
            .finish()
    }
}

impl DiagnosisEngine {
    /// Engine with the built-in acute layer.
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self::without_acute(config)
            .with_acute_evaluator(|config, current, previous| Ok(evaluate_acute(config, current, previous)))
    }

    /// Engine with no acute layer; every verdict is `chronic-only`.
    pub fn without_acute(config: Arc<EngineConfig>) -> Self {
        Self { config, acute: None }
    }

    pub fn with_acute_evaluator<F>(mut self, evaluator: F) -> Self
    where
        F: Fn(&EngineConfig, &Readings, Option<&Readings>) -> Result<AcuteDiagnosis, AppError>
            + Send
            + Sync
            + 'static,
    {
        self.acute = Some(Arc::new(evaluator));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn diagnose(&self, request: &DiagnosisRequest) -> DiagnosisReport {
        let span = tracing::info_span!("diagnose", profile = %request.profile_id, period = %request.period);
        let _enter = span.enter();

        let chronic = evaluate_chronic(&self.config, &request.current);
        let acute = self.run_acute(request);
        let verdict = resolve(acute.as_ref(), &chronic.level, request.cross_check.as_ref());

        tracing::info!(priority = verdict.priority.tag(), label = %verdict.label, "diagnosis complete");

        DiagnosisReport {
            profile_id: request.profile_id.clone(),
            period: request.period.clone(),
            generated_at: Utc::now(),
            chronic,
            acute,
            verdict,
        }
    }

    /// Evaluate independent requests in parallel, preserving input order.
    pub fn diagnose_batch(&self, requests: &[DiagnosisRequest]) -> Vec<DiagnosisReport> {
        requests.par_iter().map(|r| self.diagnose(r)).collect()
    }

    fn run_acute(&self, request: &DiagnosisRequest) -> Option<AcuteDiagnosis> {
        let evaluator = self.acute.as_ref()?;
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            evaluator(&self.config, &request.current, request.previous.as_ref())
        }));
        match outcome {
            Ok(Ok(diagnosis)) => Some(diagnosis),
            Ok(Err(err)) => {
                tracing::error!(error = %err, "acute layer failed; continuing with chronic layer only");
                None
            }
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(panic = %message, "acute layer panicked; continuing with chronic layer only");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AcuteGauge, LayerPriority};

    fn readings(pairs: &[(&str, f64)]) -> Readings {
        pairs.iter().map(|&(id, v)| (id.to_string(), Some(v))).collect()
    }

    fn engine() -> DiagnosisEngine {
        DiagnosisEngine::new(Arc::new(EngineConfig::default()))
    }

    fn crisis_readings() -> Readings {
        readings(&[
            ("current_account", -60.0),
            ("reserves_mom", -11.0),
            ("exchange_rate_mom", 8.0),
            ("rate_change_bp", 35.0),
            ("cpi_yoy", 6.0),
            ("equity_mom", -12.0),
            ("retail_sales_mom", -6.0),
        ])
    }

    #[test]
    fn scenario_all_acute_gauges_critical() {
        let engine = engine();
        let report = engine.diagnose(&DiagnosisRequest::new("kr", "2026-09", crisis_readings()));
        let acute = report.acute().unwrap();
        assert_eq!(acute.input_stars, 4);
        assert_eq!(acute.output_stars, 3);
        assert_eq!(acute.alert_level, 3);
        assert!(!acute.blockade.dual_blockade);
        assert_eq!(report.verdict().priority, LayerPriority::ConfirmedAcute);
        assert!(report.verdict().master_alarm);

        let confirmed = engine.diagnose(
            &DiagnosisRequest::new("kr", "2026-09", crisis_readings()).with_previous(crisis_readings()),
        );
        assert!(confirmed.acute().unwrap().blockade.dual_blockade);
    }

    #[test]
    fn scenario_currency_strengthening_scores_normal() {
        let mut current = crisis_readings();
        current.insert("exchange_rate_mom".to_string(), Some(-2.0));
        let report = engine().diagnose(&DiagnosisRequest::new("kr", "2026-09", current));
        let fx = report
            .acute()
            .unwrap()
            .gauges
            .iter()
            .find(|g| g.gauge == AcuteGauge::ExchangeRateMom)
            .unwrap();
        assert_eq!(fx.score, Some(0));
        assert_eq!(report.acute().unwrap().input_stars, 3);
    }

    #[test]
    fn scenario_equity_rally_is_caution() {
        let report = engine().diagnose(&DiagnosisRequest::new(
            "kr",
            "2026-09",
            readings(&[("equity_mom", 7.0), ("cpi_yoy", 2.0), ("retail_sales_mom", 0.5)]),
        ));
        let equity = report
            .acute()
            .unwrap()
            .gauges
            .iter()
            .find(|g| g.gauge == AcuteGauge::EquityMom)
            .unwrap();
        assert_eq!(equity.score, Some(1));
        assert_eq!(equity.grade, "caution");
    }

    #[test]
    fn acute_error_keeps_chronic_result() {
        let engine = DiagnosisEngine::without_acute(Arc::new(EngineConfig::default()))
            .with_acute_evaluator(|_, _, _| Err(AppError::internal("feed offline")));
        let report = engine.diagnose(&DiagnosisRequest::new("kr", "2026-09", crisis_readings()));
        assert!(report.acute().is_none());
        assert_eq!(report.verdict().priority, LayerPriority::ChronicOnly);
        assert!(!report.chronic().axes.is_empty());
    }

    #[test]
    fn acute_panic_is_contained() {
        let engine = DiagnosisEngine::without_acute(Arc::new(EngineConfig::default()))
            .with_acute_evaluator(|_, _, _| panic!("corrupt gauge table"));
        let report = engine.diagnose(&DiagnosisRequest::new("kr", "2026-09", crisis_readings()));
        assert!(report.acute().is_none());
        assert_eq!(report.verdict().priority, LayerPriority::ChronicOnly);
    }

    #[test]
    fn without_acute_is_chronic_only() {
        let engine = DiagnosisEngine::without_acute(Arc::new(EngineConfig::default()));
        let report = engine.diagnose(&DiagnosisRequest::new("kr", "2026-09", crisis_readings()));
        assert!(report.acute().is_none());
        assert!(report.verdict().label.contains("unavailable"));
    }

    #[test]
    fn layers_are_not_blended() {
        // Same chronic picture, different acute picture: the chronic score must not move.
        let engine = engine();
        let calm = engine.diagnose(&DiagnosisRequest::new("a", "p", readings(&[("gdp_growth", 1.0)])));
        let mut stressed_readings = readings(&[("gdp_growth", 1.0)]);
        stressed_readings.insert("rate_change_bp".to_string(), Some(100.0));
        let stressed = engine.diagnose(&DiagnosisRequest::new("a", "p", stressed_readings));
        assert_ne!(
            calm.chronic().axes["rates"].score,
            stressed.chronic().axes["rates"].score,
            "rate reading feeds its chronic axis"
        );
        assert_eq!(calm.chronic().axes["growth"], stressed.chronic().axes["growth"]);
    }

    #[test]
    fn batch_matches_sequential_in_order() {
        let engine = engine();
        let requests: Vec<DiagnosisRequest> = (0..16)
            .map(|i| {
                DiagnosisRequest::new(
                    format!("p{i}"),
                    "2026-09",
                    readings(&[("rate_change_bp", i as f64 * 5.0), ("cpi_yoy", 2.0), ("reserves_mom", 0.0)]),
                )
            })
            .collect();
        let batch = engine.diagnose_batch(&requests);
        assert_eq!(batch.len(), requests.len());
        for (req, report) in requests.iter().zip(&batch) {
            let single = engine.diagnose(req);
            assert_eq!(report.profile_id(), req.profile_id);
            assert_eq!(report.verdict(), single.verdict());
            assert_eq!(report.chronic(), single.chronic());
        }
    }
}
