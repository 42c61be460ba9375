//! Shared domain types.
//!
//! These types are intentionally kept plain and serializable so they can be:
//!
//! - loaded from configuration files
//! - passed between the chronic and acute layers without conversion
//! - exported to JSON as a terminal, read-only diagnosis

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current-period readings keyed by indicator id.
///
/// `None` means the indicator was reported as missing; an absent key means the
/// same thing. Both are treated as "unavailable", never as zero.
pub type Readings = BTreeMap<String, Option<f64>>;

/// Look up a reading, collapsing "absent" and "explicit null" into `None`.
pub fn reading(readings: &Readings, id: &str) -> Option<f64> {
    readings.get(id).copied().flatten()
}

/// Normalization band for one indicator.
///
/// With `invert = false`, `min` is the worst value and `max` the best
/// (higher is better). With `invert = true` the direction flips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub invert: bool,
}

/// Physically possible range of an indicator. Values outside are rejected at ingest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardRange {
    pub min: f64,
    pub max: f64,
}

impl HardRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One entry of the gauge registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub hard_range: HardRange,
    pub threshold: Threshold,
}

/// A named category of indicators scored together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDefinition {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
}

/// A pair of axes whose joint deterioration is reported as one signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSignalDefinition {
    pub id: String,
    pub name: String,
    pub axes: [String; 2],
    #[serde(default)]
    pub description: String,
}

/// Discrete severity level with display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub level: u8,
    pub name: String,
    pub color: String,
}

/// Normalized severity of one indicator (0 = best, 5 = worst).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSeverity {
    pub id: String,
    pub raw: f64,
    pub severity: f64,
}

/// Aggregate severity of one axis.
///
/// `gauges` is sorted by severity, worst first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScore {
    pub axis_id: String,
    pub name: String,
    pub score: f64,
    pub count: usize,
    pub gauges: Vec<GaugeSeverity>,
}

/// An active cross-signal: both member axes at or above the activation threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSignalResult {
    pub id: String,
    pub name: String,
    pub axes: [String; 2],
    pub scores: [f64; 2],
    pub combined: f64,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualLockResult {
    pub locked: bool,
    pub critical_axes: Vec<String>,
    pub active_signals: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChronicAlertKind {
    CriticalAxis,
    DualLock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChronicAlert {
    pub kind: ChronicAlertKind,
    pub axis_id: Option<String>,
    pub score: f64,
    pub message: String,
    /// Worst contributing indicators (critical-axis alerts only).
    pub top_gauges: Vec<GaugeSeverity>,
}

/// Output of the chronic/structural layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChronicDiagnosis {
    pub overall_score: f64,
    pub level: Level,
    pub axes: BTreeMap<String, AxisScore>,
    pub cross_signals: Vec<CrossSignalResult>,
    pub dual_lock: DualLockResult,
    pub alerts: Vec<ChronicAlert>,
}

/// Which side of the acute layer a gauge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcuteGroup {
    /// Leading capital-flow proxies (CAM).
    Input,
    /// Lagging downstream effects (DLT).
    Output,
}

/// The seven fixed acute gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcuteGauge {
    CurrentAccount,
    ReservesMom,
    ExchangeRateMom,
    RateChangeBp,
    CpiYoy,
    EquityMom,
    RetailSalesMom,
}

impl AcuteGauge {
    pub const ALL: [AcuteGauge; 7] = [
        AcuteGauge::CurrentAccount,
        AcuteGauge::ReservesMom,
        AcuteGauge::ExchangeRateMom,
        AcuteGauge::RateChangeBp,
        AcuteGauge::CpiYoy,
        AcuteGauge::EquityMom,
        AcuteGauge::RetailSalesMom,
    ];

    /// Reading id this gauge is fed from.
    pub fn id(self) -> &'static str {
        match self {
            AcuteGauge::CurrentAccount => "current_account",
            AcuteGauge::ReservesMom => "reserves_mom",
            AcuteGauge::ExchangeRateMom => "exchange_rate_mom",
            AcuteGauge::RateChangeBp => "rate_change_bp",
            AcuteGauge::CpiYoy => "cpi_yoy",
            AcuteGauge::EquityMom => "equity_mom",
            AcuteGauge::RetailSalesMom => "retail_sales_mom",
        }
    }

    pub fn group(self) -> AcuteGroup {
        match self {
            AcuteGauge::CurrentAccount
            | AcuteGauge::ReservesMom
            | AcuteGauge::ExchangeRateMom
            | AcuteGauge::RateChangeBp => AcuteGroup::Input,
            AcuteGauge::CpiYoy | AcuteGauge::EquityMom | AcuteGauge::RetailSalesMom => {
                AcuteGroup::Output
            }
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAcuteGauge {
    pub gauge: AcuteGauge,
    pub group: AcuteGroup,
    pub value: Option<f64>,
    /// `None` when the gauge has no reading.
    pub score: Option<u8>,
    pub grade: String,
    pub available: bool,
}

/// Per-group blockade status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockadeStatus {
    Blocked,
    Alert,
    Caution,
    Normal,
}

impl BlockadeStatus {
    pub fn label(self) -> &'static str {
        match self {
            BlockadeStatus::Blocked => "blocked",
            BlockadeStatus::Alert => "alert",
            BlockadeStatus::Caution => "caution",
            BlockadeStatus::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockadeResult {
    pub cam_blocked: bool,
    pub dlt_blocked: bool,
    pub dual_blockade: bool,
    pub cam_status: BlockadeStatus,
    pub dlt_status: BlockadeStatus,
}

/// Output of the acute-shock layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcuteDiagnosis {
    pub alert_level: u8,
    pub label: String,
    pub input_stars: usize,
    pub output_stars: usize,
    pub input_warnings: usize,
    pub sustained: bool,
    pub simultaneous: bool,
    pub escalated: bool,
    pub peripheral_warning: bool,
    pub blockade: BlockadeResult,
    /// True only when enough acute gauges have readings to trust the layer.
    pub has_data: bool,
    pub available: usize,
    pub gauges: Vec<ScoredAcuteGauge>,
}

/// Optional independent cross-check fed in alongside the readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossCheck {
    pub diverged: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerPriority {
    ConfirmedAcute,
    ChronicHold,
    ChronicOnly,
    Normal,
}

impl LayerPriority {
    pub fn tag(self) -> &'static str {
        match self {
            LayerPriority::ConfirmedAcute => "confirmed-acute",
            LayerPriority::ChronicHold => "chronic-hold",
            LayerPriority::ChronicOnly => "chronic-only",
            LayerPriority::Normal => "normal",
        }
    }
}

/// Final verdict combining both layers through the fixed priority rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerVerdict {
    pub master_alarm: bool,
    pub hold: bool,
    pub satellite_hold: bool,
    pub priority: LayerPriority,
    pub label: String,
    pub acute_level: Option<u8>,
    pub chronic_level: u8,
}
