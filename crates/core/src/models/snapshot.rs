use serde::{Deserialize, Serialize};

use super::rate::DeltaPoint;

/// Whether converting at the current rate beats the baseline.
///
/// Drives the "safe to convert" / "wait for a better rate" presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advice {
    Convert,
    Hold,
}

/// Headline figures for the presentation layer, refreshed on the
/// lightweight current-rate path.
///
/// The core computes all the numbers — the frontend only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveFigures {
    /// EUR value of the principal at the baseline rate, commission-free.
    pub base_price: f64,

    /// Delta of converting on the sale day itself, net of commission.
    /// Strictly negative whenever commission > 0: it is the cost of the
    /// fee, labelled "commission impact" in the UI.
    pub sale_day_delta: f64,

    /// Commission percent, for the "commission impact (-X%)" label.
    pub commission_percent: f64,

    /// Delta of converting today at the live rate, net of commission.
    pub today_delta: f64,

    /// `today_delta` as a percentage of `base_price`.
    pub delta_percentage: f64,

    /// The rate at which today's net-of-commission conversion equals the
    /// commission-free baseline value.
    pub breakeven_rate: f64,

    pub advice: Advice,
}

/// Everything the presentation layer needs for a full render: headline
/// figures plus the date-sorted chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    pub figures: LiveFigures,
    pub series: Vec<DeltaPoint>,
}
