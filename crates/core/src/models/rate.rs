use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single USD→EUR rate observation (date → rate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub rate: f64,
}

/// A chart-ready data point: the rate on a date plus the EUR gain/loss of
/// converting at that rate versus the commission-free baseline.
///
/// Recomputed from scratch on every chart refresh and discarded after
/// rendering — never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaPoint {
    pub date: NaiveDate,
    pub rate: f64,
    pub delta: f64,
}
