use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::rate::RatePoint;

/// Trait abstraction for the USD→EUR exchange-rate source.
///
/// The live implementation talks to the Frankfurter API. If that API stops
/// working or changes, we replace only that one implementation — the rest
/// of the codebase is untouched. Tests substitute a scripted mock.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RateProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the latest published rate together with the API-reported date
    /// it applies to.
    async fn latest(&self) -> Result<RatePoint, CoreError>;

    /// Get the rate on a specific date.
    async fn on_date(&self, date: NaiveDate) -> Result<f64, CoreError>;

    /// Get rates for a date range (for chart generation). The result is
    /// sorted by date and sparse: weekends and holidays have no
    /// observation and are simply absent.
    async fn range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<RatePoint>, CoreError>;
}
