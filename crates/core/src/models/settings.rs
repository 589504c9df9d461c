use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Current settings document version. Bump when the on-disk shape changes.
pub const SETTINGS_VERSION: u16 = 1;

/// Default commission percent applied until the user configures one.
pub const DEFAULT_COMMISSION: f64 = 2.0;

/// User-configurable monitor settings, persisted as a flat JSON document.
///
/// `sale_date_rate` is never user-supplied: it is fetched from the rate
/// provider for the exact `sale_date` and re-fetched whenever `sale_date`
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Document version for forward-compatibility checks on load.
    pub version: u16,

    /// The date the baseline conversion rate was recorded. None until
    /// first configured.
    pub sale_date: Option<NaiveDate>,

    /// The fixed USD principal being tracked. Positive when set.
    pub usd_amount: Option<f64>,

    /// USD→EUR rate on `sale_date`, fetched from the provider. Positive
    /// when set.
    pub sale_date_rate: Option<f64>,

    /// Conversion fee in percent, within [0, 100).
    pub commission: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            sale_date: None,
            usd_amount: None,
            sale_date_rate: None,
            commission: DEFAULT_COMMISSION,
        }
    }
}

impl Settings {
    /// Parse and validate a settings document.
    ///
    /// Pure: no defaults are merged in — a field that is present but out
    /// of range is an error, not silently replaced.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(raw)?;
        if settings.version > SETTINGS_VERSION {
            return Err(CoreError::UnsupportedVersion(settings.version));
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to the flat JSON document written to the durable slot.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }

    /// Check stored field ranges. Used on load; user input goes through
    /// [`validate_input`] before any field is written.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(amount) = self.usd_amount {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "USD amount must be a positive number, got {amount}"
                )));
            }
        }
        if let Some(rate) = self.sale_date_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "Sale-date rate must be a positive number, got {rate}"
                )));
            }
        }
        validate_commission(self.commission)
    }

    /// The fully-configured projection of these settings, if every field
    /// required for delta computation is present.
    #[must_use]
    pub fn baseline(&self) -> Option<Baseline> {
        Some(Baseline {
            sale_date: self.sale_date?,
            usd_amount: self.usd_amount?,
            sale_date_rate: self.sale_date_rate?,
            commission: self.commission,
        })
    }

    /// True once a baseline rate has been recorded for a sale date.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.baseline().is_some()
    }
}

/// Validate user-entered settings before any field is committed and before
/// any network call is made.
pub fn validate_input(
    sale_date: NaiveDate,
    usd_amount: f64,
    commission: f64,
    today: NaiveDate,
) -> Result<(), CoreError> {
    if sale_date > today {
        return Err(CoreError::ValidationError(format!(
            "Sale date {sale_date} is in the future"
        )));
    }
    if !usd_amount.is_finite() || usd_amount <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "USD amount must be a positive number, got {usd_amount}"
        )));
    }
    validate_commission(commission)
}

fn validate_commission(commission: f64) -> Result<(), CoreError> {
    if !commission.is_finite() || commission < 0.0 || commission > 100.0 {
        return Err(CoreError::ValidationError(format!(
            "Commission must be between 0 and 100 percent, got {commission}"
        )));
    }
    // At exactly 100% the commission multiplier is zero and no breakeven
    // rate exists, so the allowed range is [0, 100).
    if commission == 100.0 {
        return Err(CoreError::ConfigurationFault(
            "Commission of 100% leaves no breakeven rate".to_string(),
        ));
    }
    Ok(())
}

/// A fully-configured snapshot of the settings: every field present and
/// range-checked. All calculator inputs arrive through this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub sale_date: NaiveDate,
    pub usd_amount: f64,
    pub sale_date_rate: f64,
    pub commission: f64,
}
