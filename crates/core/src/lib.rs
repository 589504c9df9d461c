pub mod errors;
pub mod models;
pub mod providers;
#[cfg(not(target_arch = "wasm32"))]
pub mod scheduler;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use models::{
    settings::{self, Settings},
    snapshot::{LiveFigures, MonitorSnapshot},
};
use providers::{frankfurter::FrankfurterProvider, traits::RateProvider};
use services::assembler;
use storage::store::SettingsStore;

use errors::CoreError;

/// Main entry point for the Currency Monitor core library.
/// Holds the settings record and the rate provider used to price it.
///
/// Update sequences are serialized by ownership: `update_settings` takes
/// `&mut self`, so a second sequence cannot start while one is suspended
/// on a fetch. Embedders sharing a monitor across tasks hold it behind a
/// mutex (as the scheduler does), which gives the same guarantee.
#[must_use]
pub struct CurrencyMonitor {
    settings: Settings,
    provider: Box<dyn RateProvider>,
    /// Tracks whether settings changed since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for CurrencyMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyMonitor")
            .field("settings", &self.settings)
            .field("provider", &self.provider.name())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl CurrencyMonitor {
    /// Create a monitor with default settings and the live Frankfurter
    /// provider.
    pub fn create_new() -> Self {
        Self::with_provider(Box::new(FrankfurterProvider::new()))
    }

    /// Create a monitor backed by a custom rate provider (test seam).
    pub fn with_provider(provider: Box<dyn RateProvider>) -> Self {
        Self {
            settings: Settings::default(),
            provider,
            dirty: false,
        }
    }

    /// Restore a monitor from a previously saved settings document.
    /// Use this for WASM / Tauri where the frontend handles storage I/O.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let settings = SettingsStore::load_from_bytes(data)?;
        let mut monitor = Self::create_new();
        monitor.settings = settings;
        Ok(monitor)
    }

    /// Serialize the current settings to raw bytes for the durable slot.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = SettingsStore::save_to_bytes(&self.settings)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Restore a monitor from a settings file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Self, CoreError> {
        let settings = SettingsStore::load_from_file(path)?;
        let mut monitor = Self::create_new();
        monitor.settings = settings;
        Ok(monitor)
    }

    /// Save the current settings to a file on disk (native only).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        SettingsStore::save_to_file(&self.settings, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// True once a baseline rate has been recorded for a sale date.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    /// Returns `true` if settings changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Validate and commit new settings, then rebuild the full snapshot.
    ///
    /// Sequence:
    /// 1. Validate synchronously — on failure nothing is touched and no
    ///    network call is made.
    /// 2. Fetch the baseline rate for `sale_date` from the provider
    ///    (`sale_date_rate` is never user-supplied) and sanity-check it:
    ///    a non-positive rate never commits.
    /// 3. Commit the whole settings record. The commit is unconditional
    ///    once the baseline fetch succeeds: a later snapshot failure
    ///    surfaces as an error but does not roll the settings back.
    /// 4. Fetch current rate + history and return the assembled snapshot.
    pub async fn update_settings(
        &mut self,
        sale_date: NaiveDate,
        usd_amount: f64,
        commission: f64,
    ) -> Result<MonitorSnapshot, CoreError> {
        let today = chrono::Utc::now().date_naive();
        settings::validate_input(sale_date, usd_amount, commission, today)?;

        let sale_date_rate = self.provider.on_date(sale_date).await?;
        // The rate crosses the validation boundary like every other
        // settings field: a malformed-but-parseable response must not
        // commit a record that fails its own reload validation.
        if !sale_date_rate.is_finite() || sale_date_rate <= 0.0 {
            return Err(CoreError::Api {
                provider: self.provider.name().to_string(),
                message: format!(
                    "Non-positive USD→EUR rate {sale_date_rate} returned for {sale_date}"
                ),
            });
        }

        self.settings = Settings {
            version: settings::SETTINGS_VERSION,
            sale_date: Some(sale_date),
            usd_amount: Some(usd_amount),
            sale_date_rate: Some(sale_date_rate),
            commission,
        };
        self.dirty = true;
        tracing::info!(%sale_date, usd_amount, commission, sale_date_rate, "settings committed");

        self.snapshot().await
    }

    // ── Refresh Paths ───────────────────────────────────────────────

    /// Lightweight refresh: one `latest` fetch, headline figures only.
    /// This is the path the periodic timer drives — it does not rebuild
    /// the chart series.
    pub async fn refresh_current(&self) -> Result<LiveFigures, CoreError> {
        let baseline = self.settings.baseline().ok_or(CoreError::NotConfigured)?;
        let current = self.provider.latest().await?;
        Ok(baseline.live_figures(&current))
    }

    /// Full refresh: headline figures plus the date-sorted chart series
    /// covering [sale_date, today].
    ///
    /// The two fetches are awaited sequentially; total latency is the sum
    /// of the round-trips.
    pub async fn snapshot(&self) -> Result<MonitorSnapshot, CoreError> {
        let baseline = self.settings.baseline().ok_or(CoreError::NotConfigured)?;

        let current = self.provider.latest().await?;
        let historical = self
            .provider
            .range(baseline.sale_date, current.date)
            .await?;

        let series = assembler::assemble(&baseline, &historical, &current);
        Ok(MonitorSnapshot {
            figures: baseline.live_figures(&current),
            series,
        })
    }
}
