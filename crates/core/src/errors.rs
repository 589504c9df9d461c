use thiserror::Error;

/// Unified error type for the entire currency-monitor-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Validation / Configuration ──────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Settings that make a computation undefined (e.g., commission of
    /// 100% leaves no breakeven rate).
    #[error("Configuration fault: {0}")]
    ConfigurationFault(String),

    #[error("Monitor is not configured — set a sale date and USD amount first")]
    NotConfigured,

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api { provider: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No USD→EUR rate available for {date}")]
    RateNotAvailable { date: String },

    // ── Storage ─────────────────────────────────────────────────────
    #[error("Unsupported settings version: {0}")]
    UnsupportedVersion(u16),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs embedded in reqwest error
        // messages before they reach logs or the user.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
