use crate::errors::CoreError;
use crate::models::settings::Settings;

/// High-level storage operations: save/load the settings record to/from a
/// single durable slot.
///
/// The slot holds the whole record as one flat JSON document; it is read
/// once at startup and rewritten wholesale after every successful settings
/// update. No partial writes, no migration logic beyond the version check
/// in [`Settings::from_json`].
pub struct SettingsStore;

impl SettingsStore {
    /// Serialize settings to raw bytes (portable, platform-independent).
    /// Use this for WASM / Tauri where the frontend handles storage I/O.
    pub fn save_to_bytes(settings: &Settings) -> Result<Vec<u8>, CoreError> {
        Ok(settings.to_json()?.into_bytes())
    }

    /// Parse and validate settings from raw bytes.
    pub fn load_from_bytes(data: &[u8]) -> Result<Settings, CoreError> {
        let raw = std::str::from_utf8(data)
            .map_err(|e| CoreError::Deserialization(format!("Settings are not UTF-8: {e}")))?;
        Settings::from_json(raw)
    }

    /// Save settings to a file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(settings: &Settings, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(settings)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load settings from a file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<Settings, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
