//! Browser persistence for UI settings.
//!
//! The matching tolerance survives reloads via localStorage. Missing or
//! unreadable state falls back to defaults; storage failures are logged
//! and otherwise ignored.

use brandlens_core::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "brandlens_settings";

/// Settings persisted to localStorage between sessions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSettings {
    /// Matching tolerance passed to the comparator
    pub tolerance: f64,
    /// Schema version for future migrations
    version: u32,
}

impl PersistedSettings {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            version: Self::CURRENT_VERSION,
        }
    }
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

/// Load persisted settings. Returns None if nothing is stored, parsing
/// fails, or storage is unavailable.
pub fn load_settings() -> Option<PersistedSettings> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY).ok()??;

    match serde_json::from_str::<PersistedSettings>(&json) {
        Ok(settings) if settings.version == PersistedSettings::CURRENT_VERSION => {
            log::info!("Loaded settings: tolerance={}", settings.tolerance);
            Some(settings)
        }
        Ok(settings) => {
            log::warn!(
                "Ignoring stored settings with version {} (current: {})",
                settings.version,
                PersistedSettings::CURRENT_VERSION
            );
            None
        }
        Err(e) => {
            log::warn!("Failed to parse stored settings: {e}");
            None
        }
    }
}

/// Save settings. Logs a warning if storage is unavailable or full.
pub fn save_settings(settings: &PersistedSettings) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return;
    };

    match serde_json::to_string(settings) {
        Ok(json) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &json) {
                log::warn!("Failed to save settings: {e:?}");
            }
        }
        Err(e) => {
            log::warn!("Failed to serialize settings: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_comparator_default_tolerance() {
        assert_eq!(PersistedSettings::default().tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn settings_roundtrip_through_json() {
        let settings = PersistedSettings::new(40.0);
        let json = serde_json::to_string(&settings).expect("serializes");
        let parsed: PersistedSettings = serde_json::from_str(&json).expect("parses back");
        assert_eq!(settings, parsed);
    }

    #[test]
    fn version_field_is_stored() {
        let json = serde_json::to_string(&PersistedSettings::default()).expect("serializes");
        assert!(json.contains("\"version\":1"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn save_then_load_roundtrips() {
        let settings = PersistedSettings::new(33.0);
        save_settings(&settings);
        assert_eq!(load_settings(), Some(settings));
    }
}
