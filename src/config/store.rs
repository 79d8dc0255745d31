//! Durable settings store
//!
//! Owns the in-memory [`AppSettings`] record and the per-user JSON slot it is
//! persisted to. The in-memory value is authoritative for the session: slot
//! read/write failures are logged and swallowed, never surfaced to callers.

use std::fs;
use std::path::{Path, PathBuf};

use super::{AppSettings, Config};

/// File name of the settings slot inside the RentFlow directory
const SETTINGS_SLOT_FILE: &str = "app_settings.json";

/// In-memory settings backed by a durable JSON slot.
///
/// Constructed once at session start and passed by reference to consumers.
#[derive(Debug)]
pub struct SettingsStore {
    slot_path: PathBuf,
    current: AppSettings,
}

impl SettingsStore {
    /// Default slot path (~/.rentflow/app_settings.json)
    pub fn default_slot_path() -> PathBuf {
        Config::global_config_dir().join(SETTINGS_SLOT_FILE)
    }

    /// Open the store over the given slot, hydrating from durable storage.
    ///
    /// An absent, unreadable or unparseable slot falls back to the hardcoded
    /// defaults; the failure is logged, not returned.
    pub fn open(slot_path: impl Into<PathBuf>) -> Self {
        let slot_path = slot_path.into();
        let current = load_slot(&slot_path);
        Self { slot_path, current }
    }

    /// Open the store over the default per-user slot
    pub fn open_default() -> Self {
        Self::open(Self::default_slot_path())
    }

    /// Current in-memory settings
    pub fn settings(&self) -> &AppSettings {
        &self.current
    }

    /// Replace the entire settings record and persist it immediately.
    ///
    /// The slot write is whole-object replace; a failed write leaves the
    /// in-memory value in place and is only logged.
    pub fn write(&mut self, next: AppSettings) {
        self.current = next;
        if let Err(e) = persist_slot(&self.slot_path, &self.current) {
            tracing::error!(
                "Failed to persist settings to {}: {:#}",
                self.slot_path.display(),
                e
            );
        }
    }
}

fn load_slot(path: &Path) -> AppSettings {
    if !path.exists() {
        return AppSettings::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read settings slot {}: {}", path.display(), e);
            return AppSettings::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(
                "Discarding malformed settings slot {}: {}",
                path.display(),
                e
            );
            AppSettings::default()
        }
    }
}

fn persist_slot(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    use anyhow::Context;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(settings)
        .with_context(|| "Failed to serialize settings")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write settings slot {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_slot_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("app_settings.json"));
        assert_eq!(*store.settings(), AppSettings::default());
    }

    #[test]
    fn test_write_then_fresh_open_round_trips() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("app_settings.json");

        let mut settings = AppSettings::default();
        settings.app_name = "Hillside Lettings".to_string();
        settings.tab_names.reports = "Accounts".to_string();
        settings.footer_name = "© Hillside".to_string();

        let mut store = SettingsStore::open(&slot);
        store.write(settings.clone());

        // A fresh session over the same slot sees exactly what was written
        let fresh = SettingsStore::open(&slot);
        assert_eq!(*fresh.settings(), settings);
    }

    #[test]
    fn test_malformed_slot_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("app_settings.json");
        fs::write(&slot, "{not json at all").unwrap();

        let store = SettingsStore::open(&slot);
        assert_eq!(*store.settings(), AppSettings::default());
    }

    #[test]
    fn test_wrong_shape_slot_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("app_settings.json");
        // Valid JSON, wrong shape
        fs::write(&slot, r#"{"app_name": "X", "surprise": 1}"#).unwrap();

        let store = SettingsStore::open(&slot);
        assert_eq!(*store.settings(), AppSettings::default());
    }

    #[test]
    fn test_write_replaces_whole_record() {
        let dir = tempdir().unwrap();
        let slot = dir.path().join("app_settings.json");

        let mut store = SettingsStore::open(&slot);
        let mut first = AppSettings::default();
        first.app_name = "First".to_string();
        store.write(first);

        let second = AppSettings::default();
        store.write(second.clone());
        assert_eq!(*store.settings(), second);

        let on_disk: AppSettings =
            serde_json::from_str(&fs::read_to_string(&slot).unwrap()).unwrap();
        assert_eq!(on_disk, second);
    }

    #[test]
    fn test_unwritable_slot_keeps_memory_authoritative() {
        let dir = tempdir().unwrap();
        // Point the slot at a path whose parent is a file, so the write fails
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let slot = blocker.join("app_settings.json");

        let mut store = SettingsStore::open(&slot);
        let mut settings = AppSettings::default();
        settings.app_name = "Survives".to_string();
        store.write(settings.clone());

        assert_eq!(*store.settings(), settings);
    }
}
