//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use fs2::FileExt;

use super::Config;

/// Default configuration content written by `rentflow init`
const DEFAULT_CONFIG: &str = r#"# RentFlow Configuration
# ======================
#
# Secrets are NOT stored here. The database service keys and the AI API key
# are read from the environment:
#   RENTFLOW_DB_SERVICE_KEY - service key for record writes
#   RENTFLOW_DB_ANON_KEY    - read-only key for browsing
#   RENTFLOW_AI_API_KEY     - generative-AI provider key

# Passcode required before protected actions (settings save, deletions).
# Asked once per session.
[protection]
passcode = "1234"

# Hosted database service. The REST interface lives under {base_url}/rest/v1/.
[db]
base_url = "http://127.0.0.1:54321"

# Generative-AI provider used for document descriptions and notice drafts.
[ai]
base_url = "http://127.0.0.1:3400"
model = "googleai/gemini-2.0-flash"
"#;

impl Config {
    /// Get the global config directory path (~/.rentflow/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rentflow")
    }

    /// Get the global config file path (~/.rentflow/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// This ensures:
    /// 1. Exclusive lock prevents concurrent writes from two instances
    /// 2. Atomic write (temp file + rename) prevents corruption on crash
    /// 3. Parent directory is created if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        // Lock file is separate from the config to avoid issues with rename
        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire config lock")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        // Atomic rename (overwrites existing file)
        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        // Lock is released when lock_file is dropped
        Ok(())
    }

    /// Load configuration from the given path, or the global default.
    /// If no config file exists yet, auto-creates one with defaults.
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        let path = match path_override {
            Some(p) => p.to_path_buf(),
            None => Self::global_config_path(),
        };

        if !path.exists() {
            auto_init(&path)?;
        }

        Self::from_file(&path)
    }
}

/// Auto-initialize a configuration file when none exists.
///
/// Uses file locking to prevent race conditions when multiple processes
/// try to auto-init simultaneously.
fn auto_init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock for auto-init")?;

    // Re-check after acquiring the lock (another process may have created it)
    if path.exists() {
        return Ok(());
    }

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(DEFAULT_CONFIG.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    eprintln!("Created {}", path.display());
    Ok(())
}

/// Implementation of `rentflow init`
pub fn init_command(path_override: Option<&Path>, force: bool) -> Result<()> {
    let path = match path_override {
        Some(p) => p.to_path_buf(),
        None => Config::global_config_path(),
    };

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    tracing::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.protection.passcode, "1234");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.protection.passcode = "4321".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.protection.passcode, "4321");
    }

    #[test]
    fn test_load_auto_inits() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(!path.exists());

        let config = Config::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.protection.passcode, "1234");
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_command(Some(&path), false).unwrap();
        assert!(init_command(Some(&path), false).is_err());
        assert!(init_command(Some(&path), true).is_ok());
    }
}
