//! Configuration loading and management

mod io;
mod settings;
mod store;

pub use io::init_command;
pub use settings::{AppSettings, TabNames};
pub use store::SettingsStore;

use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Holds the non-secret knobs: collaborator base URLs, the AI model name and
/// the protection passcode. Secrets (service keys) stay in the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Passcode gate settings
    #[serde(default)]
    pub protection: ProtectionConfig,

    /// Hosted database service settings
    #[serde(default)]
    pub db: DbConfig,

    /// Generative-AI provider settings
    #[serde(default)]
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protection: ProtectionConfig::default(),
            db: DbConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

/// Passcode gate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectionConfig {
    /// Shared passcode required before protected actions run.
    /// Compared by exact match, once per session.
    #[serde(default = "default_passcode")]
    pub passcode: String,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            passcode: default_passcode(),
        }
    }
}

/// Hosted database service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    /// Base URL of the hosted database service.
    /// The REST interface lives under `{base_url}/rest/v1/`.
    #[serde(default = "default_db_base_url")]
    pub base_url: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            base_url: default_db_base_url(),
        }
    }
}

/// Generative-AI provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Base URL of the generation endpoint
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,

    /// Model identifier sent with every generation request
    #[serde(default = "default_ai_model")]
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ai_base_url(),
            model: default_ai_model(),
        }
    }
}

fn default_passcode() -> String {
    "1234".to_string()
}

fn default_db_base_url() -> String {
    // Local development stack of the hosted service
    "http://127.0.0.1:54321".to_string()
}

fn default_ai_base_url() -> String {
    "http://127.0.0.1:3400".to_string()
}

fn default_ai_model() -> String {
    "googleai/gemini-2.0-flash".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.protection.passcode, "1234");
        assert!(config.db.base_url.starts_with("http"));
        assert!(!config.ai.model.is_empty());
    }

    #[test]
    fn test_empty_toml_gets_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.protection.passcode, "1234");
        assert_eq!(config.ai.base_url, "http://127.0.0.1:3400");
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: Config = toml::from_str(
            r#"
            [protection]
            passcode = "9876"
            "#,
        )
        .unwrap();
        assert_eq!(config.protection.passcode, "9876");
        // Untouched sections keep their defaults
        assert_eq!(config.db.base_url, "http://127.0.0.1:54321");
    }
}
