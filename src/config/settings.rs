//! UI settings record persisted in the per-user settings slot

use serde::{Deserialize, Serialize};

/// Names and labels shown in the UI.
///
/// The stored shape must match exactly; anything else is discarded in favor
/// of the defaults (see [`super::SettingsStore`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSettings {
    /// Application name shown in the header and window title
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Labels for the four navigation tabs
    #[serde(default)]
    pub tab_names: TabNames,

    /// Footer line shown at the bottom of every view
    #[serde(default = "default_footer_name")]
    pub footer_name: String,
}

/// Labels for the four navigation tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabNames {
    #[serde(default = "default_tab_overview")]
    pub overview: String,
    #[serde(default = "default_tab_tenants")]
    pub tenants: String,
    #[serde(default = "default_tab_whatsapp")]
    pub whatsapp: String,
    #[serde(default = "default_tab_reports")]
    pub reports: String,
}

fn default_app_name() -> String {
    "RentFlow".to_string()
}

fn default_footer_name() -> String {
    "© 2024 RentFlow. All Rights Reserved.".to_string()
}

fn default_tab_overview() -> String {
    "Overview".to_string()
}

fn default_tab_tenants() -> String {
    "Tenants".to_string()
}

fn default_tab_whatsapp() -> String {
    "WhatsApp".to_string()
}

fn default_tab_reports() -> String {
    "Reports".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            tab_names: TabNames::default(),
            footer_name: default_footer_name(),
        }
    }
}

impl Default for TabNames {
    fn default() -> Self {
        Self {
            overview: default_tab_overview(),
            tenants: default_tab_tenants(),
            whatsapp: default_tab_whatsapp(),
            reports: default_tab_reports(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.app_name, "RentFlow");
        assert_eq!(settings.tab_names.overview, "Overview");
        assert_eq!(settings.tab_names.tenants, "Tenants");
        assert_eq!(settings.tab_names.whatsapp, "WhatsApp");
        assert_eq!(settings.tab_names.reports, "Reports");
        assert_eq!(settings.footer_name, "© 2024 RentFlow. All Rights Reserved.");
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = AppSettings::default();
        settings.app_name = "My Flats".to_string();
        settings.tab_names.whatsapp = "Messages".to_string();

        let json = serde_json::to_string_pretty(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{"app_name":"X","tab_names":{"overview":"O","tenants":"T","whatsapp":"W","reports":"R"},"footer_name":"F","extra":true}"#;
        assert!(serde_json::from_str::<AppSettings>(json).is_err());
    }
}
