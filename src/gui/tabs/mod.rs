//! Dashboard tab views
//!
//! Each tab is an `impl RentFlowApp` render method plus a state struct for
//! its editor fields. Button presses are collected into locals during the
//! render pass and applied to the app afterwards.

pub mod overview;
pub mod reports;
pub mod settings;
pub mod tenants;
pub mod whatsapp;

use chrono::NaiveDate;

/// The dashboard tabs. Labels for the first four come from the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Tenants,
    Whatsapp,
    Reports,
    Settings,
}

/// Parse a money amount from a form field
pub(crate) fn parse_amount(field: &str, value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(n) if n >= 0.0 => Ok(n),
        _ => Err(format!("Invalid {} (must be a non-negative number)", field)),
    }
}

/// Parse a `YYYY-MM-DD` date from a form field
pub(crate) fn parse_date(field: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid {} (expected YYYY-MM-DD)", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("rent", "1200.50"), Ok(1200.50));
        assert!(parse_amount("rent", "-3").is_err());
        assert!(parse_amount("rent", "twelve").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("date", "2024-06-01").is_ok());
        assert!(parse_date("date", "01/06/2024").is_err());
        assert!(parse_date("date", "").is_err());
    }
}
