//! Tenant record

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant occupying one of the managed units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    /// Unit/flat label, e.g. "2B"
    pub unit: String,
    /// Agreed monthly rent
    pub monthly_rent: f64,
    pub move_in_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Build a new tenant record with a fresh id and creation timestamp
    pub fn new(name: String, phone: String, unit: String, monthly_rent: f64, move_in_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            unit,
            monthly_rent,
            move_in_date,
            notes: None,
            created_at: Utc::now(),
        }
    }
}
