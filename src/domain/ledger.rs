//! Rent and expense ledger entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rent payment received from a tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentPayment {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub amount: f64,
    pub paid_on: NaiveDate,
    /// Rent period this payment covers, e.g. "2024-06"
    pub period: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl RentPayment {
    pub fn new(tenant_id: Uuid, amount: f64, paid_on: NaiveDate, period: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            amount,
            paid_on,
            period,
            note: None,
        }
    }
}

/// A property expense (repairs, utilities, fees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub spent_on: NaiveDate,
}

impl Expense {
    pub fn new(category: String, description: String, amount: f64, spent_on: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            description,
            amount,
            spent_on,
        }
    }
}
