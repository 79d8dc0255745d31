//! Typed operations per collection

use uuid::Uuid;

use super::{DbClient, DbError};
use crate::domain::{Expense, Notice, RentPayment, Tenant, TenantDocument, WorkDetail};

impl DbClient {
    // Tenants

    pub fn list_tenants(&self) -> Result<Vec<Tenant>, DbError> {
        self.fetch_all("tenants", Some("created_at.desc"))
    }

    pub fn create_tenant(&self, tenant: &Tenant) -> Result<Tenant, DbError> {
        self.insert("tenants", tenant)
    }

    pub fn update_tenant(&self, id: Uuid, patch: &serde_json::Value) -> Result<(), DbError> {
        self.update("tenants", id, patch)
    }

    pub fn delete_tenant(&self, id: Uuid) -> Result<(), DbError> {
        self.delete("tenants", id)
    }

    // Notices

    pub fn list_notices(&self) -> Result<Vec<Notice>, DbError> {
        self.fetch_all("notices", Some("created_at.desc"))
    }

    pub fn create_notice(&self, notice: &Notice) -> Result<Notice, DbError> {
        self.insert("notices", notice)
    }

    pub fn update_notice(&self, id: Uuid, patch: &serde_json::Value) -> Result<(), DbError> {
        self.update("notices", id, patch)
    }

    pub fn delete_notice(&self, id: Uuid) -> Result<(), DbError> {
        self.delete("notices", id)
    }

    // Work details

    pub fn list_work_details(&self) -> Result<Vec<WorkDetail>, DbError> {
        self.fetch_all("work_details", Some("reported_on.desc"))
    }

    pub fn create_work_detail(&self, work: &WorkDetail) -> Result<WorkDetail, DbError> {
        self.insert("work_details", work)
    }

    pub fn update_work_detail(&self, id: Uuid, patch: &serde_json::Value) -> Result<(), DbError> {
        self.update("work_details", id, patch)
    }

    pub fn delete_work_detail(&self, id: Uuid) -> Result<(), DbError> {
        self.delete("work_details", id)
    }

    // Ledgers

    pub fn list_rent_payments(&self) -> Result<Vec<RentPayment>, DbError> {
        self.fetch_all("rent_payments", Some("paid_on.desc"))
    }

    pub fn create_rent_payment(&self, payment: &RentPayment) -> Result<RentPayment, DbError> {
        self.insert("rent_payments", payment)
    }

    pub fn delete_rent_payment(&self, id: Uuid) -> Result<(), DbError> {
        self.delete("rent_payments", id)
    }

    pub fn list_expenses(&self) -> Result<Vec<Expense>, DbError> {
        self.fetch_all("expenses", Some("spent_on.desc"))
    }

    pub fn create_expense(&self, expense: &Expense) -> Result<Expense, DbError> {
        self.insert("expenses", expense)
    }

    pub fn delete_expense(&self, id: Uuid) -> Result<(), DbError> {
        self.delete("expenses", id)
    }

    // Documents

    pub fn list_documents_for(&self, tenant_id: Uuid) -> Result<Vec<TenantDocument>, DbError> {
        self.fetch_where("documents", "tenant_id", &tenant_id.to_string())
    }

    pub fn create_document(&self, document: &TenantDocument) -> Result<TenantDocument, DbError> {
        self.insert("documents", document)
    }

    pub fn update_document(&self, id: Uuid, patch: &serde_json::Value) -> Result<(), DbError> {
        self.update("documents", id, patch)
    }

    pub fn delete_document(&self, id: Uuid) -> Result<(), DbError> {
        self.delete("documents", id)
    }
}
