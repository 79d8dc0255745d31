//! Reports tab - rent/expense ledgers and the work-details board

use eframe::egui::{self, RichText};
use uuid::Uuid;

use super::{parse_amount, parse_date};
use crate::domain::{Expense, RentPayment, WorkDetail, WorkStatus};
use crate::gui::app::{ProtectedAction, RentFlowApp};
use crate::gui::theme::{
    ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, STATUS_DONE, STATUS_IN_PROGRESS, STATUS_OPEN,
    TEXT_DIM, TEXT_PRIMARY,
};

/// Editor state for the reports tab
#[derive(Debug, Default)]
pub struct ReportsTabState {
    // Rent payment form
    pub pay_tenant: Option<Uuid>,
    pub pay_amount: String,
    pub pay_date: String,
    pub pay_period: String,
    // Expense form
    pub exp_category: String,
    pub exp_description: String,
    pub exp_amount: String,
    pub exp_date: String,
    // Work item form
    pub work_title: String,
    pub work_description: String,
    pub work_date: String,
}

impl RentFlowApp {
    pub(crate) fn render_reports_tab(&mut self, ui: &mut egui::Ui) {
        let heading = self.settings.settings().tab_names.reports.clone();
        ui.heading(RichText::new(heading).color(TEXT_PRIMARY));
        ui.add_space(12.0);

        self.render_payments_section(ui);
        ui.add_space(16.0);
        self.render_expenses_section(ui);
        ui.add_space(16.0);
        self.render_work_section(ui);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Rent payments
    // ═══════════════════════════════════════════════════════════════════════

    fn render_payments_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Rent payments").strong().color(TEXT_PRIMARY));
        ui.add_space(6.0);

        let mut add_clicked = false;
        let mut delete_payment: Option<Uuid> = None;

        let tenants: Vec<(Uuid, String)> = self
            .data
            .tenants
            .iter()
            .map(|t| (t.id, t.name.clone()))
            .collect();

        egui::Frame::new()
            .fill(BG_SECONDARY)
            .inner_margin(10.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                let form = &mut self.reports_tab;
                ui.horizontal(|ui| {
                    let selected_name = form
                        .pay_tenant
                        .and_then(|id| {
                            tenants
                                .iter()
                                .find(|(tid, _)| *tid == id)
                                .map(|(_, name)| name.clone())
                        })
                        .unwrap_or_else(|| "Tenant".to_string());
                    egui::ComboBox::from_id_salt("pay_tenant")
                        .selected_text(selected_name)
                        .show_ui(ui, |ui| {
                            for (id, name) in &tenants {
                                ui.selectable_value(&mut form.pay_tenant, Some(*id), name);
                            }
                        });

                    ui.add(
                        egui::TextEdit::singleline(&mut form.pay_amount)
                            .hint_text("Amount")
                            .desired_width(80.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.pay_date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(100.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.pay_period)
                            .hint_text("Period (2024-06)")
                            .desired_width(110.0),
                    );
                    if ui.button("Record payment").clicked() {
                        add_clicked = true;
                    }
                });
            });

        ui.add_space(6.0);

        let payments = self.data.rent_payments.clone();
        let total: f64 = payments.iter().map(|p| p.amount).sum();
        if payments.is_empty() {
            ui.label(RichText::new("No payments recorded.").color(TEXT_DIM));
        } else {
            egui::Grid::new("payments_grid")
                .striped(true)
                .min_col_width(80.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Tenant").strong());
                    ui.label(RichText::new("Amount").strong());
                    ui.label(RichText::new("Paid on").strong());
                    ui.label(RichText::new("Period").strong());
                    ui.label("");
                    ui.end_row();

                    for payment in &payments {
                        ui.label(self.data.tenant_name(payment.tenant_id));
                        ui.label(format!("{:.2}", payment.amount));
                        ui.label(payment.paid_on.to_string());
                        ui.label(&payment.period);
                        if ui
                            .button(RichText::new("Delete").color(ACCENT_RED))
                            .clicked()
                        {
                            delete_payment = Some(payment.id);
                        }
                        ui.end_row();
                    }
                });
            ui.label(
                RichText::new(format!("Total collected: {:.2}", total))
                    .small()
                    .color(ACCENT_GREEN),
            );
        }

        if add_clicked {
            self.submit_payment();
        }
        if let Some(id) = delete_payment {
            self.request_protected(ProtectedAction::DeleteRentPayment(id));
        }
    }

    fn submit_payment(&mut self) {
        let form = &self.reports_tab;
        let Some(tenant_id) = form.pay_tenant else {
            return self.set_error("Select the paying tenant");
        };
        let amount = match parse_amount("amount", &form.pay_amount) {
            Ok(v) => v,
            Err(e) => return self.set_error(e),
        };
        let paid_on = match parse_date("payment date", &form.pay_date) {
            Ok(v) => v,
            Err(e) => return self.set_error(e),
        };
        if form.pay_period.trim().is_empty() {
            return self.set_error("Enter the rent period this payment covers");
        }

        let payment = RentPayment::new(tenant_id, amount, paid_on, form.pay_period.trim().to_string());
        if self
            .run_write("Payment recorded", |c| c.create_rent_payment(&payment))
            .is_some()
        {
            let form = &mut self.reports_tab;
            form.pay_amount.clear();
            form.pay_date.clear();
            form.pay_period.clear();
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Expenses
    // ═══════════════════════════════════════════════════════════════════════

    fn render_expenses_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Expenses").strong().color(TEXT_PRIMARY));
        ui.add_space(6.0);

        let mut add_clicked = false;
        let mut delete_expense: Option<Uuid> = None;

        egui::Frame::new()
            .fill(BG_SECONDARY)
            .inner_margin(10.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                let form = &mut self.reports_tab;
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.exp_category)
                            .hint_text("Category")
                            .desired_width(100.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.exp_description)
                            .hint_text("Description")
                            .desired_width(200.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.exp_amount)
                            .hint_text("Amount")
                            .desired_width(80.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.exp_date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(100.0),
                    );
                    if ui.button("Add expense").clicked() {
                        add_clicked = true;
                    }
                });
            });

        ui.add_space(6.0);

        let expenses = self.data.expenses.clone();
        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        if expenses.is_empty() {
            ui.label(RichText::new("No expenses recorded.").color(TEXT_DIM));
        } else {
            egui::Grid::new("expenses_grid")
                .striped(true)
                .min_col_width(80.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Category").strong());
                    ui.label(RichText::new("Description").strong());
                    ui.label(RichText::new("Amount").strong());
                    ui.label(RichText::new("Date").strong());
                    ui.label("");
                    ui.end_row();

                    for expense in &expenses {
                        ui.label(&expense.category);
                        ui.label(&expense.description);
                        ui.label(format!("{:.2}", expense.amount));
                        ui.label(expense.spent_on.to_string());
                        if ui
                            .button(RichText::new("Delete").color(ACCENT_RED))
                            .clicked()
                        {
                            delete_expense = Some(expense.id);
                        }
                        ui.end_row();
                    }
                });
            ui.label(
                RichText::new(format!("Total spent: {:.2}", total))
                    .small()
                    .color(ACCENT_RED),
            );
        }

        if add_clicked {
            self.submit_expense();
        }
        if let Some(id) = delete_expense {
            self.request_protected(ProtectedAction::DeleteExpense(id));
        }
    }

    fn submit_expense(&mut self) {
        let form = &self.reports_tab;
        if form.exp_category.trim().is_empty() {
            return self.set_error("Expense category is required");
        }
        let amount = match parse_amount("amount", &form.exp_amount) {
            Ok(v) => v,
            Err(e) => return self.set_error(e),
        };
        let spent_on = match parse_date("expense date", &form.exp_date) {
            Ok(v) => v,
            Err(e) => return self.set_error(e),
        };

        let expense = Expense::new(
            form.exp_category.trim().to_string(),
            form.exp_description.trim().to_string(),
            amount,
            spent_on,
        );
        if self
            .run_write("Expense added", |c| c.create_expense(&expense))
            .is_some()
        {
            let form = &mut self.reports_tab;
            form.exp_category.clear();
            form.exp_description.clear();
            form.exp_amount.clear();
            form.exp_date.clear();
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Work details
    // ═══════════════════════════════════════════════════════════════════════

    fn render_work_section(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Work details").strong().color(TEXT_PRIMARY));
        ui.add_space(6.0);

        let mut add_clicked = false;
        let mut status_change: Option<(Uuid, WorkStatus)> = None;
        let mut delete_work: Option<Uuid> = None;

        egui::Frame::new()
            .fill(BG_SECONDARY)
            .inner_margin(10.0)
            .corner_radius(6.0)
            .show(ui, |ui| {
                let form = &mut self.reports_tab;
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut form.work_title)
                            .hint_text("Title")
                            .desired_width(160.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.work_description)
                            .hint_text("What needs doing")
                            .desired_width(240.0),
                    );
                    ui.add(
                        egui::TextEdit::singleline(&mut form.work_date)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(100.0),
                    );
                    if ui.button("Add work item").clicked() {
                        add_clicked = true;
                    }
                });
            });

        ui.add_space(6.0);

        let work_details = self.data.work_details.clone();
        if work_details.is_empty() {
            ui.label(RichText::new("No work items.").color(TEXT_DIM));
        }
        for work in &work_details {
            ui.horizontal(|ui| {
                let status_color = match work.status {
                    WorkStatus::Open => STATUS_OPEN,
                    WorkStatus::InProgress => STATUS_IN_PROGRESS,
                    WorkStatus::Done => STATUS_DONE,
                };
                ui.label(RichText::new("●").color(status_color));
                ui.label(RichText::new(&work.title).strong());
                ui.label(RichText::new(&work.description).color(TEXT_DIM));
                ui.label(
                    RichText::new(work.reported_on.to_string())
                        .small()
                        .color(TEXT_DIM),
                );

                let mut status = work.status;
                egui::ComboBox::from_id_salt(("work_status", work.id))
                    .selected_text(status.label())
                    .show_ui(ui, |ui| {
                        for candidate in WorkStatus::ALL {
                            ui.selectable_value(&mut status, candidate, candidate.label());
                        }
                    });
                if status != work.status {
                    status_change = Some((work.id, status));
                }

                if ui
                    .button(RichText::new("Delete").color(ACCENT_RED))
                    .clicked()
                {
                    delete_work = Some(work.id);
                }
            });
        }

        if add_clicked {
            self.submit_work_item();
        }
        if let Some((id, status)) = status_change {
            let patch = serde_json::json!({ "status": status });
            self.run_write("Work item updated", |c| c.update_work_detail(id, &patch));
        }
        if let Some(id) = delete_work {
            self.request_protected(ProtectedAction::DeleteWorkDetail(id));
        }
    }

    fn submit_work_item(&mut self) {
        let form = &self.reports_tab;
        if form.work_title.trim().is_empty() {
            return self.set_error("Work item title is required");
        }
        let reported_on = match parse_date("reported date", &form.work_date) {
            Ok(v) => v,
            Err(e) => return self.set_error(e),
        };

        let work = WorkDetail::new(
            form.work_title.trim().to_string(),
            form.work_description.trim().to_string(),
            reported_on,
        );
        if self
            .run_write("Work item added", |c| c.create_work_detail(&work))
            .is_some()
        {
            let form = &mut self.reports_tab;
            form.work_title.clear();
            form.work_description.clear();
            form.work_date.clear();
        }
    }
}
