//! Overview tab - summary cards and recent activity

use chrono::{Datelike, Utc};
use eframe::egui::{self, Color32, RichText};

use crate::domain::NoticeStatus;
use crate::gui::app::RentFlowApp;
use crate::gui::theme::{
    ACCENT_AMBER, ACCENT_BLUE, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY,
};

impl RentFlowApp {
    pub(crate) fn render_overview_tab(&mut self, ui: &mut egui::Ui) {
        let heading = self.settings.settings().tab_names.overview.clone();
        ui.heading(RichText::new(heading).color(TEXT_PRIMARY));
        ui.add_space(12.0);

        let today = Utc::now().date_naive();
        let tenant_count = self.data.tenants.len();
        let open_work = self.data.work_details.iter().filter(|w| w.is_open()).count();
        let sent_notices = self
            .data
            .notices
            .iter()
            .filter(|n| n.status == NoticeStatus::Sent)
            .count();
        let rent_this_month: f64 = self
            .data
            .rent_payments
            .iter()
            .filter(|p| p.paid_on.year() == today.year() && p.paid_on.month() == today.month())
            .map(|p| p.amount)
            .sum();
        let expenses_this_month: f64 = self
            .data
            .expenses
            .iter()
            .filter(|e| e.spent_on.year() == today.year() && e.spent_on.month() == today.month())
            .map(|e| e.amount)
            .sum();

        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "Tenants", tenant_count.to_string(), ACCENT_BLUE);
            stat_card(ui, "Open work items", open_work.to_string(), ACCENT_AMBER);
            stat_card(ui, "Notices sent", sent_notices.to_string(), ACCENT_GREEN);
            stat_card(
                ui,
                "Rent collected (month)",
                format!("{:.2}", rent_this_month),
                ACCENT_GREEN,
            );
            stat_card(
                ui,
                "Expenses (month)",
                format!("{:.2}", expenses_this_month),
                ACCENT_RED,
            );
        });

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("Recent notices").strong().color(TEXT_PRIMARY));
        ui.add_space(4.0);
        if self.data.notices.is_empty() {
            ui.label(RichText::new("No notices yet.").color(TEXT_DIM));
        }
        for notice in self.data.notices.iter().take(5) {
            ui.horizontal(|ui| {
                ui.label(RichText::new(notice.status.label()).small().color(TEXT_DIM));
                ui.label(&notice.title);
                ui.label(
                    RichText::new(self.data.tenant_name(notice.tenant_id))
                        .small()
                        .color(TEXT_DIM),
                );
            });
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Open work").strong().color(TEXT_PRIMARY));
        ui.add_space(4.0);
        let open: Vec<_> = self
            .data
            .work_details
            .iter()
            .filter(|w| w.is_open())
            .take(5)
            .collect();
        if open.is_empty() {
            ui.label(RichText::new("Nothing open.").color(TEXT_DIM));
        }
        for work in open {
            ui.horizontal(|ui| {
                ui.label(RichText::new(work.status.label()).small().color(TEXT_DIM));
                ui.label(&work.title);
                ui.label(
                    RichText::new(work.reported_on.to_string())
                        .small()
                        .color(TEXT_DIM),
                );
            });
        }
    }
}

fn stat_card(ui: &mut egui::Ui, label: &str, value: String, color: Color32) {
    egui::Frame::new()
        .fill(BG_SECONDARY)
        .inner_margin(16.0)
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(label).small().color(TEXT_DIM));
                ui.label(RichText::new(value).size(24.0).strong().color(color));
            });
        });
}
