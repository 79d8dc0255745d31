//! Settings tab - edits the durable UI settings record
//!
//! Saving is a protected action: the whole record is rebuilt from the editor
//! fields and routed through the passcode gate before it reaches the store.

use eframe::egui::{self, RichText};

use crate::config::{AppSettings, SettingsStore, TabNames};
use crate::gui::app::{ProtectedAction, RentFlowApp};
use crate::gui::theme::{BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY};

/// Editor state for the settings tab
#[derive(Debug, Default)]
pub struct SettingsTabState {
    pub app_name: String,
    pub tab_overview: String,
    pub tab_tenants: String,
    pub tab_whatsapp: String,
    pub tab_reports: String,
    pub footer_name: String,
}

impl SettingsTabState {
    /// Fill the editor fields from the current settings record
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            app_name: settings.app_name.clone(),
            tab_overview: settings.tab_names.overview.clone(),
            tab_tenants: settings.tab_names.tenants.clone(),
            tab_whatsapp: settings.tab_names.whatsapp.clone(),
            tab_reports: settings.tab_names.reports.clone(),
            footer_name: settings.footer_name.clone(),
        }
    }

    /// Build the full replacement record from the editor fields
    fn to_settings(&self) -> AppSettings {
        AppSettings {
            app_name: self.app_name.trim().to_string(),
            tab_names: TabNames {
                overview: self.tab_overview.trim().to_string(),
                tenants: self.tab_tenants.trim().to_string(),
                whatsapp: self.tab_whatsapp.trim().to_string(),
                reports: self.tab_reports.trim().to_string(),
            },
            footer_name: self.footer_name.trim().to_string(),
        }
    }
}

impl RentFlowApp {
    pub(crate) fn render_settings_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
        ui.add_space(12.0);

        let mut save_clicked = false;
        let mut reset_clicked = false;

        egui::Frame::new()
            .fill(BG_SECONDARY)
            .inner_margin(12.0)
            .corner_radius(8.0)
            .show(ui, |ui| {
                let form = &mut self.settings_tab;
                egui::Grid::new("settings_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("App name");
                        ui.text_edit_singleline(&mut form.app_name);
                        ui.end_row();

                        ui.label("Overview tab");
                        ui.text_edit_singleline(&mut form.tab_overview);
                        ui.end_row();

                        ui.label("Tenants tab");
                        ui.text_edit_singleline(&mut form.tab_tenants);
                        ui.end_row();

                        ui.label("WhatsApp tab");
                        ui.text_edit_singleline(&mut form.tab_whatsapp);
                        ui.end_row();

                        ui.label("Reports tab");
                        ui.text_edit_singleline(&mut form.tab_reports);
                        ui.end_row();

                        ui.label("Footer");
                        ui.text_edit_singleline(&mut form.footer_name);
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        save_clicked = true;
                    }
                    if ui.button("Reset to defaults").clicked() {
                        reset_clicked = true;
                    }
                });
            });

        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "Stored at: {}",
                SettingsStore::default_slot_path().display()
            ))
            .small()
            .color(TEXT_DIM),
        );

        if reset_clicked {
            // Only resets the editor fields; nothing is saved yet
            self.settings_tab = SettingsTabState::from_settings(&AppSettings::default());
            self.set_status("Editor reset to defaults - press Save to apply");
        }
        if save_clicked {
            self.submit_settings();
        }
    }

    fn submit_settings(&mut self) {
        let next = self.settings_tab.to_settings();
        if next.app_name.is_empty() {
            return self.set_error("App name cannot be empty");
        }
        if next.tab_names.overview.is_empty()
            || next.tab_names.tenants.is_empty()
            || next.tab_names.whatsapp.is_empty()
            || next.tab_names.reports.is_empty()
        {
            return self.set_error("Tab names cannot be empty");
        }

        self.request_protected(ProtectedAction::SaveSettings(next));
    }
}
