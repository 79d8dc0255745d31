//! Tenants tab - tenant records and their stored documents

use eframe::egui::{self, RichText};
use uuid::Uuid;

use super::{parse_amount, parse_date};
use crate::domain::{Tenant, TenantDocument};
use crate::gui::app::{ProtectedAction, RentFlowApp};
use crate::gui::theme::{ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY};

/// Editor state for the tenants tab
#[derive(Debug, Default)]
pub struct TenantsTabState {
    // Add-tenant form
    pub name: String,
    pub phone: String,
    pub unit: String,
    pub monthly_rent: String,
    pub move_in: String,
    // Document section
    pub selected: Option<Uuid>,
    pub documents: Vec<TenantDocument>,
    pub documents_for: Option<Uuid>,
    pub document_path: String,
}

impl TenantsTabState {
    fn clear_form(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.unit.clear();
        self.monthly_rent.clear();
        self.move_in.clear();
    }

    /// Force a reload of the document list on the next frame
    pub fn invalidate_documents(&mut self) {
        self.documents_for = None;
    }
}

impl RentFlowApp {
    pub(crate) fn render_tenants_tab(&mut self, ui: &mut egui::Ui) {
        let heading = self.settings.settings().tab_names.tenants.clone();
        ui.heading(RichText::new(heading).color(TEXT_PRIMARY));
        ui.add_space(12.0);

        self.render_add_tenant_form(ui);
        ui.add_space(12.0);

        // Collected during the render pass, applied afterwards
        let mut delete_tenant: Option<Uuid> = None;
        let mut select_tenant: Option<Uuid> = None;

        let tenants = self.data.tenants.clone();
        if tenants.is_empty() {
            ui.label(RichText::new("No tenants yet.").color(TEXT_DIM));
        } else {
            egui::Grid::new("tenants_grid")
                .striped(true)
                .min_col_width(80.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Name").strong());
                    ui.label(RichText::new("Unit").strong());
                    ui.label(RichText::new("Phone").strong());
                    ui.label(RichText::new("Rent").strong());
                    ui.label(RichText::new("Moved in").strong());
                    ui.label("");
                    ui.end_row();

                    for tenant in &tenants {
                        ui.label(&tenant.name);
                        ui.label(&tenant.unit);
                        ui.label(&tenant.phone);
                        ui.label(format!("{:.2}", tenant.monthly_rent));
                        ui.label(tenant.move_in_date.to_string());
                        ui.horizontal(|ui| {
                            let selected = self.tenants_tab.selected == Some(tenant.id);
                            if ui.selectable_label(selected, "Documents").clicked() {
                                select_tenant = Some(tenant.id);
                            }
                            if ui
                                .button(RichText::new("Delete").color(ACCENT_RED))
                                .clicked()
                            {
                                delete_tenant = Some(tenant.id);
                            }
                        });
                        ui.end_row();
                    }
                });
        }

        if let Some(id) = select_tenant {
            // Clicking the active tenant again collapses the section
            if self.tenants_tab.selected == Some(id) {
                self.tenants_tab.selected = None;
            } else {
                self.tenants_tab.selected = Some(id);
            }
        }
        if let Some(id) = delete_tenant {
            self.request_protected(ProtectedAction::DeleteTenant(id));
        }

        if self.tenants_tab.selected.is_some() {
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);
            self.render_documents_section(ui);
        }
    }

    fn render_add_tenant_form(&mut self, ui: &mut egui::Ui) {
        let mut add_clicked = false;

        egui::Frame::new()
            .fill(BG_SECONDARY)
            .inner_margin(12.0)
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Add tenant").strong().color(TEXT_PRIMARY));
                ui.add_space(6.0);

                let form = &mut self.tenants_tab;
                egui::Grid::new("add_tenant_form")
                    .num_columns(4)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut form.name);
                        ui.label("Phone");
                        ui.text_edit_singleline(&mut form.phone);
                        ui.end_row();

                        ui.label("Unit");
                        ui.text_edit_singleline(&mut form.unit);
                        ui.label("Monthly rent");
                        ui.text_edit_singleline(&mut form.monthly_rent);
                        ui.end_row();

                        ui.label("Move-in date");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.move_in)
                                .hint_text("YYYY-MM-DD"),
                        );
                        ui.end_row();
                    });

                ui.add_space(6.0);
                if ui.button("Add Tenant").clicked() {
                    add_clicked = true;
                }
            });

        if add_clicked {
            self.submit_add_tenant();
        }
    }

    fn submit_add_tenant(&mut self) {
        let form = &self.tenants_tab;
        if form.name.trim().is_empty() {
            self.set_error("Tenant name is required");
            return;
        }
        let rent = match parse_amount("monthly rent", &form.monthly_rent) {
            Ok(v) => v,
            Err(e) => return self.set_error(e),
        };
        let move_in = match parse_date("move-in date", &form.move_in) {
            Ok(v) => v,
            Err(e) => return self.set_error(e),
        };

        let tenant = Tenant::new(
            form.name.trim().to_string(),
            form.phone.trim().to_string(),
            form.unit.trim().to_string(),
            rent,
            move_in,
        );

        if self
            .run_write("Tenant added", |c| c.create_tenant(&tenant))
            .is_some()
        {
            self.tenants_tab.clear_form();
        }
    }

    fn render_documents_section(&mut self, ui: &mut egui::Ui) {
        self.reload_documents_if_needed();

        let Some(tenant_id) = self.tenants_tab.selected else {
            return;
        };
        let tenant_name = self.data.tenant_name(tenant_id).to_string();

        ui.label(
            RichText::new(format!("Documents - {}", tenant_name))
                .strong()
                .color(TEXT_PRIMARY),
        );
        ui.add_space(6.0);

        let mut upload_clicked = false;
        let mut describe_doc: Option<(Uuid, String)> = None;
        let mut delete_doc: Option<Uuid> = None;

        ui.horizontal(|ui| {
            ui.label("Image file");
            ui.add(
                egui::TextEdit::singleline(&mut self.tenants_tab.document_path)
                    .hint_text("/path/to/scan.png")
                    .desired_width(320.0),
            );
            if ui.button("Upload").clicked() {
                upload_clicked = true;
            }
        });
        ui.add_space(6.0);

        if self.tenants_tab.documents.is_empty() {
            ui.label(RichText::new("No documents stored.").color(TEXT_DIM));
        }
        let documents = self.tenants_tab.documents.clone();
        for doc in &documents {
            ui.horizontal(|ui| {
                ui.label(&doc.file_name);
                ui.label(RichText::new(&doc.mime_type).small().color(TEXT_DIM));
                match &doc.description {
                    Some(description) => {
                        ui.label(RichText::new(description).italics().color(TEXT_DIM));
                    }
                    None => {
                        if ui.button("Describe with AI").clicked() {
                            describe_doc = Some((doc.id, doc.data_uri.clone()));
                        }
                    }
                }
                if ui
                    .button(RichText::new("Delete").color(ACCENT_RED))
                    .clicked()
                {
                    delete_doc = Some(doc.id);
                }
            });
        }

        if upload_clicked {
            self.submit_upload_document(tenant_id);
        }
        if let Some((id, data_uri)) = describe_doc {
            self.describe_document(id, &data_uri);
        }
        if let Some(id) = delete_doc {
            self.request_protected(ProtectedAction::DeleteDocument(id));
        }
    }

    fn submit_upload_document(&mut self, tenant_id: Uuid) {
        let path = self.tenants_tab.document_path.trim().to_string();
        if path.is_empty() {
            self.set_error("Enter the path of an image file to upload");
            return;
        }

        let document = match TenantDocument::from_file(tenant_id, std::path::Path::new(&path)) {
            Ok(doc) => doc,
            Err(e) => return self.set_error(format!("{:#}", e)),
        };

        if self
            .run_write("Document uploaded", |c| c.create_document(&document))
            .is_some()
        {
            self.tenants_tab.document_path.clear();
            self.tenants_tab.invalidate_documents();
        }
    }

    /// Ask the AI helper for a one-sentence description and store it
    fn describe_document(&mut self, id: Uuid, data_uri: &str) {
        let outcome = self
            .ai_client()
            .and_then(|ai| ai.describe_document(data_uri).map_err(anyhow::Error::from));

        match outcome {
            Ok(description) => {
                let patch = serde_json::json!({ "description": description });
                if self
                    .run_write("Description saved", |c| c.update_document(id, &patch))
                    .is_some()
                {
                    self.tenants_tab.invalidate_documents();
                }
            }
            Err(e) => {
                tracing::error!("Document description failed: {:#}", e);
                self.set_error(format!("{:#}", e));
            }
        }
    }

    fn reload_documents_if_needed(&mut self) {
        let Some(selected) = self.tenants_tab.selected else {
            self.tenants_tab.documents.clear();
            self.tenants_tab.documents_for = None;
            return;
        };
        if self.tenants_tab.documents_for == Some(selected) {
            return;
        }

        let result = self
            .browse_client()
            .cloned()
            .map(|c| c.list_documents_for(selected));

        self.tenants_tab.documents_for = Some(selected);
        match result {
            Some(Ok(documents)) => self.tenants_tab.documents = documents,
            Some(Err(e)) => {
                self.tenants_tab.documents.clear();
                self.set_error(format!("Failed to load documents: {}", e));
            }
            None => self.tenants_tab.documents.clear(),
        }
    }
}
