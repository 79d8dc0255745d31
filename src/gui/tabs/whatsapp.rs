//! WhatsApp tab - notices to tenants
//!
//! Composer on top (with the AI drafting helper), notice list below. A saved
//! notice starts as a draft; "Mark sent" flips its status once the text has
//! actually gone out to the tenant.

use eframe::egui::{self, RichText};
use uuid::Uuid;

use crate::domain::{Notice, NoticeStatus};
use crate::gui::app::{ProtectedAction, RentFlowApp};
use crate::gui::theme::{ACCENT_RED, BG_SECONDARY, STATUS_DONE, STATUS_DRAFT, TEXT_DIM, TEXT_PRIMARY};

/// Editor state for the notice composer
#[derive(Debug, Default)]
pub struct WhatsappTabState {
    pub tenant_id: Option<Uuid>,
    pub title: String,
    pub points: String,
    pub body: String,
}

impl WhatsappTabState {
    fn clear(&mut self) {
        self.tenant_id = None;
        self.title.clear();
        self.points.clear();
        self.body.clear();
    }
}

impl RentFlowApp {
    pub(crate) fn render_whatsapp_tab(&mut self, ui: &mut egui::Ui) {
        let heading = self.settings.settings().tab_names.whatsapp.clone();
        ui.heading(RichText::new(heading).color(TEXT_PRIMARY));
        ui.add_space(12.0);

        let mut draft_clicked = false;
        let mut save_clicked = false;

        let tenants: Vec<(Uuid, String)> = self
            .data
            .tenants
            .iter()
            .map(|t| (t.id, t.name.clone()))
            .collect();

        egui::Frame::new()
            .fill(BG_SECONDARY)
            .inner_margin(12.0)
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Compose notice").strong().color(TEXT_PRIMARY));
                ui.add_space(6.0);

                let form = &mut self.whatsapp_tab;
                ui.horizontal(|ui| {
                    let selected_name = form
                        .tenant_id
                        .and_then(|id| {
                            tenants
                                .iter()
                                .find(|(tid, _)| *tid == id)
                                .map(|(_, name)| name.clone())
                        })
                        .unwrap_or_else(|| "Select tenant".to_string());

                    egui::ComboBox::from_label("Tenant")
                        .selected_text(selected_name)
                        .show_ui(ui, |ui| {
                            for (id, name) in &tenants {
                                ui.selectable_value(&mut form.tenant_id, Some(*id), name);
                            }
                        });

                    ui.add_space(12.0);
                    ui.label("Title");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.title)
                            .hint_text("Rent reminder")
                            .desired_width(240.0),
                    );
                });

                ui.add_space(6.0);
                ui.label(RichText::new("Points (one per line)").color(TEXT_DIM));
                ui.add(
                    egui::TextEdit::multiline(&mut form.points)
                        .hint_text("- rent for June pending\n- please pay by the 10th")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(6.0);
                ui.label(RichText::new("Notice text").color(TEXT_DIM));
                ui.add(
                    egui::TextEdit::multiline(&mut form.body)
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("✨ Draft with AI").clicked() {
                        draft_clicked = true;
                    }
                    if ui.button("Save draft").clicked() {
                        save_clicked = true;
                    }
                });
            });

        if draft_clicked {
            self.draft_notice_with_ai();
        }
        if save_clicked {
            self.submit_notice();
        }

        ui.add_space(12.0);
        self.render_notice_list(ui);
    }

    /// Fill the body field from the bullet points via the AI helper
    fn draft_notice_with_ai(&mut self) {
        let points = self.whatsapp_tab.points.clone();
        let outcome = self
            .ai_client()
            .and_then(|ai| ai.draft_notice(&points).map_err(anyhow::Error::from));

        match outcome {
            Ok(body) => {
                self.whatsapp_tab.body = body;
                self.set_status("Draft generated");
            }
            Err(e) => {
                tracing::error!("Notice drafting failed: {:#}", e);
                self.set_error(format!("{:#}", e));
            }
        }
    }

    fn submit_notice(&mut self) {
        let form = &self.whatsapp_tab;
        let Some(tenant_id) = form.tenant_id else {
            return self.set_error("Select a tenant for the notice");
        };
        if form.title.trim().is_empty() {
            return self.set_error("Notice title is required");
        }
        if form.body.trim().is_empty() {
            return self.set_error("Notice text is empty - write it or draft it with AI");
        }

        let notice = Notice::new(
            tenant_id,
            form.title.trim().to_string(),
            form.points.trim().to_string(),
            form.body.trim().to_string(),
        );

        if self
            .run_write("Notice saved", |c| c.create_notice(&notice))
            .is_some()
        {
            self.whatsapp_tab.clear();
        }
    }

    fn render_notice_list(&mut self, ui: &mut egui::Ui) {
        let mut mark_sent: Option<Uuid> = None;
        let mut delete_notice: Option<Uuid> = None;

        let notices = self.data.notices.clone();
        if notices.is_empty() {
            ui.label(RichText::new("No notices yet.").color(TEXT_DIM));
        }

        for notice in &notices {
            egui::Frame::new()
                .fill(BG_SECONDARY)
                .inner_margin(10.0)
                .corner_radius(6.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let status_color = match notice.status {
                            NoticeStatus::Draft => STATUS_DRAFT,
                            NoticeStatus::Sent => STATUS_DONE,
                        };
                        ui.label(
                            RichText::new(notice.status.label())
                                .small()
                                .color(status_color),
                        );
                        ui.label(RichText::new(&notice.title).strong());
                        ui.label(
                            RichText::new(self.data.tenant_name(notice.tenant_id))
                                .small()
                                .color(TEXT_DIM),
                        );
                        ui.label(
                            RichText::new(notice.created_at.format("%Y-%m-%d").to_string())
                                .small()
                                .color(TEXT_DIM),
                        );

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .button(RichText::new("Delete").color(ACCENT_RED))
                                    .clicked()
                                {
                                    delete_notice = Some(notice.id);
                                }
                                if notice.status == NoticeStatus::Draft
                                    && ui.button("Mark sent").clicked()
                                {
                                    mark_sent = Some(notice.id);
                                }
                            },
                        );
                    });
                    ui.label(RichText::new(&notice.body).color(TEXT_DIM));
                });
            ui.add_space(6.0);
        }

        if let Some(id) = mark_sent {
            let patch = serde_json::json!({ "status": "sent" });
            self.run_write("Notice marked as sent", |c| c.update_notice(id, &patch));
        }
        if let Some(id) = delete_notice {
            self.request_protected(ProtectedAction::DeleteNotice(id));
        }
    }
}
