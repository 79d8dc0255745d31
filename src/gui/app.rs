//! Main dashboard application
//!
//! Holds the dependency-injected stores (settings, passcode gate), the
//! collaborator clients, cached record lists, and per-tab editor state. All
//! record mutations funnel through [`RentFlowApp::run_write`]; destructive
//! ones are first routed through the passcode gate as [`ProtectedAction`]s.

use eframe::egui::{self, Align, Layout, RichText, Stroke};
use uuid::Uuid;

use super::passcode::{render_passcode_dialog, PasscodeDialogState};
use super::tabs::{
    reports::ReportsTabState, settings::SettingsTabState, tenants::TenantsTabState,
    whatsapp::WhatsappTabState, Tab,
};
use super::theme::{
    ACCENT_GREEN, ACCENT_RED, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::ai::AiClient;
use crate::config::{AppSettings, Config, SettingsStore};
use crate::db::{DbClient, DbError};
use crate::domain::{Expense, Notice, RentPayment, Tenant, WorkDetail};
use crate::protection::ProtectionGate;

/// Actions that require passcode confirmation before running
#[derive(Debug, Clone)]
pub enum ProtectedAction {
    SaveSettings(AppSettings),
    DeleteTenant(Uuid),
    DeleteNotice(Uuid),
    DeleteWorkDetail(Uuid),
    DeleteRentPayment(Uuid),
    DeleteExpense(Uuid),
    DeleteDocument(Uuid),
}

/// Cached record lists, refreshed from the hosted service after every change
#[derive(Debug, Default)]
pub struct DashboardData {
    pub tenants: Vec<Tenant>,
    pub notices: Vec<Notice>,
    pub work_details: Vec<WorkDetail>,
    pub rent_payments: Vec<RentPayment>,
    pub expenses: Vec<Expense>,
}

impl DashboardData {
    /// Tenant name for display, or a placeholder when the record is gone
    pub fn tenant_name(&self, id: Uuid) -> &str {
        self.tenants
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
            .unwrap_or("(former tenant)")
    }
}

/// Main application state
pub struct RentFlowApp {
    /// Application configuration (collaborator URLs, passcode)
    config: Config,
    /// Durable UI settings store
    pub(crate) settings: SettingsStore,
    /// Passcode gate for protected actions
    pub(crate) gate: ProtectionGate<ProtectedAction>,
    /// Passcode dialog transient state
    passcode_dialog: PasscodeDialogState,
    /// Read-only database client; None when no anon key is configured
    reader: Option<DbClient>,
    /// Read/write database client, created on first write
    writer: Option<DbClient>,
    /// AI client, created on first helper call
    ai: Option<AiClient>,
    /// Currently selected tab
    pub(crate) active_tab: Tab,
    /// Last operation status message (text, is_error)
    pub(crate) status: Option<(String, bool)>,
    /// Cached record lists
    pub(crate) data: DashboardData,
    /// Reload the caches on the next frame
    pub(crate) needs_refresh: bool,
    /// Per-tab editor state
    pub(crate) tenants_tab: TenantsTabState,
    pub(crate) whatsapp_tab: WhatsappTabState,
    pub(crate) reports_tab: ReportsTabState,
    pub(crate) settings_tab: SettingsTabState,
}

impl RentFlowApp {
    pub fn new(config: Config, settings: SettingsStore) -> Self {
        let reader = DbClient::read_only_from_env(&config.db.base_url);
        let gate = ProtectionGate::new(config.protection.passcode.clone());
        let settings_tab = SettingsTabState::from_settings(settings.settings());

        Self {
            config,
            settings,
            gate,
            passcode_dialog: PasscodeDialogState::default(),
            reader,
            writer: None,
            ai: None,
            active_tab: Tab::Overview,
            status: None,
            data: DashboardData::default(),
            needs_refresh: true,
            tenants_tab: TenantsTabState::default(),
            whatsapp_tab: WhatsappTabState::default(),
            reports_tab: ReportsTabState::default(),
            settings_tab,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Collaborator clients
    // ═══════════════════════════════════════════════════════════════════════

    /// Client used for browsing; falls back to the writer once one exists
    pub(crate) fn browse_client(&self) -> Option<&DbClient> {
        self.reader.as_ref().or(self.writer.as_ref())
    }

    /// Read/write client, created from the environment on first use
    fn writer(&mut self) -> anyhow::Result<&DbClient> {
        if self.writer.is_none() {
            self.writer = Some(DbClient::service_from_env(&self.config.db.base_url)?);
        }
        Ok(self.writer.as_ref().expect("initialized above"))
    }

    /// AI client, created from the environment on first use
    pub(crate) fn ai_client(&mut self) -> anyhow::Result<&AiClient> {
        if self.ai.is_none() {
            self.ai = Some(AiClient::from_env(&self.config.ai)?);
        }
        Ok(self.ai.as_ref().expect("initialized above"))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Status + mutations
    // ═══════════════════════════════════════════════════════════════════════

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some((msg.into(), false));
    }

    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.status = Some((msg.into(), true));
    }

    /// Run a write against the hosted service.
    ///
    /// Failures - including a missing service key, which is fatal for the
    /// operation - end up as an error message in the status strip and are
    /// never propagated further.
    pub(crate) fn run_write<T>(
        &mut self,
        success: &str,
        op: impl FnOnce(&DbClient) -> Result<T, DbError>,
    ) -> Option<T> {
        let outcome = match self.writer() {
            Ok(client) => op(client).map_err(anyhow::Error::from),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(value) => {
                self.set_status(success);
                self.needs_refresh = true;
                Some(value)
            }
            Err(e) => {
                tracing::error!("{:#}", e);
                self.set_error(format!("{:#}", e));
                None
            }
        }
    }

    /// Route an action through the passcode gate
    pub(crate) fn request_protected(&mut self, action: ProtectedAction) {
        let was_open = self.gate.challenge_open();
        if let Some(action) = self.gate.guard(action) {
            self.apply_protected(action);
        } else if !was_open {
            self.passcode_dialog.open();
        }
    }

    /// Execute a protected action after the gate released it
    pub(crate) fn apply_protected(&mut self, action: ProtectedAction) {
        match action {
            ProtectedAction::SaveSettings(next) => {
                self.settings.write(next);
                self.set_status("Settings saved");
            }
            ProtectedAction::DeleteTenant(id) => {
                self.run_write("Tenant deleted", |c| c.delete_tenant(id));
            }
            ProtectedAction::DeleteNotice(id) => {
                self.run_write("Notice deleted", |c| c.delete_notice(id));
            }
            ProtectedAction::DeleteWorkDetail(id) => {
                self.run_write("Work item deleted", |c| c.delete_work_detail(id));
            }
            ProtectedAction::DeleteRentPayment(id) => {
                self.run_write("Payment deleted", |c| c.delete_rent_payment(id));
            }
            ProtectedAction::DeleteExpense(id) => {
                self.run_write("Expense deleted", |c| c.delete_expense(id));
            }
            ProtectedAction::DeleteDocument(id) => {
                if self
                    .run_write("Document deleted", |c| c.delete_document(id))
                    .is_some()
                {
                    self.tenants_tab.invalidate_documents();
                }
            }
        }
    }

    /// Reload every cached record list from the hosted service
    fn refresh_data(&mut self) {
        let Some(client) = self.browse_client().cloned() else {
            self.set_error(format!(
                "Browsing disabled: set {} to enable record loading",
                crate::db::ANON_KEY_VAR
            ));
            return;
        };

        match load_dashboard(&client) {
            Ok(data) => self.data = data,
            Err(e) => {
                tracing::error!("Failed to refresh records: {}", e);
                self.set_error(format!("Failed to refresh records: {}", e));
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Chrome
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply the dark theme to the egui context
    fn apply_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals.dark_mode = true;
        style.visuals.panel_fill = BG_PRIMARY;
        style.visuals.window_fill = BG_PRIMARY;
        style.visuals.extreme_bg_color = BG_SECONDARY;
        style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
        style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
        style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.bg_fill = BG_HIGHLIGHT;
        style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
        ctx.set_style(style);
    }

    /// Left navigation panel; labels come from the settings store
    fn render_nav(&mut self, ctx: &egui::Context) {
        let settings = self.settings.settings().clone();
        let entries = [
            (Tab::Overview, settings.tab_names.overview),
            (Tab::Tenants, settings.tab_names.tenants),
            (Tab::Whatsapp, settings.tab_names.whatsapp),
            (Tab::Reports, settings.tab_names.reports),
            (Tab::Settings, "Settings".to_string()),
        ];

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(&settings.app_name)
                        .size(20.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(16.0);

                for (tab, label) in &entries {
                    let selected = self.active_tab == *tab;
                    if ui
                        .selectable_label(selected, RichText::new(label).size(14.0))
                        .clicked()
                    {
                        self.active_tab = *tab;
                    }
                    ui.add_space(2.0);
                }

                ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
                    ui.add_space(8.0);
                    if ui.small_button("⟳ Refresh").clicked() {
                        self.needs_refresh = true;
                    }
                });
            });
    }

    /// Bottom strip: footer line plus the last operation status
    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let footer = self.settings.settings().footer_name.clone();
        let status = self.status.clone();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(footer).small().color(TEXT_MUTED));
                if let Some((msg, is_error)) = status {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let color = if is_error { ACCENT_RED } else { ACCENT_GREEN };
                        ui.label(RichText::new(msg).small().color(color));
                    });
                }
            });
        });
    }
}

impl eframe::App for RentFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        if self.needs_refresh {
            self.needs_refresh = false;
            self.refresh_data();
        }

        // Status bar first so the other panels account for its height
        self.render_status_bar(ctx);
        self.render_nav(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.active_tab {
                Tab::Overview => self.render_overview_tab(ui),
                Tab::Tenants => self.render_tenants_tab(ui),
                Tab::Whatsapp => self.render_whatsapp_tab(ui),
                Tab::Reports => self.render_reports_tab(ui),
                Tab::Settings => self.render_settings_tab(ui),
            });
        });

        // Passcode dialog on top of everything
        if let Some(action) = render_passcode_dialog(ctx, &mut self.passcode_dialog, &mut self.gate)
        {
            self.apply_protected(action);
        }
    }
}

fn load_dashboard(client: &DbClient) -> Result<DashboardData, DbError> {
    Ok(DashboardData {
        tenants: client.list_tenants()?,
        notices: client.list_notices()?,
        work_details: client.list_work_details()?,
        rent_payments: client.list_rent_payments()?,
        expenses: client.list_expenses()?,
    })
}
