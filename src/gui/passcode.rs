//! Passcode dialog
//!
//! Modal prompt collecting the shared passcode before a protected action
//! runs. Presentation glue over [`crate::protection::ProtectionGate`]: the
//! gate owns the unlock state and the pending action, this dialog only owns
//! the transient input and the inline error message.

use eframe::egui::{self, Align2, Color32, Id, Key, RichText, Stroke, Vec2};

use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_HIGHLIGHT, TEXT_DIM};
use crate::protection::{ProtectionGate, Verification};

/// Transient state of the passcode dialog
#[derive(Debug, Default)]
pub struct PasscodeDialogState {
    /// Current text field content
    input: String,
    /// Inline error from the last failed attempt
    error: Option<String>,
    /// Focus the text field on the next frame
    request_focus: bool,
}

impl PasscodeDialogState {
    /// Reset transient state when a new challenge opens
    pub fn open(&mut self) {
        self.input.clear();
        self.error = None;
        self.request_focus = true;
    }

    fn close(&mut self) {
        self.input.clear();
        self.error = None;
    }
}

/// Render the passcode dialog while the gate has an open challenge.
///
/// Returns the released pending action when the operator enters the correct
/// passcode; the caller applies it immediately.
pub fn render_passcode_dialog<A>(
    ctx: &egui::Context,
    state: &mut PasscodeDialogState,
    gate: &mut ProtectionGate<A>,
) -> Option<A> {
    if !gate.challenge_open() {
        return None;
    }

    let mut released: Option<A> = None;
    let mut submitted = false;
    let mut cancelled = false;

    let fade_alpha = ctx.animate_bool_with_time(Id::new("passcode_dialog_fade"), true, 0.15);

    let frame = egui::Frame::window(&ctx.style())
        .fill(Color32::from_rgba_unmultiplied(28, 32, 38, (fade_alpha * 250.0) as u8))
        .stroke(Stroke::new(
            2.0,
            Color32::from_rgba_unmultiplied(240, 180, 60, (fade_alpha * 200.0) as u8),
        ));

    egui::Window::new("🔒 Passcode Required")
        .collapsible(false)
        .resizable(false)
        .fixed_size(Vec2::new(320.0, 160.0))
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(frame)
        .show(ctx, |ui| {
            ui.set_opacity(fade_alpha);
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 10.0);

            ui.label(
                RichText::new("This action is protected. Enter the passcode to continue.")
                    .color(TEXT_DIM),
            );

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.input)
                    .password(true)
                    .hint_text("Passcode")
                    .desired_width(f32::INFINITY),
            );
            if state.request_focus {
                response.request_focus();
                state.request_focus = false;
            }
            // Enter in the text field submits
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                submitted = true;
            }

            if let Some(error) = &state.error {
                ui.label(RichText::new(error).color(ACCENT_RED).small());
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(
                            egui::Button::new(RichText::new("Unlock").color(Color32::WHITE))
                                .fill(ACCENT_GREEN)
                                .min_size(Vec2::new(90.0, 30.0)),
                        )
                        .clicked()
                    {
                        submitted = true;
                    }

                    ui.add_space(8.0);

                    if ui
                        .add(
                            egui::Button::new("Cancel")
                                .fill(BG_HIGHLIGHT)
                                .min_size(Vec2::new(90.0, 30.0)),
                        )
                        .clicked()
                    {
                        cancelled = true;
                    }
                });
            });
        });

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        cancelled = true;
    }

    if cancelled {
        gate.dismiss();
        state.close();
        return None;
    }

    if submitted {
        match gate.verify(&state.input) {
            Verification::Unlocked(pending) => {
                state.close();
                released = pending;
            }
            Verification::Mismatch => {
                state.error = Some("Incorrect passcode. Try again.".to_string());
                state.input.clear();
                state.request_focus = true;
            }
        }
    }

    released
}
