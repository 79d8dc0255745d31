//! GUI theme: "Slate Ledger" - muted dark tones with ledger-book accents
//!
//! Color constants for the RentFlow dashboard.

use eframe::egui::Color32;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Background: deep slate
pub const BG_PRIMARY: Color32 = Color32::from_rgb(21, 24, 28);
/// Secondary background for panels and cards
pub const BG_SECONDARY: Color32 = Color32::from_rgb(28, 32, 38);
/// Accent highlight background
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(38, 44, 52);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Primary text: warm off-white
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(225, 228, 232);
/// Secondary text
pub const TEXT_DIM: Color32 = Color32::from_rgb(150, 156, 165);
/// Muted text
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 106, 115);

// ═══════════════════════════════════════════════════════════════════════════
// STATUS COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Open work items
pub const STATUS_OPEN: Color32 = Color32::from_rgb(240, 180, 60);
/// Work in progress
pub const STATUS_IN_PROGRESS: Color32 = Color32::from_rgb(90, 160, 240);
/// Completed work / sent notices
pub const STATUS_DONE: Color32 = Color32::from_rgb(95, 200, 125);
/// Draft notices
pub const STATUS_DRAFT: Color32 = Color32::from_rgb(150, 156, 165);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_GREEN: Color32 = Color32::from_rgb(95, 200, 125);
pub const ACCENT_RED: Color32 = Color32::from_rgb(235, 90, 90);
pub const ACCENT_AMBER: Color32 = Color32::from_rgb(240, 180, 60);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(90, 160, 240);
