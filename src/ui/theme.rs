//! Class names shared across pages. The rules live in `assets/main.css`.

use crate::domain::ConfidenceLevel;
use crate::ui::components::toast::ToastKind;

// ============================================
// LAYOUT
// ============================================

pub const PAGE: &str = "page";
pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
pub const GRID_TWO: &str = "grid-two";
pub const MUTED: &str = "muted";

// ============================================
// BUTTONS
// ============================================

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_SECONDARY: &str = "btn btn-secondary";

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

// ============================================
// FORM
// ============================================

pub const LABEL: &str = "field-label";
pub const FIELD_ERROR: &str = "field-error";

pub fn input_class(locked: bool, invalid: bool) -> &'static str {
    match (locked, invalid) {
        (true, _) => "field-input field-input-locked",
        (false, true) => "field-input field-input-invalid",
        (false, false) => "field-input",
    }
}

// ============================================
// TONES
// ============================================

/// Colour family for a confidence level, lowest levels warmest.
pub fn level_tone(level: ConfidenceLevel) -> &'static str {
    match level {
        ConfidenceLevel::VeryHigh | ConfidenceLevel::High => "tone-green",
        ConfidenceLevel::MediumHigh => "tone-emerald",
        ConfidenceLevel::Medium => "tone-amber",
        ConfidenceLevel::MediumLow => "tone-orange",
        ConfidenceLevel::Low => "tone-rose",
        ConfidenceLevel::VeryLow => "tone-slate",
    }
}

pub fn toast_tone(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "tone-sky",
        ToastKind::Success => "tone-emerald",
        ToastKind::Warning => "tone-amber",
        ToastKind::Error => "tone-rose",
    }
}
