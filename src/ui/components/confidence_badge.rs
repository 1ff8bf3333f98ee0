use dioxus::prelude::*;

use crate::domain::ConfidenceLevel;
use crate::ui::theme;

#[component]
pub fn ConfidenceBadge(level: ConfidenceLevel) -> Element {
    let icon = match level {
        ConfidenceLevel::VeryHigh | ConfidenceLevel::High => "✓",
        ConfidenceLevel::MediumHigh | ConfidenceLevel::Medium => "i",
        _ => "!",
    };

    rsx! {
        span { class: "badge {theme::level_tone(level)}",
            span { class: "badge-icon", "{icon}" }
            "Confidence: {level}"
        }
    }
}

/// Horizontal bar filled to `score` out of 100.
#[component]
pub fn ScoreBar(score: u32, level: ConfidenceLevel) -> Element {
    let width = score.min(100);
    rsx! {
        div { class: "score-track",
            div {
                class: "score-fill {theme::level_tone(level)}",
                style: "width: {width}%",
            }
        }
    }
}
