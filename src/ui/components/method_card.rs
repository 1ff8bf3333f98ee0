use dioxus::prelude::*;

use crate::util::format::format_currency;

/// One valuation method: name, dollar value and how it was derived.
#[component]
pub fn MethodCard(title: &'static str, tone: &'static str, value: f64, detail: String) -> Element {
    rsx! {
        div { class: "method-card",
            div { class: "method-head",
                span { class: "method-title", "{title}" }
                span { class: "method-value {tone}", "{format_currency(value)}" }
            }
            p { class: "method-detail", "{detail}" }
        }
    }
}
