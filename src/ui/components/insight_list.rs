use dioxus::prelude::*;

use crate::domain::insights::split_heading;

/// Insights in order, each `**Heading:**` marker rendered bold.
#[component]
pub fn InsightList(insights: Vec<String>) -> Element {
    rsx! {
        ul { class: "insight-list",
            for insight in insights {
                InsightItem { text: insight }
            }
        }
    }
}

#[component]
fn InsightItem(text: String) -> Element {
    let (heading, body) = split_heading(&text);
    rsx! {
        li { class: "insight",
            if let Some(heading) = heading {
                strong { class: "insight-heading", "{heading}" }
                " "
            }
            "{body}"
        }
    }
}
