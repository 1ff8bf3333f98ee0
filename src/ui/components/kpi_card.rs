use dioxus::prelude::*;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    emphasis: bool,
) -> Element {
    let class = if emphasis { "kpi kpi-emphasis" } else { "kpi" };
    rsx! {
        div { class,
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-description", "{desc}" }
            }
        }
    }
}
