use dioxus::prelude::*;

use crate::{
    domain::{AppCategory, AppState, SocialPlatform},
    ui::theme,
    util::format::{format_currency, format_unit_price, to_fixed},
};

/// Read-only view of the reference tables the engine is running with.
#[component]
pub fn MethodologyPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let (tables, source) =
        state.with(|st| (st.engine.tables().clone(), st.tables_source.to_string()));

    let category_rows = AppCategory::ALL
        .into_iter()
        .map(|category| {
            let row = tables.category(category);
            (
                category.label(),
                format_currency(row.value_per_user),
                format!(
                    "{}% - {}%",
                    to_fixed(row.conversion.min * 100.0, 1),
                    to_fixed(row.conversion.max * 100.0, 1)
                ),
                format!("{}%", to_fixed(row.conversion.midpoint() * 100.0, 1)),
            )
        })
        .collect::<Vec<_>>();

    let social_rows = SocialPlatform::ALL
        .into_iter()
        .map(|platform| {
            (
                platform.label(),
                platform.unit_noun(),
                format_unit_price(tables.social.unit_value(platform)),
            )
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "How the estimate is built" }
                p { class: theme::MUTED, "Reference tables: {source}" }
                ul { class: "factors",
                    li { "Revenue: MRR × 12 × {tables.arr_multiple}x ARR multiple." }
                    li {
                        "Traction: registrations × conversion × average price, valued at the same multiple. "
                        "Without a conversion rate the category midpoint is scaled by price relative to "
                        "${tables.reference_price} and kept inside the category range."
                    }
                    li {
                        "Social: each follower, subscriber or karma point at a fixed dollar value."
                    }
                    li {
                        "Combined: current revenue value plus any excess of the traction projection, "
                        "plus social value. The range is ±10% of that figure."
                    }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Category Benchmarks" }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Category" }
                            th { "Value / user" }
                            th { "Registration to paid" }
                            th { "Midpoint" }
                        }
                    }
                    tbody {
                        for (label, per_user, range, midpoint) in category_rows {
                            tr {
                                td { "{label}" }
                                td { "{per_user}" }
                                td { "{range}" }
                                td { "{midpoint}" }
                            }
                        }
                    }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Social Unit Values" }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Platform" }
                            th { "Counted as" }
                            th { "USD per unit" }
                        }
                    }
                    tbody {
                        for (label, noun, unit) in social_rows {
                            tr {
                                td { "{label}" }
                                td { "{noun}" }
                                td { "${unit}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
