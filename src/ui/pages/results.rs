use dioxus::prelude::*;
use url::Url;

use crate::{
    app::Route,
    domain::{AppState, ValuationReport},
    ui::{
        components::{ConfidenceBadge, InsightList, KpiCard, MethodCard, ScoreBar, SharePanel},
        explain::{projection_detail, revenue_detail, social_detail},
        theme,
    },
    util::{format::format_currency, version::APP_HOMEPAGE},
};

#[component]
pub fn ResultsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let mut show_share = use_signal(|| false);

    let Some(report) = state.with(|st| st.report.clone()) else {
        return rsx! {
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "No valuation yet" }
                p { class: theme::MUTED, "Fill in the calculator to see an estimate." }
                button {
                    class: theme::BTN_PRIMARY,
                    onclick: move |_| { nav.push(Route::Calculator {}); },
                    "Open Calculator"
                }
            }
        };
    };

    let on_new = move |_| {
        state.with_mut(|st| st.reset());
        nav.push(Route::Calculator {});
    };
    let share_page = APP_HOMEPAGE.and_then(|raw| Url::parse(raw).ok());
    let high = format_currency(report.result.high);

    rsx! {
        div { class: "stack",
            RangeHeadline { report: report.clone() }
            MethodBreakdown { report: report.clone() }
            ConfidencePanel { report: report.clone() }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Key Insights & Recommendations" }
                InsightList { insights: report.insights.clone() }
            }

            if !report.diagnostics.is_empty() {
                section { class: theme::PANEL,
                    h2 { class: theme::PANEL_TITLE, "Input Notes" }
                    ul { class: "notes",
                        for diagnostic in report.diagnostics.iter() {
                            li {
                                class: if diagnostic.is_warning() {
                                    "note tone-amber"
                                } else {
                                    "note tone-sky"
                                },
                                "{diagnostic}"
                            }
                        }
                    }
                }
            }

            div { class: "actions",
                button { class: theme::BTN_SECONDARY, onclick: on_new, "New Calculation" }
                button {
                    class: theme::BTN_PRIMARY,
                    onclick: move |_| show_share.set(true),
                    "Share Results"
                }
            }

            if show_share() {
                SharePanel {
                    valuation: high,
                    page: share_page,
                    on_close: move |_| show_share.set(false),
                }
            }
        }
    }
}

#[component]
fn RangeHeadline(report: ValuationReport) -> Element {
    let result = &report.result;
    rsx! {
        section { class: "{theme::PANEL} headline",
            h2 { class: theme::PANEL_TITLE, "Estimated Valuation Range" }
            div { class: "kpi-row",
                KpiCard {
                    title: "Low".to_string(),
                    value: format_currency(result.low),
                    description: None,
                    emphasis: false,
                }
                KpiCard {
                    title: "Point Estimate".to_string(),
                    value: format_currency(result.point_estimate),
                    description: Some(format!("{} market", report.input.category.label())),
                    emphasis: true,
                }
                KpiCard {
                    title: "High".to_string(),
                    value: format_currency(result.high),
                    description: None,
                    emphasis: false,
                }
            }
            ConfidenceBadge { level: report.confidence.level }
        }
    }
}

#[component]
fn MethodBreakdown(report: ValuationReport) -> Element {
    let result = &report.result;
    rsx! {
        section { class: theme::PANEL,
            h2 { class: theme::PANEL_TITLE, "Valuation Methods" }
            div { class: "method-list",
                MethodCard {
                    title: "Revenue-Based",
                    tone: "tone-sky",
                    value: result.revenue.value,
                    detail: revenue_detail(&result.revenue),
                }
                MethodCard {
                    title: "User Based Projected ARR",
                    tone: "tone-emerald",
                    value: result.projected_arr.value,
                    detail: projection_detail(&result.traction, &result.projected_arr),
                }
                MethodCard {
                    title: "Social Media",
                    tone: "tone-pink",
                    value: result.social.value,
                    detail: social_detail(&result.social),
                }
            }
        }
    }
}

#[component]
fn ConfidencePanel(report: ValuationReport) -> Element {
    let confidence = &report.confidence;
    rsx! {
        section { class: theme::PANEL,
            h2 { class: theme::PANEL_TITLE, "Confidence Analysis" }
            div { class: "score-row",
                span { "Confidence Score" }
                strong { "{confidence.score}/100" }
            }
            ScoreBar { score: confidence.score, level: confidence.level }
            p { class: theme::MUTED, "{confidence.description}" }
            h3 { class: "factors-title", "Key Factors:" }
            ul { class: "factors",
                for factor in confidence.factors.iter() {
                    li { "{factor}" }
                }
            }
        }
    }
}
