use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let has_report = state.with(|s| s.report.is_some());
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header-inner",
                    div {
                        h1 { class: "app-title", "{APP_NAME}" }
                        p { class: "app-tagline",
                            "Estimate your SaaS business value from revenue, user traction and social reach"
                        }
                    }
                    nav { class: "app-nav",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "Calculator",
                        }
                        if has_report {
                            NavButton {
                                active: matches!(current_route, Route::Results {}),
                                onclick: move |_| { nav.push(Route::Results {}); },
                                label: "Results",
                            }
                        }
                        NavButton {
                            active: matches!(current_route, Route::Methodology {}),
                            onclick: move |_| { nav.push(Route::Methodology {}); },
                            label: "Methodology",
                        }
                    }
                }
            }
            main { class: "{theme::PAGE}",
                {children}
            }
            footer { class: "app-footer",
                "{APP_NAME} {version_label()} · Estimates are indicative, not financial advice."
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_link(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
