use dioxus::prelude::*;

use crate::{
    domain::{AppState, TablesSource},
    ui::{
        components::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, MethodologyPage, ResultsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/results")]
    Results {},
    #[route("/methodology")]
    Methodology {},
}

/// Root component. `main` hands over the prepared [`AppState`] through the
/// launch context; without one the built-in tables are used.
#[component]
pub fn App() -> Element {
    let state = use_signal(|| try_consume_context::<AppState>().unwrap_or_default());
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_hook(move || {
        if let Some(text) = state.with(|st| tables_notice(&st.tables_source)) {
            push_toast(toasts, ToastKind::Success, text);
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Startup notice for tables loaded from disk; the built-ins need none.
fn tables_notice(source: &TablesSource) -> Option<String> {
    match source {
        TablesSource::File(path) => {
            Some(format!("Loaded reference tables from {}", path.display()))
        }
        TablesSource::BuiltIn => None,
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Results() -> Element {
    rsx! { Shell { ResultsPage {} } }
}

#[component]
pub fn Methodology() -> Element {
    rsx! { Shell { MethodologyPage {} } }
}
