use dioxus::prelude::*;
use tracing::debug;

use crate::{
    app::Route,
    domain::{AppCategory, AppState, FormField, SocialPlatform},
    ui::{
        components::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

/// Order of the social inputs on the form.
const SOCIAL_FIELDS: [SocialPlatform; 6] = [
    SocialPlatform::Linkedin,
    SocialPlatform::X,
    SocialPlatform::Reddit,
    SocialPlatform::Youtube,
    SocialPlatform::Instagram,
    SocialPlatform::Tiktok,
];

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let (pre_revenue, not_profitable) =
        state.with(|st| (st.draft.pre_revenue(), st.draft.not_profitable()));

    let on_calculate = move |_| {
        let outcome = state.with_mut(|st| match st.submit() {
            Ok(report) => Ok(report
                .diagnostics
                .iter()
                .filter(|d| d.is_warning())
                .map(ToString::to_string)
                .collect::<Vec<_>>()),
            Err(errors) => Err(errors.len()),
        });

        match outcome {
            Ok(warnings) => {
                for warning in warnings {
                    push_toast(toasts, ToastKind::Warning, warning);
                }
                nav.push(Route::Results {});
            }
            Err(count) => {
                debug!(count, "calculator form rejected");
                let noun = if count == 1 { "field" } else { "fields" };
                push_toast(
                    toasts,
                    ToastKind::Error,
                    format!("Please fix {count} {noun} before calculating."),
                );
            }
        }
    };

    rsx! {
        div { class: "stack",
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Financial Performance" }
                div { class: theme::GRID_TWO,
                    for field in FormField::FINANCIAL {
                        FieldInput { field }
                    }
                }
                div { class: "toggles",
                    label { class: "toggle",
                        input {
                            r#type: "checkbox",
                            checked: pre_revenue,
                            onchange: move |evt| {
                                state.with_mut(|st| st.draft.set_pre_revenue(evt.checked()))
                            },
                        }
                        "I'm Pre-Revenue"
                    }
                    label { class: "toggle",
                        input {
                            r#type: "checkbox",
                            checked: not_profitable,
                            disabled: pre_revenue,
                            onchange: move |evt| {
                                state.with_mut(|st| st.draft.set_not_profitable(evt.checked()))
                            },
                        }
                        "I'm Not Profitable"
                    }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "User Traction" }
                div { class: theme::GRID_TWO,
                    for field in FormField::TRACTION {
                        FieldInput { field }
                    }
                    CategorySelect {}
                    FieldInput { field: FormField::AvgServicePrice }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_TITLE, "Social Media Presence" }
                div { class: theme::GRID_TWO,
                    for platform in SOCIAL_FIELDS {
                        FieldInput { field: FormField::Social(platform) }
                    }
                }
            }

            button {
                class: "{theme::BTN_PRIMARY} btn-wide",
                onclick: on_calculate,
                "Calculate Valuation"
            }
        }
    }
}

#[component]
fn FieldInput(field: FormField) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (value, locked, error) = state.with(|st| {
        (
            st.draft.value(field).to_string(),
            st.draft.is_locked(field),
            st.errors.get(&field).map(ToString::to_string),
        )
    });

    rsx! {
        div { class: "field",
            label { class: theme::LABEL, "{field.label()}" }
            div { class: "field-wrap",
                if field.is_currency() {
                    span { class: "field-prefix", "$" }
                }
                input {
                    class: theme::input_class(locked, error.is_some()),
                    r#type: "text",
                    placeholder: field.placeholder(),
                    value: "{value}",
                    disabled: locked,
                    oninput: move |evt| {
                        state.with_mut(|st| {
                            st.draft.set(field, evt.value());
                            st.errors.remove(&field);
                        })
                    },
                }
                if field == FormField::ConversionRate {
                    span { class: "field-suffix", "%" }
                }
            }
            if let Some(error) = error.as_deref() {
                p { class: theme::FIELD_ERROR, "{error}" }
            }
        }
    }
}

#[component]
fn CategorySelect() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let field = FormField::AppCategory;
    let (selected, error) = state.with(|st| {
        (
            st.draft.app_category.clone(),
            st.errors.get(&field).map(ToString::to_string),
        )
    });

    rsx! {
        div { class: "field",
            label { class: theme::LABEL, "{field.label()}" }
            select {
                class: theme::input_class(false, error.is_some()),
                value: "{selected}",
                onchange: move |evt| {
                    state.with_mut(|st| {
                        st.draft.set(field, evt.value());
                        st.errors.remove(&field);
                    })
                },
                option { value: "", selected: selected.is_empty(), "Select a category" }
                for category in AppCategory::ALL {
                    option {
                        value: category.key(),
                        selected: selected == category.key(),
                        "{category.label()} - {category.description()}"
                    }
                }
            }
            if let Some(error) = error.as_deref() {
                p { class: theme::FIELD_ERROR, "{error}" }
            }
        }
    }
}
