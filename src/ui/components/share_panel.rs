use dioxus::prelude::*;
use url::Url;

use crate::ui::theme;
use crate::util::share::share_links;

/// Share-intent links for a valuation figure such as `$792,000`.
#[component]
pub fn SharePanel(valuation: String, page: Option<Url>, on_close: EventHandler<()>) -> Element {
    let links = share_links(page.as_ref(), &valuation);

    rsx! {
        div { class: "overlay",
            div { class: "{theme::PANEL} share-panel",
                button {
                    class: "share-close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h2 { class: "{theme::PANEL_TITLE}", "Share Results" }
                div { class: "share-links",
                    for (target, url) in links {
                        a {
                            class: "{theme::BTN_SECONDARY}",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Share on {target.name()}"
                        }
                    }
                }
                if page.is_none() {
                    p { class: "{theme::MUTED}",
                        "LinkedIn and Reddit need a public page to link to; set SAAS_VALUATOR_HOMEPAGE when building."
                    }
                }
            }
        }
    }
}
