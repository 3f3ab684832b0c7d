use dioxus::prelude::*;

use crate::theme::use_theme;

/// Pulsing logo shown while the backend finishes starting up.
#[component]
pub fn InitializingLoader(#[props(into)] product_name: String) -> Element {
    let logo = use_theme().logo_src();

    rsx! {
        div {
            class: "mx-auto animate-pulse",
            div {
                class: "h-24 w-24 mx-auto mb-3",
                img { src: logo, alt: "Logo", width: "1419", height: "1520" }
            }
            b { "Initializing {product_name}" }
        }
    }
}
