use dioxus::prelude::*;

use ui::{use_settings, InitializingLoader};

use crate::Route;

/// Unknown paths land on the chat dashboard.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let product = use_settings().product.name;
    tracing::debug!(path = %segments.join("/"), "Unknown route, redirecting to chat");

    use_effect(move || {
        nav.replace(Route::Chat {});
    });

    rsx! {
        div {
            class: "flex h-screen items-center justify-center",
            InitializingLoader { product_name: product }
        }
    }
}
