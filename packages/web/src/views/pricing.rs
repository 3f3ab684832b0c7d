use dioxus::prelude::*;

use ui::views::PricingPageView;

use crate::Route;

#[component]
pub fn Pricing() -> Element {
    rsx! {
        div {
            class: "pricing-layout",
            nav {
                class: "px-6 py-3",
                Link { class: "nav-link text-white", to: Route::Chat {}, "Back to dashboard" }
            }
            PricingPageView {}
        }
    }
}
