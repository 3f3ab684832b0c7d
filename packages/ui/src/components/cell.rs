use dioxus::prelude::*;

/// Plain text cell used in dashboard tables.
#[component]
pub fn DefaultCell(children: Element) -> Element {
    rsx! {
        span { class: "text-sm font-normal text-neutral-600", {children} }
    }
}
