use dioxus::prelude::*;

/// Horizontal rule between sections.
#[component]
pub fn Divider(#[props(into, default)] class: String) -> Element {
    rsx! {
        div {
            role: "separator",
            class: "h-px w-full my-4 bg-border dark:bg-neutral-700 {class}",
        }
    }
}
