use dioxus::prelude::*;

use super::BadgeColor;

#[component]
pub fn Progress(value: u8, #[props(default)] color: BadgeColor) -> Element {
    let value = value.min(100);
    let bg = color.background();

    rsx! {
        div {
            class: "progress w-full h-1 rounded bg-neutral-200 overflow-hidden",
            role: "progressbar",
            aria_valuenow: "{value}",
            aria_valuemin: "0",
            aria_valuemax: "100",
            div {
                class: "h-full bg-gradient-to-r {bg}",
                style: "width: {value}%",
            }
        }
    }
}
