use dioxus::prelude::*;

use crate::components::{Badge, BadgeColor, Progress};
use crate::icons::FaPaperclip;
use crate::Icon;

/// Task card on a kanban board.
#[component]
pub fn KanbanCard(
    #[props(into)] image: Option<String>,
    badge_color: BadgeColor,
    #[props(into)] badge_label: String,
    /// Percent done; `0` hides the bar.
    #[props(default)]
    progress: u8,
    #[props(into)] attached_files: Option<String>,
    /// Avatar URLs of the assigned members.
    #[props(default)]
    members: Vec<String>,
    children: Element,
) -> Element {
    rsx! {
        if let Some(image) = image {
            div {
                class: "w-full rounded-lg mb-2 overflow-hidden",
                img { class: "block w-full h-full", src: "{image}", alt: "image" }
            }
        }
        Badge { color: badge_color, label: badge_label }
        div {
            class: "mt-2 mb-4",
            p { class: "text-sm text-neutral-600", {children} }
            if progress > 0 {
                div { class: "mt-1",
                    Progress { value: progress, color: badge_color }
                }
            }
        }
        div {
            class: "flex justify-between items-center",
            div {
                class: "flex items-center text-neutral-600",
                if let Some(files) = attached_files {
                    span { class: "attached-files",
                        Icon { icon: FaPaperclip, width: 12, height: 12 }
                    }
                    span { class: "text-xs", "\u{a0}{files}" }
                }
            }
            div {
                class: "flex",
                for (idx, member) in members.iter().enumerate() {
                    img {
                        key: "image-{idx}",
                        class: "member-avatar relative -ml-2 w-6 h-6 rounded-full border-2 border-white cursor-pointer hover:z-10 focus:z-10",
                        src: "{member}",
                        alt: "image-{idx}",
                    }
                }
            }
        }
    }
}
