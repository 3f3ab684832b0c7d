use dioxus::prelude::*;

use crate::icons::{FaMoon, FaSun};
use crate::theme::{Theme, ThemeSignal};
use crate::Icon;

/// An entry in the dashboard navbar.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub path: String,
}

impl NavItem {
    pub fn new(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
        }
    }
}

/// Shared dashboard frame: navbar on top, page content, footer.
///
/// Platform packages supply navigation through `on_navigate` and pass their
/// router outlet as children.
#[component]
pub fn DashboardShell(
    nav_items: Vec<NavItem>,
    /// Path of the page currently shown.
    #[props(into)]
    active_path: String,
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let theme = try_use_context::<ThemeSignal>();
    let current = theme.map(|ThemeSignal(t)| t()).unwrap_or_default();
    let root_class = current.root_class();

    rsx! {
        div {
            class: "dashboard min-h-screen flex flex-col {root_class}",
            nav {
                class: "dashboard-navbar flex items-center gap-4 px-6 py-3 shadow-sm",
                for item in nav_items {
                    a {
                        key: "{item.path}",
                        class: if item.path == active_path { "nav-link font-semibold text-accent cursor-pointer" } else { "nav-link cursor-pointer" },
                        onclick: {
                            let path = item.path.clone();
                            move |_| on_navigate.call(path.clone())
                        },
                        "{item.label}"
                    }
                }
                if let Some(ThemeSignal(mut signal)) = theme {
                    button {
                        r#type: "button",
                        class: "ml-auto p-2 rounded hover:bg-hover",
                        title: "Toggle theme",
                        onclick: move |_| {
                            let next = signal().toggled();
                            signal.set(next);
                        },
                        if current == Theme::Dark {
                            Icon { icon: FaSun, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaMoon, width: 14, height: 14 }
                        }
                    }
                }
            }
            main { class: "flex-grow px-6", {children} }
            footer {
                class: "dashboard-footer px-6 py-4 text-sm text-neutral-500",
                "© Dashboard"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Element {
        rsx! {
            DashboardShell {
                nav_items: vec![NavItem::new("Chat", "/dashboards/chat"), NavItem::new("Pricing", "/pages/pricing-page")],
                active_path: "/pages/pricing-page",
                on_navigate: move |_| {},
                p { "page body" }
            }
        }
    }

    #[test]
    fn marks_active_item_and_renders_children() {
        let mut dom = VirtualDom::new(shell);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("nav-link font-semibold").count(), 1);
        assert!(html.contains("page body"));
        assert!(html.contains("dashboard-footer"));
        // No theme provider, no toggle.
        assert!(!html.contains("Toggle theme"));
    }
}
