//! Full-screen modal container.
//!
//! The modal owns no open/closed state: callers mount it while it should be
//! visible and unmount it when `on_dismiss` asks them to. Everything the
//! component decides (widths, which chrome is shown, what each click does) is
//! resolved up front into a [`ModalLayout`] so it can be checked without a
//! renderer.

use dioxus::prelude::*;

use crate::components::Divider;
use crate::icons::FaXmark;
use crate::Icon;

/// Panel width applied when the caller does not pass one.
pub const DEFAULT_WIDTH: &str = "w-1/2";

/// Title text size applied when the caller does not pass one.
pub const DEFAULT_TITLE_SIZE: &str = "text-2xl";

const BACKDROP_CLASS: &str =
    "modal-backdrop fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50";
const PANEL_BASE_CLASS: &str =
    "modal-panel bg-background dark:bg-neutral-800 rounded shadow-lg relative text-sm p-8";

/// The element a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    Panel,
    DismissIcon,
}

/// What a single handler does with a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Invoke the dismissal callback.
    Dismiss,
    /// Keep the event from reaching the backdrop.
    StopPropagation,
    Ignore,
}

/// Resolved presentation of one modal render.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalLayout {
    pub width: String,
    pub title_size: String,
    pub extra_class: Option<String>,
    show_title: bool,
    show_dismiss: bool,
    show_divider: bool,
    dismissable: bool,
    hide_title_divider: bool,
}

impl Default for ModalLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            title_size: DEFAULT_TITLE_SIZE.to_string(),
            extra_class: None,
            show_title: false,
            show_dismiss: false,
            show_divider: false,
            dismissable: false,
            hide_title_divider: false,
        }
    }
}

impl ModalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a title was supplied.
    pub fn titled(mut self, titled: bool) -> Self {
        self.show_title = titled;
        self.refresh();
        self
    }

    /// Whether a dismissal callback was supplied.
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self.refresh();
        self
    }

    pub fn hide_title_divider(mut self, hide: bool) -> Self {
        self.hide_title_divider = hide;
        self.refresh();
        self
    }

    /// Panel width token. `None` keeps [`DEFAULT_WIDTH`].
    pub fn width(mut self, width: Option<&str>) -> Self {
        self.width = width.unwrap_or(DEFAULT_WIDTH).to_string();
        self
    }

    /// Title size token. `None` keeps [`DEFAULT_TITLE_SIZE`].
    pub fn title_size(mut self, size: Option<&str>) -> Self {
        self.title_size = size.unwrap_or(DEFAULT_TITLE_SIZE).to_string();
        self
    }

    pub fn class(mut self, class: Option<&str>) -> Self {
        self.extra_class = class.map(str::to_string);
        self
    }

    fn refresh(&mut self) {
        self.show_dismiss = self.show_title && self.dismissable;
        self.show_divider = self.show_title && !self.hide_title_divider;
    }

    pub fn shows_title(&self) -> bool {
        self.show_title
    }

    /// Close icon next to the title.
    pub fn shows_dismiss(&self) -> bool {
        self.show_dismiss
    }

    pub fn shows_divider(&self) -> bool {
        self.show_divider
    }

    pub fn panel_class(&self) -> String {
        match &self.extra_class {
            Some(extra) => format!("{PANEL_BASE_CLASS} {} {extra}", self.width),
            None => format!("{PANEL_BASE_CLASS} {}", self.width),
        }
    }

    pub fn title_class(&self) -> String {
        format!("modal-title my-auto font-bold {}", self.title_size)
    }

    /// The handler attached to `origin`.
    pub fn click_action(&self, origin: ClickOrigin) -> ClickAction {
        match origin {
            ClickOrigin::Panel => ClickAction::StopPropagation,
            ClickOrigin::Backdrop if self.dismissable => ClickAction::Dismiss,
            ClickOrigin::DismissIcon if self.show_dismiss => ClickAction::Dismiss,
            ClickOrigin::Backdrop | ClickOrigin::DismissIcon => ClickAction::Ignore,
        }
    }
}

fn apply(action: ClickAction, evt: &Event<MouseData>, on_dismiss: Option<EventHandler<()>>) {
    match action {
        ClickAction::Dismiss => {
            if let Some(handler) = on_dismiss {
                tracing::debug!("Modal dismissed");
                handler.call(());
            }
        }
        ClickAction::StopPropagation => evt.stop_propagation(),
        ClickAction::Ignore => {}
    }
}

/// A dimmed full-screen backdrop with a centered panel.
///
/// Clicking the backdrop or the close icon calls `on_dismiss`. Clicks inside
/// the panel never reach the backdrop.
#[component]
pub fn Modal(
    /// Heading shown above the body. Without it no close icon or divider is drawn.
    title: Option<Element>,
    /// Called when the user asks to close the modal.
    on_dismiss: Option<EventHandler<()>>,
    /// Width token for the panel, applied verbatim.
    #[props(into)]
    width: Option<String>,
    #[props(into)]
    title_size: Option<String>,
    #[props(default)]
    hide_title_divider: bool,
    /// Extra classes appended to the panel.
    #[props(into)]
    class: Option<String>,
    children: Element,
) -> Element {
    let layout = ModalLayout::new()
        .titled(title.is_some())
        .dismissable(on_dismiss.is_some())
        .hide_title_divider(hide_title_divider)
        .width(width.as_deref())
        .title_size(title_size.as_deref())
        .class(class.as_deref());

    let backdrop_action = layout.click_action(ClickOrigin::Backdrop);
    let panel_action = layout.click_action(ClickOrigin::Panel);
    let icon_action = layout.click_action(ClickOrigin::DismissIcon);

    rsx! {
        div {
            div {
                class: BACKDROP_CLASS,
                onclick: move |evt: Event<MouseData>| apply(backdrop_action, &evt, on_dismiss),
                div {
                    class: layout.panel_class(),
                    role: "dialog",
                    aria_modal: "true",
                    onclick: move |evt: Event<MouseData>| apply(panel_action, &evt, on_dismiss),
                    if let Some(title) = title {
                        div {
                            class: "modal-header flex mb-4",
                            h2 { class: layout.title_class(), {title} }
                            if layout.shows_dismiss() {
                                button {
                                    r#type: "button",
                                    class: "modal-dismiss my-auto ml-auto p-2 hover:bg-hover dark:hover:bg-neutral-800 rounded cursor-pointer",
                                    aria_label: "Close",
                                    onclick: move |evt: Event<MouseData>| apply(icon_action, &evt, on_dismiss),
                                    Icon { icon: FaXmark, width: 20, height: 20 }
                                }
                            }
                        }
                        if layout.shows_divider() {
                            Divider { class: "modal-divider" }
                        }
                    }
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;

    use dioxus_core::{ElementId, Mutation, Mutations};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };

    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    thread_local! {
        static DISMISSED: Cell<usize> = const { Cell::new(0) };
    }

    fn count_dismissal() {
        DISMISSED.with(|c| c.set(c.get() + 1));
    }

    /// Builds `app` and returns the ids of its click listeners in document order.
    fn mount(app: fn() -> Element) -> (VirtualDom, Vec<ElementId>) {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(app);
        let mut mutations = Mutations::default();
        dom.rebuild(&mut mutations);
        let listeners = mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();
        (dom, listeners)
    }

    /// Sends a bubbling click to `target` and returns how many times `on_dismiss` ran.
    fn click(dom: &VirtualDom, target: ElementId) -> usize {
        DISMISSED.with(|c| c.set(0));
        let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
        let event = dioxus_core::Event::new(Rc::new(data) as Rc<dyn Any>, true);
        dom.runtime().handle_event("click", event, target);
        DISMISSED.with(Cell::get)
    }

    #[test]
    fn untitled_layout_hides_title_chrome() {
        for hide in [false, true] {
            let layout = ModalLayout::new()
                .dismissable(true)
                .hide_title_divider(hide);
            assert!(!layout.shows_title());
            assert!(!layout.shows_dismiss());
            assert!(!layout.shows_divider());
        }
    }

    #[test]
    fn titled_layout_without_dismissal() {
        let layout = ModalLayout::new().titled(true);
        assert!(layout.shows_title());
        assert!(!layout.shows_dismiss());
        assert!(layout.shows_divider());
        assert_eq!(layout.click_action(ClickOrigin::Backdrop), ClickAction::Ignore);
        assert_eq!(layout.click_action(ClickOrigin::DismissIcon), ClickAction::Ignore);
    }

    #[test]
    fn titled_dismissable_layout_shows_everything() {
        let layout = ModalLayout::new().titled(true).dismissable(true);
        assert!(layout.shows_title());
        assert!(layout.shows_dismiss());
        assert!(layout.shows_divider());

        let hidden = layout.hide_title_divider(true);
        assert!(hidden.shows_title());
        assert!(!hidden.shows_divider());
    }

    #[test]
    fn panel_always_stops_propagation() {
        for titled in [false, true] {
            for dismissable in [false, true] {
                let layout = ModalLayout::new().titled(titled).dismissable(dismissable);
                assert_eq!(layout.click_action(ClickOrigin::Panel), ClickAction::StopPropagation);
            }
        }
    }

    #[test]
    fn clicks_dismiss_from_backdrop_and_icon_only() {
        let (dom, listeners) = mount(|| {
            rsx! {
                Modal {
                    title: rsx! { "Confirm" },
                    on_dismiss: move |_| count_dismissal(),
                    p { "Body text" }
                }
            }
        });
        let [backdrop, panel, icon] = listeners[..] else {
            panic!("expected backdrop, panel and icon listeners, got {listeners:?}");
        };

        assert_eq!(click(&dom, backdrop), 1);
        // Panel clicks stop before reaching the backdrop.
        assert_eq!(click(&dom, panel), 0);
        // The icon sits inside the panel, so the backdrop never sees its click.
        assert_eq!(click(&dom, icon), 1);
    }

    #[test]
    fn untitled_backdrop_click_dismisses() {
        let (dom, listeners) = mount(|| {
            rsx! {
                Modal {
                    on_dismiss: move |_| count_dismissal(),
                    p { "Body text" }
                }
            }
        });
        let [backdrop, panel] = listeners[..] else {
            panic!("expected backdrop and panel listeners, got {listeners:?}");
        };

        assert_eq!(click(&dom, backdrop), 1);
        assert_eq!(click(&dom, panel), 0);
    }

    #[test]
    fn clicks_without_on_dismiss_do_nothing() {
        let (dom, listeners) = mount(|| {
            rsx! {
                Modal {
                    title: rsx! { "Settings" },
                    p { "Body text" }
                }
            }
        });
        assert_eq!(listeners.len(), 2);
        for target in listeners {
            assert_eq!(click(&dom, target), 0);
        }
    }

    #[test]
    fn width_defaults_and_overrides() {
        let layout = ModalLayout::new().width(None);
        assert_eq!(layout.width, DEFAULT_WIDTH);
        assert!(layout.panel_class().contains(" w-1/2"));

        let layout = ModalLayout::new().width(Some("w-1/3"));
        assert_eq!(layout.width, "w-1/3");
        assert!(layout.panel_class().contains(" w-1/3"));
        assert!(!layout.panel_class().contains("w-1/2"));
    }

    #[test]
    fn title_size_and_extra_class() {
        let layout = ModalLayout::new()
            .title_size(Some("text-lg"))
            .class(Some("max-w-5xl"));
        assert_eq!(layout.title_class(), "modal-title my-auto font-bold text-lg");
        assert!(layout.panel_class().ends_with("w-1/2 max-w-5xl"));
        assert_eq!(
            ModalLayout::new().title_class(),
            "modal-title my-auto font-bold text-2xl"
        );
    }

    #[test]
    fn renders_untitled_modal_without_chrome() {
        let html = render(|| {
            rsx! {
                Modal {
                    on_dismiss: move |_| {},
                    p { "Body text" }
                }
            }
        });
        assert!(html.contains("Body text"));
        assert!(html.contains("modal-backdrop"));
        assert!(!html.contains("modal-title"));
        assert!(!html.contains("modal-dismiss"));
        assert!(!html.contains("modal-divider"));
    }

    #[test]
    fn renders_title_without_dismiss_icon() {
        let html = render(|| {
            rsx! {
                Modal {
                    title: rsx! { "Settings" },
                    p { "Body text" }
                }
            }
        });
        assert!(html.contains("modal-title"));
        assert!(html.contains("Settings"));
        assert!(!html.contains("modal-dismiss"));
        assert!(html.contains("modal-divider"));
    }

    #[test]
    fn renders_title_icon_and_divider() {
        let html = render(|| {
            rsx! {
                Modal {
                    title: rsx! { "Confirm" },
                    on_dismiss: move |_| {},
                    p { "Body text" }
                }
            }
        });
        assert!(html.contains("modal-title"));
        assert!(html.contains("modal-dismiss"));
        assert!(html.contains("modal-divider"));
        let title_at = html.find("Confirm").unwrap();
        let divider_at = html.find("modal-divider").unwrap();
        let body_at = html.find("Body text").unwrap();
        assert!(title_at < divider_at && divider_at < body_at);
    }

    #[test]
    fn renders_suppressed_divider() {
        let html = render(|| {
            rsx! {
                Modal {
                    title: rsx! { "Confirm" },
                    hide_title_divider: true,
                    "Body text"
                }
            }
        });
        assert!(html.contains("modal-title"));
        assert!(!html.contains("modal-divider"));
    }

    #[test]
    fn renders_width_token_verbatim() {
        let html = render(|| rsx! { Modal { width: "w-1/3", "Body" } });
        assert!(html.contains("w-1/3"));
        assert!(!html.contains("w-1/2"));

        let html = render(|| rsx! { Modal { "Body" } });
        assert!(html.contains("w-1/2"));
    }
}
