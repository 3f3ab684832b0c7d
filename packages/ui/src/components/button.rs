use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-accent text-white hover:bg-blue-600",
            Self::Outline => "bg-transparent border border-border text-default hover:bg-hover",
            Self::Ghost => "bg-transparent text-default hover:bg-hover",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(into, default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_classes = variant.classes();

    rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center justify-center py-2 px-4 rounded focus:outline-none disabled:opacity-50 {variant_classes} {class}",
            disabled,
            onclick: move |evt: MouseEvent| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
