use dioxus::prelude::*;

/// Palette shared by badges, progress bars and card accents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeColor {
    Primary,
    Secondary,
    Info,
    Success,
    Warning,
    Error,
    #[default]
    Dark,
    Light,
}

impl BadgeColor {
    pub fn background(self) -> &'static str {
        match self {
            Self::Primary => "bg-pink-500",
            Self::Secondary => "bg-slate-500",
            Self::Info => "bg-sky-500",
            Self::Success => "bg-green-500",
            Self::Warning => "bg-amber-500",
            Self::Error => "bg-red-600",
            Self::Dark => "bg-neutral-800",
            Self::Light => "bg-neutral-200",
        }
    }

    /// Text color that stays readable on [`BadgeColor::background`].
    pub fn foreground(self) -> &'static str {
        match self {
            Self::Light => "text-neutral-800",
            _ => "text-white",
        }
    }
}

#[component]
pub fn Badge(color: BadgeColor, #[props(into)] label: String) -> Element {
    let bg = color.background();
    let fg = color.foreground();

    rsx! {
        span {
            class: "badge inline-block px-2 py-0.5 rounded text-xs font-bold uppercase {bg} {fg}",
            "{label}"
        }
    }
}
