//! Light/dark theme shared through context.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn logo_src(self) -> &'static str {
        match self {
            Self::Light => "/logo.png",
            Self::Dark => "/logo-dark.png",
        }
    }

    /// Class set on the document root.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }
}

/// Newtype so the theme signal can't be confused with other `Signal<Theme>`s in context.
#[derive(Clone, Copy)]
pub struct ThemeSignal(pub Signal<Theme>);

/// Install a theme signal for the subtree.
pub fn use_theme_provider(initial: Theme) -> ThemeSignal {
    use_context_provider(|| ThemeSignal(Signal::new(initial)))
}

/// The current theme, or [`Theme::Light`] when no provider is mounted.
pub fn use_theme() -> Theme {
    try_use_context::<ThemeSignal>()
        .map(|ThemeSignal(theme)| theme())
        .unwrap_or_default()
}
