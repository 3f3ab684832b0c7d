//! This crate contains all shared UI for the dashboards.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod format;
pub use format::format_cents;

pub mod settings;
pub use settings::{use_settings, Settings};

pub mod theme;
pub use theme::{use_theme, use_theme_provider, Theme, ThemeSignal};

mod modal;
pub use modal::{ClickAction, ClickOrigin, Modal, ModalLayout, DEFAULT_TITLE_SIZE, DEFAULT_WIDTH};

pub mod feedback;
pub use feedback::{FeedbackDetails, FeedbackForm, FeedbackModal, FeedbackType};

mod model_selector;
pub use model_selector::{available_models, EmbeddingModel, ModelOption, ModelSelector};

mod initializing_loader;
pub use initializing_loader::InitializingLoader;

mod chat_card;
pub use chat_card::{take_message, ChatWithAiCard, COMMON_QUESTIONS};

mod kanban_card;
pub use kanban_card::KanbanCard;
