//! # Dashboard settings (`dashboard.toml`)
//!
//! Settings are layered the usual way: built-in defaults, then an optional
//! `dashboard.toml` next to the binary, then `DASHBOARD_*` environment
//! variables.
//!
//! ```toml
//! [product]
//! name = "Adcubum"
//!
//! [feedback]
//! positive_options = []
//! negative_options = ["Retrieved documents were not relevant"]
//! ```
//!
//! Environment keys use `__` between sections and commas inside lists, e.g.
//! `DASHBOARD_FEEDBACK__NEGATIVE_OPTIONS="Too slow,Wrong answer"`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map};
use dioxus::prelude::*;
use serde::Deserialize;

use crate::feedback::FeedbackType;

pub const SETTINGS_FILE: &str = "dashboard.toml";

const ENV_PREFIX: &str = "DASHBOARD";
const DEFAULT_PRODUCT_NAME: &str = "Adcubum";
const DEFAULT_NEGATIVE_OPTIONS: [&str; 3] = [
    "Retrieved documents were not relevant",
    "AI misread the documents",
    "Cited source had incorrect information",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
}

/// Canned answers offered in the feedback modal.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedbackSettings {
    pub positive_options: Vec<String>,
    pub negative_options: Vec<String>,
}

impl FeedbackSettings {
    pub fn options_for(&self, feedback_type: FeedbackType) -> &[String] {
        match feedback_type {
            FeedbackType::Like => &self.positive_options,
            FeedbackType::Dislike => &self.negative_options,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Settings {
    pub product: Product,
    pub feedback: FeedbackSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            product: Product {
                name: DEFAULT_PRODUCT_NAME.to_string(),
            },
            feedback: FeedbackSettings {
                positive_options: Vec::new(),
                negative_options: DEFAULT_NEGATIVE_OPTIONS.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

impl Settings {
    /// Load from `dashboard.toml` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(None)
    }

    /// Parse a TOML document layered over the defaults.
    pub fn from_toml(document: &str) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// `env` replaces the process environment when given.
    fn load_with_env(env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(
                File::with_name(SETTINGS_FILE)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(environment(env))
            .build()?
            .try_deserialize()
    }
}

/// Settings provided by the app root, or the defaults when none were provided.
pub fn use_settings() -> Settings {
    try_use_context::<Settings>().unwrap_or_default()
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("product.name", DEFAULT_PRODUCT_NAME)?
        .set_default("feedback.positive_options", Vec::<String>::new())?
        .set_default("feedback.negative_options", DEFAULT_NEGATIVE_OPTIONS.to_vec())
}

fn environment(source: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("feedback.positive_options")
        .with_list_parse_key("feedback.negative_options")
        .source(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_match_default_impl() {
        let settings = Settings::load_with_env(env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.feedback.positive_options.is_empty());
        assert_eq!(settings.feedback.negative_options.len(), 3);
        assert_eq!(settings.product.name, "Adcubum");
    }

    #[test]
    fn environment_overrides_lists_and_name() {
        let settings = Settings::load_with_env(env(&[
            ("DASHBOARD_FEEDBACK__POSITIVE_OPTIONS", "Accurate,Fast"),
            ("DASHBOARD_PRODUCT__NAME", "DocChat"),
        ]))
        .unwrap();
        assert_eq!(settings.feedback.positive_options, vec!["Accurate", "Fast"]);
        assert_eq!(settings.feedback.negative_options.len(), 3);
        assert_eq!(settings.product.name, "DocChat");
    }

    #[test]
    fn toml_document_layers_over_defaults() {
        let settings = Settings::from_toml(
            r#"
            [feedback]
            negative_options = ["Too slow"]
            "#,
        )
        .unwrap();
        assert_eq!(settings.feedback.negative_options, vec!["Too slow"]);
        assert!(settings.feedback.positive_options.is_empty());
        assert_eq!(settings.product.name, "Adcubum");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Settings::from_toml("[feedback\nnegative_options = 3").is_err());
    }

    #[test]
    fn options_follow_feedback_type() {
        let settings = Settings::default();
        assert!(settings.feedback.options_for(FeedbackType::Like).is_empty());
        assert_eq!(
            settings.feedback.options_for(FeedbackType::Dislike)[0],
            "Retrieved documents were not relevant"
        );
    }
}
