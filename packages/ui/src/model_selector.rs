//! Embedding model picker for the admin pages.

use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

const NO_DESCRIPTION: &str = "Custom model—no description is available.";

/// An embedding model the search backend can index with.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddingModel {
    pub model_name: String,
    pub model_dim: usize,
    pub normalize: bool,
    pub query_prefix: String,
    pub passage_prefix: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub is_default: bool,
}

impl EmbeddingModel {
    pub fn description_or_fallback(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}

/// Models offered out of the box.
pub fn available_models() -> Vec<EmbeddingModel> {
    let e5 = |name: &str, dim: usize, description: &str, is_default: bool| EmbeddingModel {
        model_name: name.to_string(),
        model_dim: dim,
        normalize: true,
        query_prefix: "query: ".to_string(),
        passage_prefix: "passage: ".to_string(),
        description: Some(description.to_string()),
        link: Some(format!("https://huggingface.co/{name}")),
        is_default,
    };

    vec![
        e5(
            "intfloat/e5-base-v2",
            768,
            "The recommended default for most situations.",
            true,
        ),
        e5(
            "intfloat/e5-small-v2",
            384,
            "A smaller and faster model than the default. It is around 2x faster but less accurate.",
            false,
        ),
        e5(
            "intfloat/multilingual-e5-base",
            768,
            "For corpora in languages other than English.",
            false,
        ),
        e5(
            "intfloat/multilingual-e5-small",
            384,
            "A smaller multilingual model. Faster than the base multilingual model but less accurate.",
            false,
        ),
    ]
}

/// Card describing a single model.
#[component]
pub fn ModelOption(model: EmbeddingModel, on_select: Option<EventHandler<EmbeddingModel>>) -> Element {
    let description = model.description_or_fallback().to_string();

    rsx! {
        div {
            class: "model-option p-2 border border-border dark:border-neutral-900 rounded shadow-md bg-hover-light dark:bg-neutral-600 w-96 flex flex-col",
            div {
                class: "font-bold text-lg flex",
                if model.is_default {
                    span { class: "default-model my-auto mr-1 text-accent",
                        Icon { icon: FaStar, width: 16, height: 16 }
                    }
                }
                "{model.model_name}"
            }
            div { class: "text-sm mt-1 mx-1", "{description}" }
            if let Some(link) = model.link.clone() {
                a {
                    target: "_blank",
                    rel: "noreferrer",
                    href: "{link}",
                    class: "text-xs text-link dark:text-blue-300 mx-1 mt-1",
                    "See More Details"
                }
            }
            if let Some(on_select) = on_select {
                button {
                    r#type: "button",
                    class: "select-model m-auto flex mb-1 w-fit p-2 rounded-lg bg-background dark:bg-neutral-800 border border-border dark:border-neutral-900 cursor-pointer hover:bg-hover text-sm mt-auto",
                    onclick: {
                        let model = model.clone();
                        move |_| on_select.call(model.clone())
                    },
                    "Select Model"
                }
            }
        }
    }
}

#[component]
pub fn ModelSelector(
    model_options: Vec<EmbeddingModel>,
    set_selected_model: EventHandler<EmbeddingModel>,
) -> Element {
    rsx! {
        div {
            div {
                class: "flex flex-wrap gap-4",
                for model in model_options {
                    ModelOption {
                        key: "{model.model_name}",
                        model: model.clone(),
                        on_select: set_selected_model,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn custom_model() -> EmbeddingModel {
        EmbeddingModel {
            model_name: "acme/custom".into(),
            model_dim: 512,
            normalize: false,
            query_prefix: String::new(),
            passage_prefix: String::new(),
            description: None,
            link: None,
            is_default: false,
        }
    }

    #[test]
    fn catalog_has_exactly_one_default() {
        let models = available_models();
        assert_eq!(models.iter().filter(|m| m.is_default).count(), 1);
        assert_eq!(models[0].model_name, "intfloat/e5-base-v2");
    }

    #[test]
    fn missing_description_falls_back() {
        assert_eq!(custom_model().description_or_fallback(), NO_DESCRIPTION);
    }

    #[test]
    fn custom_option_without_select_renders_plain_card() {
        let html = render(|| rsx! { ModelOption { model: custom_model() } });
        assert!(html.contains("acme/custom"));
        assert!(html.contains("no description is available"));
        assert!(!html.contains("See More Details"));
        assert!(!html.contains("Select Model"));
        assert!(!html.contains("default-model"));
    }

    #[test]
    fn selector_renders_every_model_with_select_action() {
        let html = render(|| {
            rsx! {
                ModelSelector {
                    model_options: available_models(),
                    set_selected_model: move |_| {},
                }
            }
        });
        assert_eq!(html.matches("Select Model").count(), 4);
        assert_eq!(html.matches("default-model").count(), 1);
        assert!(html.contains("https://huggingface.co/intfloat/e5-small-v2"));
    }
}
