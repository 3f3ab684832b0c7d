use dioxus::prelude::*;

use ui::views::EmbeddingModelsView;
use ui::{available_models, EmbeddingModel};

#[component]
pub fn EmbeddingModels() -> Element {
    let mut current = use_signal(|| {
        available_models()
            .into_iter()
            .find(|m| m.is_default)
            .map(|m| m.model_name)
    });

    rsx! {
        EmbeddingModelsView {
            current_model: current(),
            model_options: available_models(),
            on_confirm: move |model: EmbeddingModel| {
                tracing::info!(model = %model.model_name, dim = model.model_dim, "Embedding model selected");
                current.set(Some(model.model_name));
            },
        }
    }
}
