use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::model_selector::{EmbeddingModel, ModelSelector};
use crate::Modal;

/// Admin page for switching the embedding model.
///
/// Picking a model opens a confirmation modal; `on_confirm` performs the switch.
#[component]
pub fn EmbeddingModelsView(
    #[props(into)]
    current_model: Option<String>,
    model_options: Vec<EmbeddingModel>,
    on_confirm: EventHandler<EmbeddingModel>,
) -> Element {
    let mut pending = use_signal(|| Option::<EmbeddingModel>::None);

    rsx! {
        div {
            class: "py-6",
            h1 { class: "text-2xl font-bold mb-2", "Embedding" }
            if let Some(current) = current_model {
                p { class: "text-sm mb-4",
                    "The current embedding model is "
                    i { "{current}" }
                    "."
                }
            }
            h2 { class: "text-lg font-semibold mb-4", "Choose your Embedding Model" }
            ModelSelector {
                model_options,
                set_selected_model: move |model| pending.set(Some(model)),
            }
        }
        if let Some(model) = pending() {
            ConfirmModelSwitch {
                model,
                on_confirm: move |model| {
                    on_confirm.call(model);
                    pending.set(None);
                },
                on_cancel: move |_| pending.set(None),
            }
        }
    }
}

/// Confirmation step before switching to `model`.
#[component]
fn ConfirmModelSwitch(
    model: EmbeddingModel,
    on_confirm: EventHandler<EmbeddingModel>,
    on_cancel: EventHandler<()>,
) -> Element {
    let name = model.model_name.clone();

    rsx! {
        Modal {
            title: rsx! { "Update Embedding Model" },
            on_dismiss: move |_| on_cancel.call(()),
            class: "max-w-3xl",
            div {
                p { class: "mb-4",
                    "Switch to "
                    b { "{name}" }
                    "? Documents will be re-indexed in the background and search keeps using the current model until that finishes."
                }
                div {
                    class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_confirm.call(model.clone()),
                        "Confirm"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
