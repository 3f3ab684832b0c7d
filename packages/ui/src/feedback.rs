//! Thumbs-up / thumbs-down feedback on a chat answer.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaThumbsDown, FaThumbsUp};
use crate::{Icon, Modal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackType {
    Like,
    Dislike,
}

impl FeedbackType {
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Like => "(Optional) What did you like about this response?",
            Self::Dislike => {
                "(Optional) What was the issue with the response? How could it be improved?"
            }
        }
    }
}

/// What the user submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDetails {
    pub message: String,
    pub predefined_feedback: Option<String>,
}

/// Local state of the feedback form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    message: String,
    predefined: Option<String>,
}

impl FeedbackForm {
    /// Pick a canned answer, replacing any earlier pick.
    pub fn select(&mut self, option: &str) {
        self.predefined = Some(option.to_string());
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.predefined.as_deref() == Some(option)
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn submission(&self) -> FeedbackDetails {
        FeedbackDetails {
            message: self.message.clone(),
            predefined_feedback: self.predefined.clone(),
        }
    }
}

const OPTION_CLASS: &str = "bg-border hover:bg-hover text-default py-2 px-4 rounded m-1";

fn option_class(selected: bool) -> String {
    if selected {
        format!("{OPTION_CLASS} ring-2 ring-accent")
    } else {
        OPTION_CLASS.to_string()
    }
}

#[component]
pub fn FeedbackModal(
    feedback_type: FeedbackType,
    /// Canned answers for `feedback_type`.
    options: Vec<String>,
    on_close: EventHandler<()>,
    on_submit: EventHandler<FeedbackDetails>,
) -> Element {
    let mut form = use_signal(FeedbackForm::default);

    let handle_submit = move |_: MouseEvent| {
        on_submit.call(form.read().submission());
        on_close.call(());
    };

    rsx! {
        Modal {
            on_dismiss: move |_| on_close.call(()),
            class: "max-w-5xl",
            h2 {
                class: "text-2xl text-emphasis dark:text-gray-400 font-bold mb-4 flex",
                div {
                    class: "mr-1 my-auto",
                    {match feedback_type {
                        FeedbackType::Like => rsx! {
                            span { class: "feedback-like text-green-500 my-auto mr-2",
                                Icon { icon: FaThumbsUp, width: 20, height: 20 }
                            }
                        },
                        FeedbackType::Dislike => rsx! {
                            span { class: "feedback-dislike text-red-600 my-auto mr-2",
                                Icon { icon: FaThumbsDown, width: 20, height: 20 }
                            }
                        },
                    }}
                }
                "Provide additional feedback"
            }
            div {
                class: "mb-4 flex flex-wrap justify-start",
                for option in options {
                    button {
                        key: "{option}",
                        r#type: "button",
                        class: option_class(form.read().is_selected(&option)),
                        onclick: {
                            let option = option.clone();
                            move |_| form.write().select(&option)
                        },
                        "{option}"
                    }
                }
            }
            textarea {
                autofocus: true,
                class: "w-full flex-grow border border-border-strong rounded outline-none placeholder-subtle px-4 py-4 bg-background dark:bg-neutral-800 overflow-hidden h-28 whitespace-normal resize-none break-all overscroll-contain",
                role: "textarea",
                aria_multiline: "true",
                placeholder: feedback_type.placeholder(),
                value: form.read().message().to_string(),
                oninput: move |evt: FormEvent| form.write().set_message(evt.value()),
            }
            div {
                class: "flex mt-2",
                Button {
                    variant: ButtonVariant::Primary,
                    class: "mx-auto",
                    onclick: handle_submit,
                    "Submit feedback"
                }
            }
        }
    }
}
