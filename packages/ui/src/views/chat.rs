use dioxus::prelude::*;

use crate::feedback::{FeedbackDetails, FeedbackModal, FeedbackType};
use crate::icons::{FaThumbsDown, FaThumbsUp};
use crate::settings::use_settings;
use crate::{ChatWithAiCard, Icon};

/// Feedback left on one of the sent messages.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackSubmission {
    pub message_index: usize,
    pub feedback_type: FeedbackType,
    pub details: FeedbackDetails,
}

/// Chat page: the chat card plus the messages sent during this visit.
///
/// Sending and feedback storage belong to the caller.
#[component]
pub fn ChatPageView(on_send: EventHandler<String>, on_feedback: EventHandler<FeedbackSubmission>) -> Element {
    let settings = use_settings();
    let mut sent = use_signal(Vec::<String>::new);
    let mut pending_feedback = use_signal(|| Option::<(usize, FeedbackType)>::None);

    let handle_send = move |text: String| {
        sent.write().push(text.clone());
        on_send.call(text);
    };

    rsx! {
        div {
            class: "py-6",
            div {
                class: "grid",
                ChatWithAiCard {
                    icon: "assistant",
                    title: "Talk to your documents",
                    on_send: handle_send,
                }
            }
            if !sent.read().is_empty() {
                ul {
                    class: "sent-messages mt-4 space-y-2",
                    for (idx, text) in sent.read().iter().enumerate() {
                        li {
                            key: "{idx}",
                            class: "flex items-center gap-2 text-sm",
                            span { class: "flex-grow", "{text}" }
                            button {
                                r#type: "button",
                                class: "p-1 rounded hover:bg-hover",
                                title: "Like",
                                onclick: move |_| pending_feedback.set(Some((idx, FeedbackType::Like))),
                                Icon { icon: FaThumbsUp, width: 14, height: 14 }
                            }
                            button {
                                r#type: "button",
                                class: "p-1 rounded hover:bg-hover",
                                title: "Dislike",
                                onclick: move |_| pending_feedback.set(Some((idx, FeedbackType::Dislike))),
                                Icon { icon: FaThumbsDown, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }
        if let Some((message_index, feedback_type)) = pending_feedback() {
            FeedbackModal {
                feedback_type,
                options: settings.feedback.options_for(feedback_type).to_vec(),
                on_close: move |_| pending_feedback.set(None),
                on_submit: move |details| {
                    on_feedback.call(FeedbackSubmission {
                        message_index,
                        feedback_type,
                        details,
                    })
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_card_without_feedback_modal() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                ChatPageView {
                    on_send: move |_| {},
                    on_feedback: move |_| {},
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Talk to your documents"));
        assert!(!html.contains("sent-messages"));
        assert!(!html.contains("modal-backdrop"));
    }
}
