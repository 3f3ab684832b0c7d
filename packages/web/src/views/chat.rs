use dioxus::prelude::*;

use ui::views::{ChatPageView, FeedbackSubmission};

#[component]
pub fn Chat() -> Element {
    rsx! {
        ChatPageView {
            on_send: move |text: String| {
                tracing::info!(chars = text.len(), "Chat message sent");
            },
            on_feedback: move |submission: FeedbackSubmission| {
                tracing::info!(
                    message = submission.message_index,
                    kind = ?submission.feedback_type,
                    predefined = ?submission.details.predefined_feedback,
                    "Feedback submitted"
                );
            },
        }
    }
}
