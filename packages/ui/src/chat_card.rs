use dioxus::prelude::*;

use crate::components::{BadgeColor, Button, ButtonVariant};
use crate::icons::FaPaperPlane;
use crate::Icon;

pub const COMMON_QUESTIONS: [&str; 4] = [
    "How to reset my password?",
    "Where can I find my invoices?",
    "How to contact support?",
    "Can I upgrade my plan?",
];

/// Drain the input buffer into a message, skipping blank input.
pub fn take_message(buffer: &mut String) -> Option<String> {
    let message = buffer.trim().to_string();
    buffer.clear();
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Chat entry card: greeting, quick questions and a message box.
///
/// Sending is delegated to `on_send`; the card only keeps the text buffer.
#[component]
pub fn ChatWithAiCard(
    #[props(default)] color: BadgeColor,
    /// Material icon name shown in the header tile.
    #[props(into, default = "chat".to_string())]
    icon: String,
    #[props(into, default = "Chat with AI".to_string())]
    title: String,
    on_send: EventHandler<String>,
) -> Element {
    let mut message = use_signal(String::new);
    let tile_classes = format!("{} {}", color.background(), color.foreground());

    let mut send = move || {
        let text = take_message(&mut message.write());
        if let Some(text) = text {
            on_send.call(text);
        }
    };

    rsx! {
        div {
            class: "chat-card w-full min-h-[400px] h-[calc(100vh-9rem)] mb-2 flex flex-col rounded-xl shadow bg-white dark:bg-neutral-800",
            div {
                class: "flex",
                div {
                    class: "flex justify-center items-center w-16 h-16 rounded-xl shadow-md ml-6 -mt-4 {tile_classes}",
                    span { class: "material-icons", "{icon}" }
                }
                h6 { class: "mt-4 mb-2 ml-4 font-semibold", "{title}" }
            }
            div {
                class: "flex-grow flex flex-col items-center justify-center p-4",
                span { class: "material-icons text-4xl", "{icon}" }
                h5 { class: "my-4 text-xl", "How can I help you today?" }
            }
            div {
                class: "p-4",
                div {
                    class: "grid grid-cols-2 gap-4",
                    for question in COMMON_QUESTIONS {
                        Button {
                            key: "{question}",
                            variant: ButtonVariant::Outline,
                            class: "w-full",
                            onclick: move |_| on_send.call(question.to_string()),
                            "{question}"
                        }
                    }
                }
                div {
                    class: "mt-4 flex items-center",
                    input {
                        class: "flex-grow mr-2 border border-border rounded px-3 py-2",
                        r#type: "text",
                        placeholder: "Type your message...",
                        value: message(),
                        oninput: move |evt: FormEvent| message.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "h-11",
                        onclick: move |_| send(),
                        Icon { icon: FaPaperPlane, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_message_trims_and_clears() {
        let mut buffer = "  where are my invoices?  ".to_string();
        assert_eq!(take_message(&mut buffer).as_deref(), Some("where are my invoices?"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn blank_buffer_is_not_sent() {
        let mut buffer = "   ".to_string();
        assert_eq!(take_message(&mut buffer), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn renders_defaults_and_questions() {
        let mut dom = VirtualDom::new(|| rsx! { ChatWithAiCard { on_send: move |_| {} } });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Chat with AI"));
        assert!(html.contains("How can I help you today?"));
        for question in COMMON_QUESTIONS {
            assert!(html.contains(question));
        }
        assert!(html.contains("bg-neutral-800"));
    }
}
