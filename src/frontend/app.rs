use std::sync::Arc;

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use super::components::*;
use crate::tutor_core::{ChatSettings, Conversation, ReplyTimer, Role, TimerOutcome};

/// The sentiment chat page. One conversation per liveview session.
pub fn app(cx: Scope<Arc<ChatSettings>>) -> Element {
    let conversation = use_ref(cx, || Conversation::new(cx.props, StdRng::from_entropy()));
    let draft = use_ref(cx, String::new);
    let pending = use_ref(cx, || None::<ReplyTimer>);

    let send = move |_| {
        let tmp = draft.read().clone();
        let submitted = conversation.write().submit(&tmp).map(|msg| msg.is_some());
        match submitted {
            Ok(true) => {}
            Ok(false) => return,
            Err(err) => {
                warn!(%err, "submit ignored");
                return;
            }
        }
        draft.set(String::new());

        let (timer, fired) = ReplyTimer::arm(cx.props.reply_delay);
        pending.set(Some(timer));

        cx.spawn({
            to_owned![conversation, pending];

            async move {
                match fired.await {
                    TimerOutcome::Fired => {
                        let delivered = conversation.write().deliver_reply().map(|_| ());
                        if let Err(err) = delivered {
                            warn!(%err, "reply dropped");
                        }
                    }
                    TimerOutcome::Cancelled => {
                        conversation.write().abandon_turn();
                    }
                }
                pending.set(None);
            }
        });
    };

    let send_enter = move |e: Event<KeyboardData>| {
        if let Key::Enter = e.data.key() {
            send(0);
        }
    };

    let send_button = move |_| {
        send(0);
    };

    let loading = conversation.read().is_awaiting_reply();
    let counts = conversation.read().counts();
    let show_suggestions = conversation.read().messages().len() <= 1;

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "header",
            h1 {"Chat with Humanoid AI"}
            h2 {"Real-time sentiment analysis"}
        }
        div {
            id: "chat-window",
            class: "chat-window",
            for msg in conversation.read().messages().iter() {
                div {
                    class: match msg.role {
                        Role::User => "chat-row user-row",
                        Role::Assistant => "chat-row other-row",
                    },
                    MessageBubble { role: msg.role, content: msg.content.clone() }
                    SentimentBadge { sentiment: msg.sentiment }
                }
            }
            if loading {
                rsx!(Loading{})
            }
        }
        div {
            id: "input-area",
            if show_suggestions {
                rsx!(Suggestions {
                    suggestions: cx.props.suggestions.as_slice(),
                    draft: draft,
                })
            }
            UserInput {
                draft: draft,
                disabled: loading,
                placeholder: "Type your message... (The AI analyzes your sentiment)",
                on_press: send_enter,
            }
            button {
                id: "send-button",
                disabled: "{loading}",
                onclick: send_button, "Send" }
        }
        Stats { counts: counts }
        div {
            id: "bottom-holder"
        }
    ))
}
