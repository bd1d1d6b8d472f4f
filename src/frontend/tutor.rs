use std::sync::Arc;

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use tracing::warn;

use super::components::*;
use crate::relay::RelayClient;
use crate::tutor_core::TutorSession;

/// The AI-tutor page, answered by the hosted model through the relay.
pub fn tutor(cx: Scope<Arc<RelayClient>>) -> Element {
    let session = use_ref(cx, TutorSession::new);
    let draft = use_ref(cx, String::new);
    let loading = use_state(cx, || false);

    let send = move |_| {
        let tmp = draft.read().clone();
        let request = match session.write().begin(&tmp) {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(err) => {
                warn!(%err, "submit ignored");
                return;
            }
        };
        draft.set(String::new());
        loading.set(true);

        cx.spawn({
            let relay = cx.props.clone();
            to_owned![session, loading];

            async move {
                let outcome = relay.complete(&request).await;
                let finished = session.write().finish(outcome).map(|_| ());
                if let Err(err) = finished {
                    warn!(%err, "tutor reply dropped");
                }
                loading.set(false);
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

    let busy = **loading;

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "header",
            h1 {"AI Tutor"}
            h2 {"Ask anything you want to learn"}
        }
        div {
            id: "chat-window",
            class: "chat-window",
            for turn in session.read().turns().iter() {
                MessageBubble { role: turn.role, content: turn.content.clone() }
            }
            if busy {
                rsx!(Loading{})
            }
        }
        div {
            id: "input-area",
            UserInput {
                draft: draft,
                disabled: busy,
                placeholder: "Ask your tutor a question",
                on_press: send_enter,
            }
            button {
                id: "send-button",
                disabled: "{busy}",
                onclick: send_button, "Send" }
        }
        div {
            id: "bottom-holder"
        }
    ))
}
