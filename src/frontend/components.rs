#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::tutor_core::{Role, SentimentCategory, SentimentCounts};

#[derive(PartialEq, Props)]
pub struct BubbleProps {
    role: Role,
    content: String,
}

pub fn MessageBubble(cx: Scope<BubbleProps>) -> Element {
    cx.render(rsx!(
        div {
            class: match cx.props.role {
                Role::User => "chat-message user-message",
                Role::Assistant => "chat-message other-message",
            },
            "{cx.props.content}"
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct BadgeProps {
    sentiment: SentimentCategory,
}

pub fn SentimentBadge(cx: Scope<BadgeProps>) -> Element {
    let sentiment = cx.props.sentiment;
    cx.render(rsx!(
        div {
            class: "badge badge-{sentiment}",
            "{sentiment.label()}"
        }
    ))
}

pub fn Loading(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message other-message",
            div {
                class: "spinner",
            }
        }
    ))
}

#[derive(Props)]
pub struct DraftProps<'a> {
    draft: &'a UseRef<String>,
    disabled: bool,
    placeholder: &'a str,
    on_press: EventHandler<'a, Event<KeyboardData>>,
}

pub fn UserInput<'a>(cx: Scope<'a, DraftProps<'a>>) -> Element<'a> {
    let draft = cx.props.draft;
    let disabled = cx.props.disabled;
    cx.render(rsx!(textarea {
        id: "user-input",
        placeholder: "{cx.props.placeholder}",
        value: "{draft.read()}",
        disabled: "{disabled}",
        oninput: move |e| {
            draft.set(e.value.clone());
        },
        onkeydown: move |e| cx.props.on_press.call(e),
    }))
}

#[derive(Props)]
pub struct SuggestionProps<'a> {
    suggestions: &'a [String],
    draft: &'a UseRef<String>,
}

/// Quick replies; picking one fills the draft without sending it.
pub fn Suggestions<'a>(cx: Scope<'a, SuggestionProps<'a>>) -> Element<'a> {
    let draft = cx.props.draft;
    cx.render(rsx!(
        div {
            class: "suggestions",
            p { "Quick suggestions:" }
            for suggestion in cx.props.suggestions.iter() {
                button {
                    class: "suggestion",
                    onclick: move |_| draft.set(suggestion.clone()),
                    "{suggestion}"
                }
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct StatsProps {
    counts: SentimentCounts,
}

pub fn Stats(cx: Scope<StatsProps>) -> Element {
    let counts = cx.props.counts;
    cx.render(rsx!(
        div {
            id: "stats",
            div { class: "stat", strong { "{counts.total}" } span { "Messages" } }
            div { class: "stat", strong { "{counts.positive}" } span { "Positive" } }
            div { class: "stat", strong { "{counts.neutral}" } span { "Neutral" } }
            div { class: "stat", strong { "{counts.negative}" } span { "Negative" } }
        }
    ))
}
