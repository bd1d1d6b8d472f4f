use serde::{Deserialize, Serialize};

use crate::tutor_core::Turn;

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<Vec<Turn>>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, history: Vec<Turn>) -> ChatRequest {
        ChatRequest {
            message: message.into(),
            conversation_history: Some(history),
        }
    }

    pub fn history(&self) -> &[Turn] {
        self.conversation_history.as_deref().unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
}
