mod client;
mod error;
mod handler;
mod types;

pub use client::{
    RelayClient, RelaySettings, API_VERSION, DEFAULT_DEPLOYMENT, DEFAULT_ENDPOINT, EMPTY_REPLY,
    SYSTEM_PROMPT,
};
pub use error::RelayError;
pub use handler::{api_router, ApiState};
pub use types::{ChatReply, ChatRequest};
