use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Failures of the chat relay, each mapped to one HTTP response shape.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid request format")]
    InvalidRequest,

    #[error("Azure OpenAI API key not configured")]
    MissingApiKey,

    #[error("Failed to get response from Azure OpenAI")]
    Upstream { status: StatusCode, details: Value },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest => StatusCode::BAD_REQUEST,
            RelayError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Upstream { status, .. } => *status,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> Value {
        match self {
            RelayError::Upstream { details, .. } => json!({
                "error": self.to_string(),
                "details": details,
            }),
            // causes stay in the server log
            RelayError::Internal(_) => json!({ "error": "Internal server error" }),
            _ => json!({ "error": self.to_string() }),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Internal(format!("upstream transport: {err}"))
    }
}

impl From<async_openai::error::OpenAIError> for RelayError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        RelayError::Internal(format!("building upstream request: {err}"))
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
