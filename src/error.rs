use thiserror::Error;

/// Errors raised by the tutor core and its configuration.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Static configuration is unusable, e.g. an empty response pool.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A reply is still pending for the previous turn.
    #[error("A reply is still pending for the previous message")]
    TurnInProgress,

    /// A reply was requested but no user message is waiting for one.
    #[error("No message is waiting for a reply")]
    NoPendingTurn,
}

pub type TutorResult<T> = Result<T, TutorError>;
