use std::fmt::Display;

use tracing::warn;

use super::types::{Role, Turn};
use crate::error::{TutorError, TutorResult};
use crate::relay::ChatRequest;

pub static TUTOR_GREETING: &str = "Hello! I'm your AI tutor. How can I help you learn today?";
pub static TUTOR_FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

/// Transcript of the AI-tutor page. A turn is opened with [`begin`] and
/// closed with [`finish`] once the relay answers; the relay call itself
/// happens outside so the transcript is never borrowed across it.
///
/// [`begin`]: TutorSession::begin
/// [`finish`]: TutorSession::finish
pub struct TutorSession {
    turns: Vec<Turn>,
    pending: bool,
}

impl TutorSession {
    pub fn new() -> TutorSession {
        TutorSession {
            turns: vec![Turn::new(Role::Assistant, TUTOR_GREETING)],
            pending: false,
        }
    }

    /// Appends the user's turn and returns the relay request for it, carrying
    /// the transcript as it was before this turn. Blank drafts yield `None`.
    pub fn begin(&mut self, draft: &str) -> TutorResult<Option<ChatRequest>> {
        if self.pending {
            return Err(TutorError::TurnInProgress);
        }
        let message = draft.trim();
        if message.is_empty() {
            return Ok(None);
        }
        let request = ChatRequest::new(message, self.turns.clone());
        self.turns.push(Turn::new(Role::User, message));
        self.pending = true;
        Ok(Some(request))
    }

    /// Closes the pending turn with the relay's reply, or with the generic
    /// retry prompt when the relay failed.
    pub fn finish<E: Display>(&mut self, outcome: Result<String, E>) -> TutorResult<&Turn> {
        if !self.pending {
            return Err(TutorError::NoPendingTurn);
        }
        let content = outcome.unwrap_or_else(|err| {
            warn!(%err, "tutor reply failed");
            TUTOR_FALLBACK.to_string()
        });
        self.pending = false;
        self.turns.push(Turn::new(Role::Assistant, content));
        Ok(&self.turns[self.turns.len() - 1])
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for TutorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayError;

    #[test]
    fn test_begin_carries_prior_history() {
        let mut session = TutorSession::new();
        let request = session.begin("  What is a noun? ").unwrap().unwrap();
        assert_eq!(request.message, "What is a noun?");
        assert_eq!(request.history(), &[Turn::new(Role::Assistant, TUTOR_GREETING)]);
        assert_eq!(session.turns().len(), 2);
        assert!(session.is_pending());
    }

    #[test]
    fn test_blank_and_busy() {
        let mut session = TutorSession::new();
        assert!(session.begin(" ").unwrap().is_none());
        assert!(!session.is_pending());
        session.begin("one").unwrap();
        assert!(matches!(session.begin("two"), Err(TutorError::TurnInProgress)));
    }

    #[test]
    fn test_finish_success_and_failure() {
        let mut session = TutorSession::new();
        assert!(matches!(
            session.finish(Ok::<_, RelayError>("x".into())),
            Err(TutorError::NoPendingTurn)
        ));

        session.begin("one").unwrap();
        let reply = session.finish(Ok::<_, RelayError>("A person, place or thing.".into())).unwrap();
        assert_eq!(reply.content, "A person, place or thing.");

        let second = session.begin("two").unwrap().unwrap();
        assert_eq!(second.history().len(), 3);
        let reply = session.finish(Err::<String, _>(RelayError::MissingApiKey)).unwrap();
        assert_eq!(reply, &Turn::new(Role::Assistant, TUTOR_FALLBACK));
        assert!(!session.is_pending());
    }
}
