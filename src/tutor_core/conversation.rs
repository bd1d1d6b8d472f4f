use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

use super::responses::{ResponsePool, ResponseSelector};
use super::sentiment::{classify, matched_keywords};
use super::types::{Message, Role, SentimentCategory, SentimentCounts};
use crate::error::{TutorError, TutorResult};

pub static GREETING: &str = "Hello! I'm your humanoid AI assistant. I can understand and respond to your emotions through advanced sentiment analysis. Tell me how you're feeling today!";

pub static SUGGESTIONS: [&str; 4] = [
    "I'm feeling great today!",
    "I'm a bit confused about something",
    "Tell me something interesting",
    "I'm interested in AI and ML",
];

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(800);

/// Immutable setup shared by every sentiment chat session.
#[derive(Clone, Debug)]
pub struct ChatSettings {
    pub pool: ResponsePool,
    pub greeting: Option<String>,
    pub suggestions: Vec<String>,
    pub reply_delay: Duration,
}

impl ChatSettings {
    pub fn with_reply_delay(mut self, reply_delay: Duration) -> ChatSettings {
        self.reply_delay = reply_delay;
        self
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        ChatSettings {
            pool: ResponsePool::default(),
            greeting: Some(GREETING.to_string()),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput,
    /// Holds the category of the user message that is waiting for a reply.
    AwaitingReply(SentimentCategory),
}

/// The sentiment chat thread of one page session.
pub struct Conversation<R> {
    messages: Vec<Message>,
    state: TurnState,
    selector: ResponseSelector<R>,
    last_id: i64,
}

impl<R: Rng> Conversation<R> {
    pub fn new(settings: &ChatSettings, rng: R) -> Conversation<R> {
        let mut conversation = Conversation {
            messages: Vec::new(),
            state: TurnState::AwaitingInput,
            selector: ResponseSelector::new(settings.pool.clone(), rng),
            last_id: 0,
        };
        if let Some(greeting) = &settings.greeting {
            conversation.push(Role::Assistant, greeting.clone(), SentimentCategory::Positive);
        }
        conversation
    }

    /// Records a user message and moves to `AwaitingReply`.
    ///
    /// Blank drafts are ignored and return `Ok(None)`.
    pub fn submit(&mut self, draft: &str) -> TutorResult<Option<&Message>> {
        if let TurnState::AwaitingReply(_) = self.state {
            return Err(TutorError::TurnInProgress);
        }
        let content = draft.trim();
        if content.is_empty() {
            return Ok(None);
        }

        let category = classify(content);
        let hits = matched_keywords(content);
        debug!(
            %category,
            positive = ?hits.positive,
            negative = ?hits.negative,
            "classified user message"
        );

        self.state = TurnState::AwaitingReply(category);
        Ok(Some(self.push(Role::User, content.to_string(), category)))
    }

    /// Appends the assistant reply for the pending user message.
    pub fn deliver_reply(&mut self) -> TutorResult<&Message> {
        let TurnState::AwaitingReply(category) = self.state else {
            return Err(TutorError::NoPendingTurn);
        };
        let reply = self.selector.select(category).clone();
        info!(%category, reply_sentiment = %reply.sentiment, "delivering canned reply");

        self.state = TurnState::AwaitingInput;
        Ok(self.push(Role::Assistant, reply.message, reply.sentiment))
    }

    /// Drops a pending turn without replying. Returns whether one was pending.
    pub fn abandon_turn(&mut self) -> bool {
        let pending = self.is_awaiting_reply();
        self.state = TurnState::AwaitingInput;
        pending
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_awaiting_reply(&self) -> bool {
        matches!(self.state, TurnState::AwaitingReply(_))
    }

    pub fn counts(&self) -> SentimentCounts {
        SentimentCounts::tally(&self.messages)
    }

    fn push(&mut self, role: Role, content: String, sentiment: SentimentCategory) -> &Message {
        let timestamp = Utc::now();
        let id = timestamp.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        self.messages.push(Message::new(
            id.to_string(),
            role,
            content,
            sentiment,
            timestamp,
        ));
        &self.messages[self.messages.len() - 1]
    }
}
