mod conversation;
mod responses;
mod sentiment;
mod timer;
mod tutor;
mod types;

pub use conversation::{
    ChatSettings, Conversation, TurnState, DEFAULT_REPLY_DELAY, GREETING, SUGGESTIONS,
};
pub use responses::{ResponseEntry, ResponsePool, ResponseSelector};
pub use sentiment::{
    classify, matched_keywords, KeywordHits, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS,
};
pub use timer::{ReplyTimer, TimerOutcome};
pub use tutor::{TutorSession, TUTOR_FALLBACK, TUTOR_GREETING};
pub use types::{Message, Role, SentimentCategory, SentimentCounts, Turn};
