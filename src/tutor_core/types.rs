use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl SentimentCategory {
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Neutral,
        SentimentCategory::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "positive",
            SentimentCategory::Neutral => "neutral",
            SentimentCategory::Negative => "negative",
        }
    }

    /// Badge text shown next to a message.
    pub fn label(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "😊 Positive",
            SentimentCategory::Neutral => "😐 Neutral",
            SentimentCategory::Negative => "😔 Negative",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the sentiment chat thread. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub sentiment: SentimentCategory,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: String,
        role: Role,
        content: String,
        sentiment: SentimentCategory,
        timestamp: DateTime<Utc>,
    ) -> Message {
        Message {
            id,
            role,
            content,
            sentiment,
            timestamp,
        }
    }
}

/// A `{role, content}` pair as exchanged with the chat relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Turn {
        Turn {
            role,
            content: content.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn tally<'a>(messages: impl IntoIterator<Item = &'a Message>) -> SentimentCounts {
        messages
            .into_iter()
            .fold(SentimentCounts::default(), |mut counts, msg| {
                counts.total += 1;
                match msg.sentiment {
                    SentimentCategory::Positive => counts.positive += 1,
                    SentimentCategory::Neutral => counts.neutral += 1,
                    SentimentCategory::Negative => counts.negative += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sentiment: SentimentCategory) -> Message {
        Message::new("1".into(), Role::User, "x".into(), sentiment, Utc::now())
    }

    #[test]
    fn test_tally() {
        let messages = vec![
            message(SentimentCategory::Positive),
            message(SentimentCategory::Neutral),
            message(SentimentCategory::Neutral),
            message(SentimentCategory::Negative),
        ];
        let counts = SentimentCounts::tally(&messages);
        assert_eq!(
            counts,
            SentimentCounts {
                total: 4,
                positive: 1,
                neutral: 2,
                negative: 1,
            }
        );
        assert_eq!(SentimentCounts::tally(&[] as &[Message]), SentimentCounts::default());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&SentimentCategory::Negative).unwrap(),
            "\"negative\""
        );
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }
}
