use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::SentimentCategory;
use crate::error::{TutorError, TutorResult};

/// A canned reply. `sentiment` is the label shown on the reply itself and is
/// independent of the pool the entry lives in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub message: String,
    pub sentiment: SentimentCategory,
}

impl ResponseEntry {
    pub fn new(message: impl Into<String>, sentiment: SentimentCategory) -> ResponseEntry {
        ResponseEntry {
            message: message.into(),
            sentiment,
        }
    }
}

/// Replies for each sentiment category. Every category is guaranteed to hold
/// at least one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponsePool {
    positive: Vec<ResponseEntry>,
    neutral: Vec<ResponseEntry>,
    negative: Vec<ResponseEntry>,
}

impl ResponsePool {
    pub fn new(
        positive: Vec<ResponseEntry>,
        neutral: Vec<ResponseEntry>,
        negative: Vec<ResponseEntry>,
    ) -> TutorResult<ResponsePool> {
        let pool = ResponsePool {
            positive,
            neutral,
            negative,
        };
        for category in SentimentCategory::ALL {
            if pool.entries(category).is_empty() {
                return Err(TutorError::Configuration(format!(
                    "response pool for {category} sentiment is empty"
                )));
            }
        }
        Ok(pool)
    }

    pub fn entries(&self, category: SentimentCategory) -> &[ResponseEntry] {
        match category {
            SentimentCategory::Positive => &self.positive,
            SentimentCategory::Neutral => &self.neutral,
            SentimentCategory::Negative => &self.negative,
        }
    }
}

impl Default for ResponsePool {
    /// The authored demo replies. Negative input is answered with
    /// neutral-labelled, de-escalating replies.
    fn default() -> Self {
        use SentimentCategory::*;
        ResponsePool {
            positive: vec![
                ResponseEntry::new("That's wonderful! I'm glad you're feeling optimistic. Tell me more about what brings you joy.", Positive),
                ResponseEntry::new("I love your enthusiasm! Your positive energy is contagious. What's making you so happy?", Positive),
                ResponseEntry::new("That's fantastic! It sounds like things are going great. How can I help you celebrate this moment?", Positive),
            ],
            neutral: vec![
                ResponseEntry::new("I understand. Could you tell me more about what you're thinking?", Neutral),
                ResponseEntry::new("That's interesting. Help me understand your perspective better.", Neutral),
                ResponseEntry::new("I see. What would you like to explore further?", Neutral),
            ],
            negative: vec![
                ResponseEntry::new("I can sense some frustration in your words. I'm here to help. What's bothering you?", Neutral),
                ResponseEntry::new("It sounds like you're going through a tough time. I'm here to listen and support you.", Neutral),
                ResponseEntry::new("I understand this is difficult. Let's work through this together. What do you need?", Neutral),
            ],
        }
    }
}

/// Picks a reply uniformly at random from the pool of a category.
pub struct ResponseSelector<R> {
    pool: ResponsePool,
    rng: R,
}

impl<R: Rng> ResponseSelector<R> {
    pub fn new(pool: ResponsePool, rng: R) -> ResponseSelector<R> {
        ResponseSelector { pool, rng }
    }

    pub fn select(&mut self, category: SentimentCategory) -> &ResponseEntry {
        let entries = self.pool.entries(category);
        let index = self.rng.gen_range(0..entries.len());
        &entries[index]
    }

    pub fn pool(&self) -> &ResponsePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use SentimentCategory::*;

    #[test]
    fn test_default_pool_is_complete() {
        let pool = ResponsePool::default();
        let rebuilt = ResponsePool::new(
            pool.entries(Positive).to_vec(),
            pool.entries(Neutral).to_vec(),
            pool.entries(Negative).to_vec(),
        )
        .unwrap();
        assert_eq!(pool, rebuilt);
        assert!(pool.entries(Negative).iter().all(|e| e.sentiment == Neutral));
        assert!(pool.entries(Positive).iter().all(|e| e.sentiment == Positive));
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let entry = ResponseEntry::new("ok", Neutral);
        let err = ResponsePool::new(vec![entry.clone()], vec![entry], vec![]).unwrap_err();
        assert!(matches!(err, TutorError::Configuration(msg) if msg.contains("negative")));
    }

    #[test]
    fn test_pinned_draw() {
        let mut selector = ResponseSelector::new(ResponsePool::default(), StepRng::new(0, 0));
        let first = selector.pool().entries(Negative)[0].clone();
        assert_eq!(selector.select(Negative), &first);
        assert_eq!(selector.select(Negative), &first);
    }

    #[test]
    fn test_selection_stays_in_pool() {
        let mut selector = ResponseSelector::new(ResponsePool::default(), StdRng::seed_from_u64(7));
        for category in SentimentCategory::ALL {
            let entries = selector.pool().entries(category).to_vec();
            for _ in 0..50 {
                let picked = selector.select(category).clone();
                assert!(entries.contains(&picked));
            }
        }
    }

    #[test]
    fn test_single_entry_pool() {
        let only = ResponseEntry::new("only", Negative);
        let pool = ResponsePool::new(vec![only.clone()], vec![only.clone()], vec![only.clone()]).unwrap();
        let mut selector = ResponseSelector::new(pool, StdRng::seed_from_u64(1));
        assert_eq!(selector.select(Positive), &only);
    }
}
