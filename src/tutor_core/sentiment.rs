use super::types::SentimentCategory;

pub const POSITIVE_KEYWORDS: [&str; 9] = [
    "good",
    "great",
    "awesome",
    "love",
    "happy",
    "wonderful",
    "amazing",
    "excellent",
    "fantastic",
];

pub const NEGATIVE_KEYWORDS: [&str; 9] = [
    "bad",
    "terrible",
    "hate",
    "sad",
    "angry",
    "frustrated",
    "awful",
    "horrible",
    "upset",
];

/// Keywords found in a piece of text, in keyword-list order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct KeywordHits {
    pub positive: Vec<&'static str>,
    pub negative: Vec<&'static str>,
}

/// Classifies `text` by case-insensitive substring search over the two
/// keyword lists. Text with hits from both lists, or from neither, is neutral.
///
/// Matching is deliberately not word-bounded: "badminton" contains "bad".
pub fn classify(text: &str) -> SentimentCategory {
    let lower = text.to_lowercase();
    let has_positive = POSITIVE_KEYWORDS.iter().any(|word| lower.contains(word));
    let has_negative = NEGATIVE_KEYWORDS.iter().any(|word| lower.contains(word));

    match (has_positive, has_negative) {
        (true, false) => SentimentCategory::Positive,
        (false, true) => SentimentCategory::Negative,
        _ => SentimentCategory::Neutral,
    }
}

pub fn matched_keywords(text: &str) -> KeywordHits {
    let lower = text.to_lowercase();
    let hits = |words: &[&'static str]| -> Vec<&'static str> {
        words
            .iter()
            .copied()
            .filter(|word| lower.contains(word))
            .collect()
    };
    KeywordHits {
        positive: hits(&POSITIVE_KEYWORDS),
        negative: hits(&NEGATIVE_KEYWORDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SentimentCategory::*;

    #[test]
    fn test_positive_only() {
        assert_eq!(classify("I'm feeling great today!"), Positive);
        assert_eq!(classify("LOVE it"), Positive);
        assert_eq!(classify("this is Excellent work"), Positive);
    }

    #[test]
    fn test_negative_only() {
        assert_eq!(classify("I hate this, it's awful"), Negative);
        assert_eq!(classify("so FRUSTRATED"), Negative);
    }

    #[test]
    fn test_both_or_neither_is_neutral() {
        assert_eq!(classify("good and bad"), Neutral);
        assert_eq!(classify("I love it but I'm upset"), Neutral);
        assert_eq!(classify("Tell me something interesting"), Neutral);
        assert_eq!(classify(""), Neutral);
        assert_eq!(classify("   "), Neutral);
        assert_eq!(classify("¿qué tal? 你好"), Neutral);
    }

    #[test]
    fn test_substring_matching() {
        assert_eq!(classify("That badminton match was boring"), Negative);
        assert_eq!(classify("goodbye"), Positive);
        // "sad" hides inside "crusade"
        assert_eq!(classify("a long crusade"), Negative);
    }

    #[test]
    fn test_every_keyword_alone() {
        for word in POSITIVE_KEYWORDS {
            assert_eq!(classify(&word.to_uppercase()), Positive, "{word}");
        }
        for word in NEGATIVE_KEYWORDS {
            assert_eq!(classify(word), Negative, "{word}");
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "What an amazing, horrible, happy day";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
    }

    #[test]
    fn test_matched_keywords() {
        let hits = matched_keywords("I hate this, it's AWFUL but good");
        assert_eq!(hits.positive, vec!["good"]);
        assert_eq!(hits.negative, vec!["hate", "awful"]);
        assert_eq!(matched_keywords("hello"), KeywordHits::default());
    }
}
