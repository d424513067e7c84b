//! Keyword-based mood classification
//!
//! Maps free-form text to exactly one [`MoodLabel`] by case-insensitive
//! substring search over an ordered keyword table.
//!
//! Table order is significant: categories are tested top to bottom and the
//! first one with any keyword contained in the lowercased input wins, so an
//! earlier category shadows a later one when both match. Input that matches
//! nothing (including the empty string) classifies as [`MoodLabel::Default`].
//!
//! # Examples
//!
//! ```
//! use mood_common::{classify, MoodLabel};
//!
//! assert_eq!(classify("I feel so sad and blue today"), MoodLabel::Sad);
//! assert_eq!(classify("time to workout at the gym"), MoodLabel::Workout);
//! assert_eq!(classify("just sitting here"), MoodLabel::Default);
//! ```

use crate::MoodLabel;

/// Ordered `(label, keywords)` pairs
///
/// Keywords must be lowercase; they are matched against the lowercased
/// input as-is.
pub type KeywordTable = &'static [(MoodLabel, &'static [&'static str])];

/// Built-in keyword table
pub const BUILTIN_TABLE: KeywordTable = &[
    (MoodLabel::Sad, &["sad", "unhappy", "depressed", "melancholy", "blue"]),
    (MoodLabel::Happy, &["happy", "energetic", "excited", "cheerful", "joyful"]),
    (MoodLabel::Angry, &["angry", "mad", "furious", "annoyed", "frustrated"]),
    (MoodLabel::Chill, &["chill", "relaxed", "calm", "peaceful", "soft"]),
    (MoodLabel::Focus, &["focus", "study", "concentrate", "deep work"]),
    (MoodLabel::Sleep, &["sleep", "tired", "relaxation", "soothing"]),
    (MoodLabel::Romantic, &["romantic", "love", "valentine", "date night"]),
    (MoodLabel::Roadtrip, &["roadtrip", "driving", "long ride", "travel"]),
    (MoodLabel::Party, &["party", "dance", "night out", "celebration"]),
    (MoodLabel::Workout, &["workout", "gym", "exercise", "pump up"]),
];

/// Three-category table of the early chat-only widget
///
/// Kept for comparison with the built-in table. Several words sit under
/// an unexpected label (`chill` under Sad, `romantic` under Angry).
pub const LEGACY_CHAT_TABLE: KeywordTable = &[
    (MoodLabel::Sad, &["sad", "unhappy", "depressed", "chill", "focus", "sleep"]),
    (MoodLabel::Happy, &["happy", "energetic", "excited", "cheerful", "glad"]),
    (MoodLabel::Angry, &["angry", "mad", "furious", "romantic", "frustrated"]),
];

/// Classifier over a fixed keyword table
#[derive(Debug, Clone, Copy)]
pub struct MoodClassifier {
    table: KeywordTable,
}

impl MoodClassifier {
    /// Create a classifier over the given table
    pub const fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// The table this classifier matches against
    pub fn table(&self) -> KeywordTable {
        self.table
    }

    /// Classify an utterance
    ///
    /// Never fails: every input yields a label.
    pub fn classify(&self, text: &str) -> MoodLabel {
        let lowered = text.to_lowercase();
        self.table
            .iter()
            .find(|(_, words)| words.iter().any(|word| lowered.contains(*word)))
            .map(|(label, _)| *label)
            .unwrap_or(MoodLabel::Default)
    }
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::new(BUILTIN_TABLE)
    }
}

/// Classify an utterance with the built-in table
pub fn classify(text: &str) -> MoodLabel {
    MoodClassifier::default().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_order() {
        let labels: Vec<MoodLabel> = BUILTIN_TABLE.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, MoodLabel::ALL[..10].to_vec());
    }

    #[test]
    fn test_builtin_keywords_are_lowercase() {
        for (label, words) in BUILTIN_TABLE {
            for word in words.iter() {
                assert_eq!(*word, word.to_lowercase(), "{} keyword '{}' not lowercase", label, word);
            }
        }
    }

    #[test]
    fn test_every_keyword_selects_its_own_category() {
        // Holds for the built-in table: no keyword of a later category
        // contains a keyword of an earlier one
        for (label, words) in BUILTIN_TABLE {
            for word in words.iter() {
                assert_eq!(classify(word), *label, "keyword '{}'", word);
            }
        }
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(classify(""), MoodLabel::Default);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SAD"), classify("sad"));
        assert_eq!(classify("Date Night plans"), MoodLabel::Romantic);
    }

    #[test]
    fn test_substring_containment_without_tokenization() {
        // "blue" inside "bluegrass", "mad" inside "made"
        assert_eq!(classify("bluegrass festival"), MoodLabel::Sad);
        assert_eq!(classify("homemade bread"), MoodLabel::Angry);
    }

    #[test]
    fn test_earlier_category_shadows_later() {
        // Sad is before Workout
        assert_eq!(classify("sad after the gym"), MoodLabel::Sad);
        // Chill ("soft") is before Sleep ("soothing")
        assert_eq!(classify("soothing soft piano"), MoodLabel::Chill);
        // "relaxation" contains no Chill keyword, so Sleep matches
        assert_eq!(classify("need relaxation"), MoodLabel::Sleep);
    }

    #[test]
    fn test_legacy_table_differs() {
        let legacy = MoodClassifier::new(LEGACY_CHAT_TABLE);
        assert_eq!(legacy.classify("so chill"), MoodLabel::Sad);
        assert_eq!(legacy.classify("romantic dinner"), MoodLabel::Angry);
        assert_eq!(legacy.classify("glad you're here"), MoodLabel::Happy);
        assert_eq!(legacy.classify("workout"), MoodLabel::Default);

        assert_eq!(classify("so chill"), MoodLabel::Chill);
    }

    #[test]
    fn test_empty_table_always_default() {
        let classifier = MoodClassifier::new(&[]);
        assert_eq!(classifier.classify("sad happy angry"), MoodLabel::Default);
    }
}
