//! Mood labels
//!
//! The closed set of moods a user utterance can be classified into. Each
//! label selects a playlist on the backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Mood describing the emotional tone of an utterance
///
/// Serialized as its name (`"Sad"`, `"Roadtrip"`, `"Default"`, ...).
/// Parsing accepts any letter case, so `"sad"` and `"SAD"` both yield
/// [`MoodLabel::Sad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum MoodLabel {
    Sad,
    Happy,
    Angry,
    Chill,
    Focus,
    Sleep,
    Romantic,
    Roadtrip,
    Party,
    Workout,
    /// No keyword matched
    Default,
}

impl MoodLabel {
    /// All labels, in keyword table order with `Default` last
    pub const ALL: [MoodLabel; 11] = [
        MoodLabel::Sad,
        MoodLabel::Happy,
        MoodLabel::Angry,
        MoodLabel::Chill,
        MoodLabel::Focus,
        MoodLabel::Sleep,
        MoodLabel::Romantic,
        MoodLabel::Roadtrip,
        MoodLabel::Party,
        MoodLabel::Workout,
        MoodLabel::Default,
    ];

    /// Label name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Sad => "Sad",
            MoodLabel::Happy => "Happy",
            MoodLabel::Angry => "Angry",
            MoodLabel::Chill => "Chill",
            MoodLabel::Focus => "Focus",
            MoodLabel::Sleep => "Sleep",
            MoodLabel::Romantic => "Romantic",
            MoodLabel::Roadtrip => "Roadtrip",
            MoodLabel::Party => "Party",
            MoodLabel::Workout => "Workout",
            MoodLabel::Default => "Default",
        }
    }

    /// Trigger keywords for this label in the built-in table
    ///
    /// Empty for [`MoodLabel::Default`], which is never matched directly.
    pub fn keywords(&self) -> &'static [&'static str] {
        crate::classifier::BUILTIN_TABLE
            .iter()
            .find(|(label, _)| label == self)
            .map(|(_, words)| *words)
            .unwrap_or(&[])
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidInput(format!("Unknown mood: {}", s)))
    }
}

impl TryFrom<String> for MoodLabel {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("sad".parse::<MoodLabel>().unwrap(), MoodLabel::Sad);
        assert_eq!("SAD".parse::<MoodLabel>().unwrap(), MoodLabel::Sad);
        assert_eq!("RoadTrip".parse::<MoodLabel>().unwrap(), MoodLabel::Roadtrip);
        assert_eq!("default".parse::<MoodLabel>().unwrap(), MoodLabel::Default);
    }

    #[test]
    fn test_parse_unknown_mood_fails() {
        let result = "melancholic".parse::<MoodLabel>();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!("".parse::<MoodLabel>().is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for label in MoodLabel::ALL {
            assert_eq!(label.to_string(), label.as_str());
            assert_eq!(label.as_str().parse::<MoodLabel>().unwrap(), label);
        }
    }

    #[test]
    fn test_serde_uses_label_name() {
        let json = serde_json::to_string(&MoodLabel::Workout).unwrap();
        assert_eq!(json, "\"Workout\"");

        let parsed: MoodLabel = serde_json::from_str("\"happy\"").unwrap();
        assert_eq!(parsed, MoodLabel::Happy);

        assert!(serde_json::from_str::<MoodLabel>("\"grumpy\"").is_err());
    }

    #[test]
    fn test_keywords_of_default_is_empty() {
        assert!(MoodLabel::Default.keywords().is_empty());
        assert!(MoodLabel::Focus.keywords().contains(&"deep work"));
    }
}
