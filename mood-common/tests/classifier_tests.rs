//! Classification behavior over realistic utterances

use mood_common::classifier::{MoodClassifier, BUILTIN_TABLE};
use mood_common::{classify, MoodLabel};

#[test]
fn test_sad_and_blue() {
    assert_eq!(classify("I feel so sad and blue today"), MoodLabel::Sad);
}

#[test]
fn test_workout_at_the_gym() {
    assert_eq!(classify("time to workout at the gym"), MoodLabel::Workout);
}

#[test]
fn test_no_keyword_is_default() {
    assert_eq!(classify("just sitting here"), MoodLabel::Default);
    assert_eq!(classify("   "), MoodLabel::Default);
    assert_eq!(classify("🎵🎶"), MoodLabel::Default);
}

#[test]
fn test_each_category_reachable() {
    let cases = [
        ("I'm really unhappy", MoodLabel::Sad),
        ("feeling JOYFUL!", MoodLabel::Happy),
        ("so frustrated with work", MoodLabel::Angry),
        ("a peaceful evening", MoodLabel::Chill),
        ("need to concentrate", MoodLabel::Focus),
        ("I'm tired", MoodLabel::Sleep),
        ("valentine's day", MoodLabel::Romantic),
        ("driving to the coast", MoodLabel::Roadtrip),
        ("big celebration tonight", MoodLabel::Party),
        ("pump up the volume", MoodLabel::Workout),
    ];

    for (text, expected) in cases {
        assert_eq!(classify(text), expected, "input: {:?}", text);
    }
}

#[test]
fn test_multi_word_keywords() {
    assert_eq!(classify("time for deep work"), MoodLabel::Focus);
    assert_eq!(classify("a LONG RIDE home"), MoodLabel::Roadtrip);
    assert_eq!(classify("girls night out"), MoodLabel::Party);
}

#[test]
fn test_table_order_tie_break() {
    // Keywords from Happy and Party: Happy comes first
    assert_eq!(classify("happy party people"), MoodLabel::Happy);
    // Keywords from Focus and Roadtrip: Focus comes first
    assert_eq!(classify("study while I travel"), MoodLabel::Focus);
    // Input order does not matter, table order does
    assert_eq!(classify("gym then love songs"), MoodLabel::Romantic);
}

#[test]
fn test_repeated_classification_is_stable() {
    let classifier = MoodClassifier::default();
    let text = "Calm and quiet";
    let first = classifier.classify(text);
    let second = classifier.classify(text);
    assert_eq!(first, MoodLabel::Chill);
    assert_eq!(first, second);
}

#[test]
fn test_default_classifier_uses_builtin_table() {
    assert_eq!(MoodClassifier::default().table().len(), BUILTIN_TABLE.len());
}
