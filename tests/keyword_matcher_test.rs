//! Integration tests for the keyword matcher.

use std::sync::Arc;

use banter::intent::{FirstResponseSelector, Intent, SeededResponseSelector};
use banter::matcher::{FALLBACK_RESPONSE, KeywordMatcher, Matcher, new_keyword};

fn greeting_intents() -> Vec<Intent> {
    vec![
        Intent {
            tag: "greeting".to_string(),
            patterns: vec!["hello".to_string(), "hi".to_string()],
            responses: vec!["Hi there!".to_string()],
        },
        Intent {
            tag: "refund".to_string(),
            patterns: vec!["refund".to_string()],
            responses: vec![
                "Refunds take 5 business days.".to_string(),
                "You will be refunded within 5 business days.".to_string(),
            ],
        },
    ]
}

#[test]
fn keyword_matches_stored_pattern() {
    let matcher = KeywordMatcher::new(&greeting_intents(), Arc::new(FirstResponseSelector));

    let result = matcher.match_query("hello").unwrap();
    assert_eq!(result.text, "Hi there!");
    assert_eq!(result.tag.as_deref(), Some("greeting"));
    assert_eq!(result.confidence, None);
}

#[test]
fn keyword_matching_is_case_insensitive() {
    let matcher = KeywordMatcher::new(&greeting_intents(), Arc::new(FirstResponseSelector));

    let result = matcher.match_query("I want a REFUND please").unwrap();
    assert_eq!(result.tag.as_deref(), Some("refund"));
}

#[test]
fn keyword_pattern_must_be_substring_of_query() {
    let matcher = KeywordMatcher::new(&greeting_intents(), Arc::new(FirstResponseSelector));

    // The query is a substring of a pattern, not the other way around
    let result = matcher.match_query("refu").unwrap();
    assert_eq!(result.text, FALLBACK_RESPONSE);
}

#[test]
fn keyword_unknown_query_falls_back() {
    let matcher = KeywordMatcher::new(&greeting_intents(), Arc::new(FirstResponseSelector));

    let result = matcher.match_query("xyz123").unwrap();
    assert_eq!(result.text, FALLBACK_RESPONSE);
    assert_eq!(result.tag, None);
}

#[test]
fn keyword_empty_query_falls_back() {
    let matcher = KeywordMatcher::new(&greeting_intents(), Arc::new(FirstResponseSelector));

    let result = matcher.match_query("").unwrap();
    assert_eq!(result.text, FALLBACK_RESPONSE);
}

#[test]
fn keyword_scans_intents_in_load_order() {
    let matcher = KeywordMatcher::new(&greeting_intents(), Arc::new(FirstResponseSelector));

    // Both "hi" and "refund" occur; "greeting" is declared first
    let result = matcher.match_query("hi, where is my refund").unwrap();
    assert_eq!(result.tag.as_deref(), Some("greeting"));
}

#[test]
fn keyword_response_draw_is_reproducible_with_seed() {
    let intents = greeting_intents();
    let matcher_a = new_keyword(&intents, Arc::new(SeededResponseSelector::new(99)));
    let matcher_b = new_keyword(&intents, Arc::new(SeededResponseSelector::new(99)));

    for _ in 0..5 {
        let a = matcher_a.match_query("refund").unwrap();
        let b = matcher_b.match_query("refund").unwrap();
        assert_eq!(a.text, b.text);
    }
}

#[test]
fn keyword_responses_come_from_matched_pool() {
    let intents = greeting_intents();
    let matcher = new_keyword(&intents, Arc::new(SeededResponseSelector::new(3)));

    for _ in 0..10 {
        let result = matcher.match_query("refund").unwrap();
        assert!(intents[1].responses.contains(&result.text));
    }
}
