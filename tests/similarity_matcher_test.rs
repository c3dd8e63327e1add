//! Integration tests for the similarity matcher.

use std::sync::Arc;

use banter::analysis::StandardAnalyzer;
use banter::error::BanterError;
use banter::intent::{Corpus, FirstResponseSelector, Intent};
use banter::matcher::{
    LOW_CONFIDENCE_NOTE, Matcher, OUT_OF_SCOPE_TAG, REJECT_RESPONSE, SimilarityMatcher,
};

fn faq_intents() -> Vec<Intent> {
    vec![
        Intent {
            tag: "delivery_time".to_string(),
            patterns: vec!["how long is delivery".to_string()],
            responses: vec!["Delivery usually takes 30 to 45 minutes.".to_string()],
        },
        Intent {
            tag: "refund_policy".to_string(),
            patterns: vec!["what is the refund policy".to_string()],
            responses: vec!["Refunds are processed within 5 business days.".to_string()],
        },
    ]
}

fn matcher() -> SimilarityMatcher {
    let corpus = Corpus::from_intents(&faq_intents(), &FirstResponseSelector);
    SimilarityMatcher::new(corpus, Arc::new(StandardAnalyzer::new())).unwrap()
}

#[test]
fn similar_query_matches_nearest_pattern() {
    let result = matcher().match_query("how long will delivery take").unwrap();

    assert_eq!(result.tag.as_deref(), Some("delivery_time"));
    let confidence = result.confidence.unwrap();
    assert!(confidence > 0.3, "confidence was {confidence}");
}

#[test]
fn verbatim_pattern_query_has_full_confidence() {
    let result = matcher().match_query("what is the refund policy").unwrap();

    assert_eq!(result.tag.as_deref(), Some("refund_policy"));
    let confidence = result.confidence.unwrap();
    assert!((confidence - 1.0).abs() < 1e-9, "confidence was {confidence}");
    // High band: the bound response is returned unmodified
    assert_eq!(result.text, "Refunds are processed within 5 business days.");
}

#[test]
fn partial_overlap_lands_in_low_confidence_band() {
    // Tokens "delivery" and "refund" split evenly across the two patterns:
    // cosine = 1/sqrt(6) ~= 0.41 against both, so the tie breaks to the
    // first pattern and the response carries the low-confidence note.
    let result = matcher().match_query("delivery refund").unwrap();

    let confidence = result.confidence.unwrap();
    assert!(confidence > 0.3 && confidence <= 0.5, "confidence was {confidence}");
    assert_eq!(result.tag.as_deref(), Some("delivery_time"));
    assert!(result.text.ends_with(LOW_CONFIDENCE_NOTE));
}

#[test]
fn unknown_vocabulary_query_is_rejected() {
    let result = matcher().match_query("asdf qwerty").unwrap();

    assert_eq!(result.confidence, Some(0.0));
    assert_eq!(result.tag.as_deref(), Some(OUT_OF_SCOPE_TAG));
    assert_eq!(result.text, REJECT_RESPONSE);
}

#[test]
fn empty_query_is_rejected() {
    let result = matcher().match_query("").unwrap();

    assert_eq!(result.confidence, Some(0.0));
    assert_eq!(result.tag.as_deref(), Some(OUT_OF_SCOPE_TAG));
}

#[test]
fn confidence_stays_within_unit_interval() {
    let matcher = matcher();
    let queries = [
        "how long is delivery",
        "refund",
        "delivery refund",
        "completely unrelated text",
        "",
    ];

    for query in queries {
        let confidence = matcher.match_query(query).unwrap().confidence.unwrap();
        assert!(
            (0.0..=1.0).contains(&confidence),
            "confidence {confidence} out of range for query {query:?}"
        );
    }
}

#[test]
fn repeated_queries_are_deterministic() {
    let matcher = matcher();

    let first = matcher.match_query("how long will delivery take").unwrap();
    for _ in 0..5 {
        let again = matcher.match_query("how long will delivery take").unwrap();
        assert_eq!(again.tag, first.tag);
        assert_eq!(again.confidence, first.confidence);
        // Responses are bound at corpus build time, so the text is stable too
        assert_eq!(again.text, first.text);
    }
}

#[test]
fn response_binding_is_fixed_per_run() {
    // Even with a multi-response intent, the similarity matcher returns the
    // text bound when the corpus was flattened.
    let intents = vec![Intent {
        tag: "greeting".to_string(),
        patterns: vec!["hello there".to_string()],
        responses: vec!["Hi!".to_string(), "Hello!".to_string(), "Hey!".to_string()],
    }];
    let corpus = Corpus::from_intents(&intents, &FirstResponseSelector);
    let matcher = SimilarityMatcher::new(corpus, Arc::new(StandardAnalyzer::new())).unwrap();

    for _ in 0..10 {
        let result = matcher.match_query("hello there").unwrap();
        assert_eq!(result.text, "Hi!");
    }
}

#[test]
fn empty_corpus_fails_construction() {
    let err =
        SimilarityMatcher::new(Corpus::default(), Arc::new(StandardAnalyzer::new())).unwrap_err();
    assert!(matches!(err, BanterError::EmptyCorpus));
}
