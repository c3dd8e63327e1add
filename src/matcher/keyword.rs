//! Keyword-based intent matcher.

use std::sync::Arc;

use crate::error::Result;
use crate::intent::{Intent, ResponseSelector};
use crate::matcher::matcher::Matcher;
use crate::matcher::types::{FALLBACK_RESPONSE, MatchResult};

/// One intent prepared for keyword matching.
#[derive(Debug, Clone)]
struct KeywordIntent {
    tag: String,
    /// Pattern texts lowercased once at construction, in load order.
    patterns: Vec<String>,
    responses: Vec<String>,
}

/// Keyword-based intent matcher.
///
/// Scans intents in load order and returns a response from the first intent
/// with a pattern that is a case-insensitive substring of the query. The
/// response is drawn from the intent's pool per query via the injected
/// selector. Queries that match nothing get a fixed fallback response; this
/// matcher never errors.
pub struct KeywordMatcher {
    intents: Vec<KeywordIntent>,
    selector: Arc<dyn ResponseSelector>,
}

impl std::fmt::Debug for KeywordMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordMatcher")
            .field("intents", &self.intents.len())
            .field("selector", &self.selector.name())
            .finish()
    }
}

impl KeywordMatcher {
    /// Create a new keyword matcher over the given intents.
    pub fn new(intents: &[Intent], selector: Arc<dyn ResponseSelector>) -> Self {
        let intents = intents
            .iter()
            .map(|intent| KeywordIntent {
                tag: intent.tag.clone(),
                patterns: intent.patterns.iter().map(|p| p.to_lowercase()).collect(),
                responses: intent.responses.clone(),
            })
            .collect();

        KeywordMatcher { intents, selector }
    }
}

impl Matcher for KeywordMatcher {
    fn match_query(&self, query: &str) -> Result<MatchResult> {
        let normalized = query.to_lowercase();

        for intent in &self.intents {
            for pattern in &intent.patterns {
                if normalized.contains(pattern.as_str()) {
                    return Ok(MatchResult {
                        text: self.selector.select(&intent.responses).to_string(),
                        tag: Some(intent.tag.clone()),
                        confidence: None,
                    });
                }
            }
        }

        Ok(MatchResult {
            text: FALLBACK_RESPONSE.to_string(),
            tag: None,
            confidence: None,
        })
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
