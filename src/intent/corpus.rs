//! Intent corpus loading and flattening.

use std::collections::HashSet;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{BanterError, Result};
use crate::intent::response::ResponseSelector;

/// A named cluster of user phrasings mapped to a pool of responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// Unique intent identifier.
    pub tag: String,
    /// Example phrases belonging to this intent, in load order.
    pub patterns: Vec<String>,
    /// Candidate reply strings, in load order.
    pub responses: Vec<String>,
}

/// On-disk corpus document shape: `{"intents": [...]}`.
#[derive(Debug, Deserialize)]
struct IntentDocument {
    intents: Vec<Intent>,
}

/// Load intents from a JSON corpus document.
///
/// Fails fast with a corpus error if the document is missing, malformed, or
/// contains an invalid intent. The returned intents preserve document order.
pub fn load_intents<P: AsRef<Path>>(path: P) -> Result<Vec<Intent>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        BanterError::corpus(format!("failed to read corpus file {}: {e}", path.display()))
    })?;
    let document: IntentDocument = serde_json::from_str(&content)
        .map_err(|e| BanterError::corpus(format!("malformed corpus document: {e}")))?;

    validate_intents(&document.intents)?;

    info!(
        "loaded {} intents from {}",
        document.intents.len(),
        path.display()
    );

    Ok(document.intents)
}

/// Validate a set of intents.
///
/// Rejects an empty intent list, blank or duplicate tags, intents with zero
/// patterns or zero responses, and blank pattern/response strings.
pub fn validate_intents(intents: &[Intent]) -> Result<()> {
    if intents.is_empty() {
        return Err(BanterError::corpus("corpus document contains no intents"));
    }

    let mut seen_tags = HashSet::new();
    for intent in intents {
        if intent.tag.trim().is_empty() {
            return Err(BanterError::corpus("intent with blank tag"));
        }
        if !seen_tags.insert(intent.tag.as_str()) {
            return Err(BanterError::corpus(format!(
                "duplicate intent tag `{}`",
                intent.tag
            )));
        }
        if intent.patterns.is_empty() {
            return Err(BanterError::corpus(format!(
                "intent `{}` has no patterns",
                intent.tag
            )));
        }
        if intent.responses.is_empty() {
            return Err(BanterError::corpus(format!(
                "intent `{}` has no responses",
                intent.tag
            )));
        }
        if intent.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(BanterError::corpus(format!(
                "intent `{}` has a blank pattern",
                intent.tag
            )));
        }
        if intent.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(BanterError::corpus(format!(
                "intent `{}` has a blank response",
                intent.tag
            )));
        }
    }

    Ok(())
}

/// One flattened corpus entry: a pattern, the response bound to it, and the
/// tag of the intent it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Pattern text.
    pub pattern: String,
    /// Response text bound to this pattern at corpus build time.
    pub response: String,
    /// Tag of the owning intent.
    pub tag: String,
}

/// Flattened view of all intents, one entry per (intent, pattern).
///
/// The response for each entry is drawn ONCE from the owning intent's pool
/// when the corpus is built, so repeated queries hitting the same pattern
/// return identical text within one process run. Immutable after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Build a flattened corpus from intents, binding one response per
    /// pattern via the given selector.
    pub fn from_intents(intents: &[Intent], selector: &dyn ResponseSelector) -> Self {
        let mut entries = Vec::new();
        for intent in intents {
            for pattern in &intent.patterns {
                entries.push(CorpusEntry {
                    pattern: pattern.clone(),
                    response: selector.select(&intent.responses).to_string(),
                    tag: intent.tag.clone(),
                });
            }
        }
        Corpus { entries }
    }

    /// Get the corpus entries in build order.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Consume the corpus, returning its entries.
    pub fn into_entries(self) -> Vec<CorpusEntry> {
        self.entries
    }

    /// Number of entries in the corpus.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the corpus has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect the pattern texts in entry order.
    pub fn pattern_texts(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.pattern.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::response::FirstResponseSelector;

    fn greeting_intent() -> Intent {
        Intent {
            tag: "greeting".to_string(),
            patterns: vec!["hello".to_string(), "hi".to_string()],
            responses: vec!["Hi there!".to_string(), "Hello!".to_string()],
        }
    }

    #[test]
    fn test_validate_intents_ok() {
        assert!(validate_intents(&[greeting_intent()]).is_ok());
    }

    #[test]
    fn test_validate_intents_empty_list() {
        let err = validate_intents(&[]).unwrap_err();
        assert!(matches!(err, BanterError::Corpus(_)));
    }

    #[test]
    fn test_validate_intents_no_patterns() {
        let mut intent = greeting_intent();
        intent.patterns.clear();
        let err = validate_intents(&[intent]).unwrap_err();
        assert!(matches!(err, BanterError::Corpus(_)));
    }

    #[test]
    fn test_validate_intents_no_responses() {
        let mut intent = greeting_intent();
        intent.responses.clear();
        let err = validate_intents(&[intent]).unwrap_err();
        assert!(matches!(err, BanterError::Corpus(_)));
    }

    #[test]
    fn test_validate_intents_duplicate_tag() {
        let err = validate_intents(&[greeting_intent(), greeting_intent()]).unwrap_err();
        assert!(matches!(err, BanterError::Corpus(_)));
    }

    #[test]
    fn test_validate_intents_blank_pattern() {
        let mut intent = greeting_intent();
        intent.patterns.push("   ".to_string());
        let err = validate_intents(&[intent]).unwrap_err();
        assert!(matches!(err, BanterError::Corpus(_)));
    }

    #[test]
    fn test_corpus_flattening() {
        let intents = vec![
            greeting_intent(),
            Intent {
                tag: "refund".to_string(),
                patterns: vec!["refund policy".to_string()],
                responses: vec!["Refunds take 5 days.".to_string()],
            },
        ];

        let corpus = Corpus::from_intents(&intents, &FirstResponseSelector);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.entries()[0].pattern, "hello");
        assert_eq!(corpus.entries()[0].tag, "greeting");
        assert_eq!(corpus.entries()[1].pattern, "hi");
        assert_eq!(corpus.entries()[2].pattern, "refund policy");
        assert_eq!(corpus.entries()[2].tag, "refund");
    }

    #[test]
    fn test_corpus_binds_response_at_build_time() {
        let corpus = Corpus::from_intents(&[greeting_intent()], &FirstResponseSelector);

        for entry in corpus.entries() {
            assert_eq!(entry.response, "Hi there!");
        }
    }

    #[test]
    fn test_corpus_pattern_texts() {
        let corpus = Corpus::from_intents(&[greeting_intent()], &FirstResponseSelector);
        assert_eq!(corpus.pattern_texts(), vec!["hello", "hi"]);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert_eq!(corpus.len(), 0);
    }
}
