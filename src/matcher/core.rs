//! Helper functions for creating intent matchers.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::intent::{Corpus, Intent, ResponseSelector};
use crate::matcher::keyword::KeywordMatcher;
use crate::matcher::matcher::Matcher;
use crate::matcher::similarity::SimilarityMatcher;

/// Create a new keyword-based intent matcher.
pub fn new_keyword(intents: &[Intent], selector: Arc<dyn ResponseSelector>) -> Box<dyn Matcher> {
    Box::new(KeywordMatcher::new(intents, selector))
}

/// Create a new similarity-based intent matcher.
///
/// Flattens the intents into a corpus (binding one response per pattern via
/// the selector), then fits a TF-IDF model over the pattern texts.
pub fn new_similarity(
    intents: &[Intent],
    selector: &dyn ResponseSelector,
    analyzer: Arc<dyn Analyzer>,
) -> Result<Box<dyn Matcher>> {
    let corpus = Corpus::from_intents(intents, selector);
    Ok(Box::new(SimilarityMatcher::new(corpus, analyzer)?))
}
