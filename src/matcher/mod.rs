//! Intent matchers that map free-text queries to the closest known pattern.
//!
//! Two matching strategies are available:
//! - Keyword-based matching: case-insensitive substring containment
//! - Similarity-based matching: TF-IDF vectorization with cosine similarity
//!   and confidence bands
//!
//! # Architecture
//!
//! - `Matcher` trait: Common interface for all matchers
//! - `KeywordMatcher`: Substring containment implementation
//! - `SimilarityMatcher`: TF-IDF implementation with confidence bands
//! - `TfIdfVectorizer`: Feature extraction using TF-IDF
//! - `MatchResult`: The response, optional tag, and optional confidence
//!
//! # Example
//!
//! ```rust,no_run
//! use banter::analysis::StandardAnalyzer;
//! use banter::intent::{RandomResponseSelector, load_intents};
//! use banter::matcher::{Matcher, new_similarity};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let intents = load_intents("faq.json")?;
//! let selector = RandomResponseSelector::new();
//! let analyzer = Arc::new(StandardAnalyzer::new());
//! let matcher = new_similarity(&intents, &selector, analyzer)?;
//!
//! let result = matcher.match_query("how long does delivery take")?;
//! println!("{}", result.text);
//! # Ok(())
//! # }
//! ```

mod core;
mod keyword;
mod matcher;
mod similarity;
mod tfidf;
mod types;

// Public exports
pub use self::core::{new_keyword, new_similarity};
pub use keyword::KeywordMatcher;
pub use matcher::Matcher;
pub use similarity::SimilarityMatcher;
pub use tfidf::TfIdfVectorizer;
pub use types::{
    ConfidenceBand, FALLBACK_RESPONSE, HIGH_CONFIDENCE_THRESHOLD, LOW_CONFIDENCE_NOTE,
    LOW_CONFIDENCE_THRESHOLD, MatchResult, OUT_OF_SCOPE_TAG, REJECT_RESPONSE,
};
