//! Similarity-based intent matcher using TF-IDF and cosine similarity.

use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::error::{BanterError, Result};
use crate::intent::{Corpus, CorpusEntry};
use crate::matcher::matcher::Matcher;
use crate::matcher::tfidf::TfIdfVectorizer;
use crate::matcher::types::{
    ConfidenceBand, LOW_CONFIDENCE_NOTE, MatchResult, OUT_OF_SCOPE_TAG, REJECT_RESPONSE,
};

/// Similarity-based intent matcher.
///
/// Fits a TF-IDF vectorizer once over the corpus pattern texts, then answers
/// each query with the response bound to the most similar pattern, classified
/// into one of three confidence bands. The fitted model and pattern vectors
/// are immutable, so matching is a pure read that can be shared across
/// sessions.
pub struct SimilarityMatcher {
    vectorizer: TfIdfVectorizer,
    entries: Vec<CorpusEntry>,
    pattern_vectors: Vec<Vec<f64>>,
}

impl std::fmt::Debug for SimilarityMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityMatcher")
            .field("entries", &self.entries.len())
            .field("vectorizer", &self.vectorizer)
            .finish()
    }
}

impl SimilarityMatcher {
    /// Build a similarity matcher from a flattened corpus.
    ///
    /// Fails with [`BanterError::EmptyCorpus`] if the corpus has no entries.
    pub fn new(corpus: Corpus, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        if corpus.is_empty() {
            return Err(BanterError::EmptyCorpus);
        }

        let documents = corpus.pattern_texts();
        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&documents)?;

        let mut pattern_vectors = Vec::with_capacity(documents.len());
        for document in &documents {
            pattern_vectors.push(vectorizer.transform(document)?);
        }

        debug!(
            "similarity matcher ready: {} patterns, {} vocabulary terms",
            pattern_vectors.len(),
            vectorizer.vocabulary_size()
        );

        Ok(SimilarityMatcher {
            vectorizer,
            entries: corpus.into_entries(),
            pattern_vectors,
        })
    }

    /// Calculate cosine similarity between two vectors.
    ///
    /// A zero-magnitude operand yields 0.0 rather than NaN. Weights are
    /// non-negative, so the result lies in [0, 1].
    fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
        let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

        if magnitude_a == 0.0 || magnitude_b == 0.0 {
            0.0
        } else {
            // Guard against floating point drift past 1.0 for identical vectors
            (dot_product / (magnitude_a * magnitude_b)).min(1.0)
        }
    }
}

impl Matcher for SimilarityMatcher {
    fn match_query(&self, query: &str) -> Result<MatchResult> {
        let query_vector = self.vectorizer.transform(query)?;

        // Arg-max over cosine similarities; ties break to the first index
        let mut best = 0;
        let mut confidence = 0.0;
        for (index, pattern_vector) in self.pattern_vectors.iter().enumerate() {
            let similarity = Self::cosine_similarity(&query_vector, pattern_vector);
            if index == 0 || similarity > confidence {
                best = index;
                confidence = similarity;
            }
        }

        let entry = &self.entries[best];
        let result = match ConfidenceBand::classify(confidence) {
            ConfidenceBand::High => MatchResult {
                text: entry.response.clone(),
                tag: Some(entry.tag.clone()),
                confidence: Some(confidence),
            },
            ConfidenceBand::Low => MatchResult {
                text: format!("{}{}", entry.response, LOW_CONFIDENCE_NOTE),
                tag: Some(entry.tag.clone()),
                confidence: Some(confidence),
            },
            ConfidenceBand::Reject => MatchResult {
                text: REJECT_RESPONSE.to_string(),
                tag: Some(OUT_OF_SCOPE_TAG.to_string()),
                confidence: Some(confidence),
            },
        };

        Ok(result)
    }

    fn name(&self) -> &str {
        "similarity"
    }
}
