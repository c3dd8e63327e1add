//! TF-IDF vectorizer for text feature extraction.

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// TF-IDF vectorizer for text feature extraction.
///
/// The vocabulary and IDF weights are fitted once over the corpus pattern
/// texts and are immutable afterward; `transform` is a stateless projection
/// into the fitted space.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> column index mapping.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        TfIdfVectorizer {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on the given documents.
    ///
    /// Vocabulary indices follow first-occurrence order across the documents,
    /// so fitting is deterministic for a fixed corpus.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        self.n_documents = documents.len();
        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        // Build vocabulary and count document frequencies
        for document in documents {
            let tokens = self.tokenize(document)?;
            let mut seen_in_document: AHashSet<&String> = AHashSet::new();

            for token in &tokens {
                if !seen_in_document.insert(token) {
                    continue;
                }
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
                if !vocabulary.contains_key(token) {
                    let index = vocabulary.len();
                    vocabulary.insert(token.clone(), index);
                }
            }
        }

        // Calculate IDF for each term
        // IDF = log((N + 1) / (df + 1)) + 1
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[index] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        debug!(
            "fitted tf-idf vocabulary of {} terms over {} documents",
            self.vocabulary.len(),
            self.n_documents
        );

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Terms absent from the fitted vocabulary contribute zero weight; a
    /// document with no known terms yields the all-zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = self.tokenize(document)?;
        let mut weights = vec![0.0; self.vocabulary.len()];

        // Count term frequencies
        for token in &tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                weights[index] += 1.0;
            }
        }

        // Normalize by document length
        let document_length = tokens.len() as f64;
        if document_length > 0.0 {
            for weight in &mut weights {
                *weight /= document_length;
            }
        }

        // Apply IDF
        for (index, weight) in weights.iter_mut().enumerate() {
            *weight *= self.idf[index];
        }

        Ok(weights)
    }

    /// Tokenize a document using the configured analyzer.
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens: Vec<String> = self.analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
