//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't help distinguish one intent pattern from another. Ships
//! with a default English stop word list and supports custom word lists.
//!
//! # Examples
//!
//! ```
//! use banter::analysis::token_filter::Filter;
//! use banter::analysis::token_filter::stop::StopFilter;
//! use banter::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("refund", 1),
//!     Token::new("policy", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "the" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "refund");
//! assert_eq!(result[1].text, "policy");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out before vectorization.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// The filter can either remove stop words entirely (the default) or mark
/// them as stopped while keeping them in the stream.
///
/// # Examples
///
/// ## Custom Stop Words
///
/// ```
/// use banter::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["please", "kindly"]);
/// assert!(filter.is_stop_word("please"));
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(Arc::new(DEFAULT_ENGLISH_STOP_WORDS_SET.clone()))
    }

    /// Create a stop filter with a shared stop word set.
    pub fn with_stop_words(stop_words: Arc<HashSet<String>>) -> Self {
        StopFilter {
            stop_words,
            remove_stopped: true,
        }
    }

    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words: HashSet<String> = words.into_iter().map(|w| w.into()).collect();
        Self::with_stop_words(Arc::new(stop_words))
    }

    /// Set whether stopped tokens are removed from the stream or only marked.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check whether a word is in this filter's stop word set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        if self.remove_stopped {
            let stop_words = Arc::clone(&self.stop_words);
            let filtered: Vec<Token> = tokens
                .filter(|token| !stop_words.contains(&token.text))
                .collect();
            Ok(Box::new(filtered.into_iter()))
        } else {
            let stop_words = Arc::clone(&self.stop_words);
            let marked: Vec<Token> = tokens
                .map(|token| {
                    if stop_words.contains(&token.text) {
                        token.stop()
                    } else {
                        token
                    }
                })
                .collect();
            Ok(Box::new(marked.into_iter()))
        }
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
