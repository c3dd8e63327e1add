//! Remove empty filter implementation.
//!
//! This module provides a filter that removes empty tokens and stopped tokens
//! from the stream, cleaning up the token flow at the end of a pipeline.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes empty and stopped tokens from the stream.
///
/// Typically used near the end of an analysis pipeline to clean up tokens
/// that have been emptied or stopped by previous filters.
///
/// # Examples
///
/// ```
/// use banter::analysis::token_filter::Filter;
/// use banter::analysis::token_filter::remove_empty::RemoveEmptyFilter;
/// use banter::analysis::token::Token;
///
/// let filter = RemoveEmptyFilter::new();
/// let tokens = vec![
///     Token::new("valid", 0),
///     Token::new("", 1),
///     Token::new("stopped", 2).stop(),
///     Token::new("kept", 3),
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result[0].text, "valid");
/// assert_eq!(result[1].text, "kept");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<Token> = tokens
            .filter(|token| !token.is_empty() && !token.is_stopped())
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
