//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Punctuation is kept attached to the surrounding word, which makes this
/// tokenizer a poor fit for free-text queries but useful when the input is
/// already normalized.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        for (position, word) in text.split_whitespace().enumerate() {
            // Words come back in order, so resume the offset search from the
            // end of the previous word.
            let start_offset = text[cursor..]
                .find(word)
                .map(|offset| cursor + offset)
                .unwrap_or(cursor);
            let end_offset = start_offset + word.len();
            tokens.push(Token::with_offsets(word, position, start_offset, end_offset));
            cursor = end_offset;
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
