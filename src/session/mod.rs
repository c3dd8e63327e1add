//! Per-session mutable state.
//!
//! The corpus and fitted matcher are shared immutable state; everything a
//! session mutates lives in an explicit state bundle owned by that session
//! and never shared across sessions, so no synchronization is needed.

pub mod cart;

pub use cart::{Cart, Menu, MenuItem, PaymentMethod, Receipt};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matcher::{MatchResult, Matcher};

/// Who said a line in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// The human user.
    User,
    /// The bot.
    Bot,
}

/// One user session's conversation history.
///
/// Append-only; dropped with the session, never persisted.
#[derive(Debug, Default)]
pub struct ChatSession {
    history: Vec<(Speaker, String)>,
}

impl ChatSession {
    /// Create a new empty session.
    pub fn new() -> Self {
        ChatSession::default()
    }

    /// Run one interaction: match the input and record both sides of the
    /// exchange in the history.
    pub fn post(&mut self, matcher: &dyn Matcher, input: &str) -> Result<MatchResult> {
        let result = matcher.match_query(input)?;
        self.history.push((Speaker::User, input.to_string()));
        self.history.push((Speaker::Bot, result.text.clone()));
        Ok(result)
    }

    /// Get the conversation history, oldest first.
    pub fn history(&self) -> &[(Speaker, String)] {
        &self.history
    }

    /// Number of recorded lines (user and bot).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if no lines have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::intent::{FirstResponseSelector, Intent};
    use crate::matcher::KeywordMatcher;

    fn matcher() -> KeywordMatcher {
        let intents = vec![Intent {
            tag: "greeting".to_string(),
            patterns: vec!["hello".to_string()],
            responses: vec!["Hi there!".to_string()],
        }];
        KeywordMatcher::new(&intents, Arc::new(FirstResponseSelector))
    }

    #[test]
    fn test_session_records_both_sides() {
        let matcher = matcher();
        let mut session = ChatSession::new();

        let result = session.post(&matcher, "hello").unwrap();
        assert_eq!(result.text, "Hi there!");

        assert_eq!(session.len(), 2);
        assert_eq!(session.history()[0], (Speaker::User, "hello".to_string()));
        assert_eq!(session.history()[1], (Speaker::Bot, "Hi there!".to_string()));
    }

    #[test]
    fn test_session_history_appends() {
        let matcher = matcher();
        let mut session = ChatSession::new();

        session.post(&matcher, "hello").unwrap();
        session.post(&matcher, "hello again").unwrap();

        assert_eq!(session.len(), 4);
        assert_eq!(session.history()[2].0, Speaker::User);
    }

    #[test]
    fn test_session_starts_empty() {
        assert!(ChatSession::new().is_empty());
    }
}
