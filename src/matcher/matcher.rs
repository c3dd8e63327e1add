//! Matcher trait definition.

use crate::error::Result;
use crate::matcher::types::MatchResult;

/// Intent matcher trait.
///
/// Implementations of this trait map a free-text query to the closest known
/// intent pattern and produce the response to display.
pub trait Matcher: Send + Sync {
    /// Match a query against the known patterns.
    ///
    /// # Arguments
    /// * `query` - The raw user input
    ///
    /// # Returns
    /// The [`MatchResult`] holding the response text, the matched intent tag
    /// (if any), and the confidence score (if the strategy produces one).
    fn match_query(&self, query: &str) -> Result<MatchResult>;

    /// Get the name of this matcher for debugging and logging.
    fn name(&self) -> &str;
}
