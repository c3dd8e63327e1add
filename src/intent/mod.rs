//! Intent corpus types, loading, and response selection.
//!
//! An [`Intent`] is a named cluster of semantically equivalent user phrasings
//! (patterns) mapped to a pool of acceptable responses. Intents are loaded
//! once from a JSON document at startup and validated into strongly-typed
//! structures; matching operations only ever read them.

mod corpus;
mod response;

// Public exports
pub use corpus::{Corpus, CorpusEntry, Intent, load_intents, validate_intents};
pub use response::{
    FirstResponseSelector, RandomResponseSelector, ResponseSelector, SeededResponseSelector,
};
