//! Response selection strategies.
//!
//! Randomized response selection is represented as an injected trait object
//! so tests can supply a deterministic stub instead of relying on
//! uncontrolled randomness.

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Strategy for choosing one response out of an intent's response pool.
pub trait ResponseSelector: Send + Sync {
    /// Select a response from the pool.
    ///
    /// Pools are validated to be non-empty at corpus load; an empty pool
    /// yields the empty string rather than a panic.
    fn select<'a>(&self, responses: &'a [String]) -> &'a str;

    /// Get the name of this selector (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Selects a response uniformly at random using the thread-local RNG.
#[derive(Clone, Debug, Default)]
pub struct RandomResponseSelector;

impl RandomResponseSelector {
    /// Create a new random response selector.
    pub fn new() -> Self {
        RandomResponseSelector
    }
}

impl ResponseSelector for RandomResponseSelector {
    fn select<'a>(&self, responses: &'a [String]) -> &'a str {
        responses
            .choose(&mut rand::rng())
            .map(String::as_str)
            .unwrap_or("")
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Selects responses uniformly at random from a seeded RNG, so a whole run
/// is reproducible given the same seed and call sequence.
#[derive(Debug)]
pub struct SeededResponseSelector {
    rng: Mutex<StdRng>,
}

impl SeededResponseSelector {
    /// Create a new selector seeded with the given value.
    pub fn new(seed: u64) -> Self {
        SeededResponseSelector {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ResponseSelector for SeededResponseSelector {
    fn select<'a>(&self, responses: &'a [String]) -> &'a str {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        responses
            .choose(&mut *rng)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

/// Always selects the first response. Intended for tests.
#[derive(Clone, Debug, Default)]
pub struct FirstResponseSelector;

impl ResponseSelector for FirstResponseSelector {
    fn select<'a>(&self, responses: &'a [String]) -> &'a str {
        responses.first().map(String::as_str).unwrap_or("")
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ]
    }

    #[test]
    fn test_first_selector() {
        let selector = FirstResponseSelector;
        assert_eq!(selector.select(&pool()), "first");
        assert_eq!(selector.name(), "first");
    }

    #[test]
    fn test_random_selector_in_pool() {
        let selector = RandomResponseSelector::new();
        let pool = pool();
        for _ in 0..20 {
            let chosen = selector.select(&pool);
            assert!(pool.iter().any(|r| r == chosen));
        }
    }

    #[test]
    fn test_seeded_selector_reproducible() {
        let pool = pool();
        let a = SeededResponseSelector::new(42);
        let b = SeededResponseSelector::new(42);

        let draws_a: Vec<&str> = (0..10).map(|_| a.select(&pool)).collect();
        let draws_b: Vec<&str> = (0..10).map(|_| b.select(&pool)).collect();

        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_empty_pool_yields_empty_string() {
        let selector = FirstResponseSelector;
        assert_eq!(selector.select(&[]), "");
    }
}
