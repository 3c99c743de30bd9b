//! Identifier generators for new quotes.
//!
//! - `SequentialIds` — a monotonically increasing counter (`"1"`, `"2"`, ...).
//! - `RandomIds` — 128-bit random tokens rendered as 32 hex characters.
//!
//! Generators do not track what they issued. `QuoteService` keeps the set of every id
//! it has held and draws again on a repeat, so uniqueness holds across deletes and
//! seeded records.
//!
//! `IdStrategy` is the CLI-facing selector that builds one of the above.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Source of fresh quote ids.
pub trait IdGenerator: Send {
    /// Produce the next candidate id.
    fn next_id(&mut self) -> String;
}

/// Monotonic decimal counter.
#[derive(Debug)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Counter starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counter starting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// Random 128-bit hex tokens.
#[derive(Debug, Default)]
pub struct RandomIds;

impl RandomIds {
    /// Create a generator.
    pub fn new() -> Self {
        RandomIds
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        let token: u128 = rand::rng().random();
        format!("{:032x}", token)
    }
}

/// Which generator the service should use.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdStrategy {
    /// Decimal counter.
    #[default]
    Sequential,
    /// Random hex tokens.
    Random,
}

impl IdStrategy {
    /// Build a boxed generator for this strategy.
    pub fn build(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIds::new()),
            IdStrategy::Random => Box::new(RandomIds::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_increase() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
        assert_eq!(ids.next_id(), "3");
    }

    #[test]
    fn sequential_ids_never_repeat_in_a_burst() {
        let mut ids = SequentialIds::starting_at(100);
        let issued: HashSet<String> = (0..10_000).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 10_000);
    }

    #[test]
    fn random_ids_are_hex_and_unique() {
        let mut ids = RandomIds::new();
        let issued: Vec<String> = (0..1_000).map(|_| ids.next_id()).collect();
        assert!(issued
            .iter()
            .all(|id| id.len() == 32 && id.chars().all(|c| c.is_ascii_hexdigit())));
        let unique: HashSet<&String> = issued.iter().collect();
        assert_eq!(unique.len(), issued.len());
    }

    #[test]
    fn strategy_parses_and_displays_lowercase() {
        assert_eq!("Random".parse::<IdStrategy>().unwrap(), IdStrategy::Random);
        assert_eq!(IdStrategy::Sequential.to_string(), "sequential");
        assert_eq!(IdStrategy::default(), IdStrategy::Sequential);
    }

    #[test]
    fn strategy_builds_matching_generator() {
        let mut sequential = IdStrategy::Sequential.build();
        assert_eq!(sequential.next_id(), "1");
        let mut random = IdStrategy::Random.build();
        assert_eq!(random.next_id().len(), 32);
    }
}
