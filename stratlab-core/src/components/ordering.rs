//! Ticket ordering strategies — decide the order in which queued tickets are processed.
//!
//! Every strategy receives a borrowed slice and returns a new `Vec`; the input is
//! never mutated. An empty result is a legal answer meaning "nothing to process".

use std::sync::Arc;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::domain::Ticket;
use crate::registry::Registry;
use crate::rng::rng_from_seed;

/// Trait for ticket ordering strategies.
pub trait OrderingStrategy: Send + Sync {
    /// Human-readable name (e.g., "fifo").
    fn name(&self) -> &str;

    /// Return the tickets in processing order.
    fn order(&self, tickets: &[Ticket]) -> Vec<Ticket>;
}

/// Registry of ordering strategies keyed by name.
pub type OrderingRegistry = Registry<dyn OrderingStrategy>;

/// First in, first out: submission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl OrderingStrategy for Fifo {
    fn name(&self) -> &str {
        "fifo"
    }

    fn order(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        tickets.to_vec()
    }
}

/// First in, last out: reverse submission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filo;

impl OrderingStrategy for Filo {
    fn name(&self) -> &str {
        "filo"
    }

    fn order(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        tickets.iter().rev().cloned().collect()
    }
}

/// Parameters for [`RandomOrder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomOrderConfig {
    /// Fixed seed for a reproducible permutation. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

/// Random permutation of the queue.
///
/// With a seed, every call over the same input yields the same permutation:
/// the RNG is re-seeded per call rather than advanced across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOrder {
    config: RandomOrderConfig,
}

impl RandomOrder {
    pub fn new(config: RandomOrderConfig) -> Self {
        Self { config }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomOrderConfig { seed: Some(seed) })
    }

    pub fn config(&self) -> RandomOrderConfig {
        self.config
    }
}

impl OrderingStrategy for RandomOrder {
    fn name(&self) -> &str {
        "random"
    }

    fn order(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let mut ordered = tickets.to_vec();
        let mut rng = rng_from_seed(self.config.seed);
        ordered.shuffle(&mut rng);
        ordered
    }
}

/// Always returns an empty ordering, leaving the queue untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Drain;

impl OrderingStrategy for Drain {
    fn name(&self) -> &str {
        "drain"
    }

    fn order(&self, _tickets: &[Ticket]) -> Vec<Ticket> {
        Vec::new()
    }
}

/// Registry with the built-in keys `"fifo"`, `"filo"`, and `"random"`.
///
/// `seed` configures the `"random"` strategy.
pub fn standard_orderings(seed: Option<u64>) -> OrderingRegistry {
    let mut registry = OrderingRegistry::new("ordering strategy");
    registry.register("fifo", || Arc::new(Fifo));
    registry.register("filo", || Arc::new(Filo));
    registry.register("random", move || {
        Arc::new(RandomOrder::new(RandomOrderConfig { seed }))
    });
    registry
}
