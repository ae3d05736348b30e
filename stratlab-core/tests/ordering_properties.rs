//! Property tests for ordering strategies.
//!
//! Uses proptest to verify:
//! 1. FIFO is idempotent and preserves the multiset of tickets
//! 2. FILO applied twice is the identity
//! 3. Seeded random ordering is reproducible and a permutation
//! 4. Ordering never mutates the input

use proptest::prelude::*;
use stratlab_core::components::{Fifo, Filo, OrderingStrategy, RandomOrder};
use stratlab_core::domain::{Ticket, TicketId, TicketIdGenerator};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_queue() -> impl Strategy<Value = Vec<Ticket>> {
    (any::<u64>(), prop::collection::vec(("[a-z]{1,8}", "[a-z ]{0,16}"), 0..40)).prop_map(
        |(seed, entries)| {
            let mut ids = TicketIdGenerator::new(Some(seed));
            entries
                .into_iter()
                .map(|(customer, issue)| Ticket::new(&mut ids, customer, issue))
                .collect()
        },
    )
}

fn sorted_ids(tickets: &[Ticket]) -> Vec<TicketId> {
    let mut ids: Vec<TicketId> = tickets.iter().map(|t| t.id().clone()).collect();
    ids.sort();
    ids
}

// ── 1. FIFO ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fifo_is_idempotent(queue in arb_queue()) {
        let once = Fifo.order(&queue);
        let twice = Fifo.order(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(&once, &queue);
    }

    #[test]
    fn fifo_preserves_multiset(queue in arb_queue()) {
        prop_assert_eq!(sorted_ids(&Fifo.order(&queue)), sorted_ids(&queue));
    }
}

// ── 2. FILO ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn filo_is_an_involution(queue in arb_queue()) {
        let back = Filo.order(&Filo.order(&queue));
        prop_assert_eq!(back, queue);
    }
}

// ── 3. Random ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn seeded_random_is_reproducible(queue in arb_queue(), seed in any::<u64>()) {
        let strategy = RandomOrder::seeded(seed);
        prop_assert_eq!(strategy.order(&queue), strategy.order(&queue));
        prop_assert_eq!(RandomOrder::seeded(seed).order(&queue), strategy.order(&queue));
    }

    #[test]
    fn random_is_a_permutation(queue in arb_queue(), seed in any::<u64>()) {
        let ordered = RandomOrder::seeded(seed).order(&queue);
        prop_assert_eq!(sorted_ids(&ordered), sorted_ids(&queue));
    }
}

// ── 4. Input untouched ───────────────────────────────────────────────

proptest! {
    #[test]
    fn ordering_leaves_input_unchanged(queue in arb_queue(), seed in any::<u64>()) {
        let before = queue.clone();
        let strategies: Vec<Box<dyn OrderingStrategy>> = vec![
            Box::new(Fifo),
            Box::new(Filo),
            Box::new(RandomOrder::seeded(seed)),
        ];
        for strategy in &strategies {
            let _ = strategy.order(&queue);
            prop_assert_eq!(&queue, &before);
        }
    }
}
