use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::rng::rng_from_seed;

const TICKET_ID_LEN: usize = 8;
const TICKET_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Opaque support ticket identifier (8 characters, `A-Z0-9`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TicketId(String);

impl TicketId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues ticket ids that are never handed out twice.
///
/// Every issued id is remembered, including ids of tickets that have since
/// been processed, so a collision simply triggers another draw.
#[derive(Debug)]
pub struct TicketIdGenerator {
    rng: StdRng,
    issued: HashSet<TicketId>,
}

impl TicketIdGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_rng(rng_from_seed(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    pub fn next_id(&mut self) -> TicketId {
        loop {
            let code: String = (0..TICKET_ID_LEN)
                .map(|_| {
                    let i = self.rng.gen_range(0..TICKET_ID_ALPHABET.len());
                    TICKET_ID_ALPHABET[i] as char
                })
                .collect();
            let id = TicketId(code);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_have_expected_shape() {
        let mut ids = TicketIdGenerator::new(Some(1));
        let id = ids.next_id();
        assert_eq!(id.as_str().len(), 8);
        assert!(id
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn ids_are_unique() {
        let mut ids = TicketIdGenerator::new(Some(99));
        let drawn: HashSet<TicketId> = (0..5_000).map(|_| ids.next_id()).collect();
        assert_eq!(drawn.len(), 5_000);
        assert_eq!(ids.issued_count(), 5_000);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = TicketIdGenerator::new(Some(42));
        let mut b = TicketIdGenerator::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }
}
