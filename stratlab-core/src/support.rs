//! Customer support desk — owns the ticket queue and processes it with a
//! pluggable ordering strategy.
//!
//! The desk is the only place tickets change state. A processing run asks the
//! strategy for an ordering, then walks that ordering once: each queued ticket
//! it names is marked processed and removed from the queue. Names the queue no
//! longer holds (duplicates, foreign tickets) are skipped, so a ticket is
//! processed at most once. Tickets the ordering leaves out stay queued.

use crate::components::ordering::{OrderingRegistry, OrderingStrategy};
use crate::domain::{Ticket, TicketId, TicketIdGenerator};
use crate::error::Result;

/// Outcome of one processing run.
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub strategy: String,
    /// Tickets in the order they were processed, all in state `Processed`.
    pub processed: Vec<Ticket>,
    /// Ordering entries that did not match a queued ticket.
    pub skipped: usize,
}

impl ProcessReport {
    /// True when there was nothing to process. This is a normal outcome.
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

/// Support desk owning the queue of open tickets.
#[derive(Debug)]
pub struct SupportDesk {
    tickets: Vec<Ticket>,
    ids: TicketIdGenerator,
}

impl Default for SupportDesk {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportDesk {
    pub fn new() -> Self {
        Self::with_id_generator(TicketIdGenerator::new(None))
    }

    /// Desk whose ticket ids are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_id_generator(TicketIdGenerator::new(Some(seed)))
    }

    pub fn with_id_generator(ids: TicketIdGenerator) -> Self {
        Self {
            tickets: Vec::new(),
            ids,
        }
    }

    /// Queue a new ticket and return its id.
    pub fn submit(&mut self, customer: impl Into<String>, issue: impl Into<String>) -> TicketId {
        let ticket = Ticket::new(&mut self.ids, customer, issue);
        let id = ticket.id().clone();
        tracing::debug!(ticket_id = %id, customer = ticket.customer(), "ticket submitted");
        self.tickets.push(ticket);
        id
    }

    /// Queued tickets in submission order.
    pub fn queue(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Process the queue in the order chosen by `strategy`.
    pub fn process_tickets(&mut self, strategy: &dyn OrderingStrategy) -> ProcessReport {
        let ordering = strategy.order(&self.tickets);
        let mut report = ProcessReport {
            strategy: strategy.name().to_string(),
            processed: Vec::with_capacity(ordering.len()),
            skipped: 0,
        };

        if ordering.is_empty() {
            tracing::info!(strategy = strategy.name(), "no tickets to process");
            return report;
        }

        for candidate in &ordering {
            let Some(pos) = self.tickets.iter().position(|t| t.id() == candidate.id()) else {
                tracing::debug!(ticket_id = %candidate.id(), "not queued, skipping");
                report.skipped += 1;
                continue;
            };
            let mut ticket = self.tickets.remove(pos);
            ticket.mark_processed();
            tracing::info!(
                ticket_id = %ticket.id(),
                customer = ticket.customer(),
                issue = ticket.issue(),
                "processed ticket"
            );
            report.processed.push(ticket);
        }

        tracing::info!(
            strategy = strategy.name(),
            processed = report.processed.len(),
            remaining = self.tickets.len(),
            "processing run complete"
        );
        report
    }

    /// Resolve `key` in `orderings` and process the queue with it.
    ///
    /// An unknown key fails before the queue is touched.
    pub fn process_with(
        &mut self,
        orderings: &OrderingRegistry,
        key: &str,
    ) -> Result<ProcessReport> {
        let strategy = orderings.resolve(key)?;
        Ok(self.process_tickets(strategy.as_ref()))
    }
}
