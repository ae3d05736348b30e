use serde::{Deserialize, Serialize};

use super::ids::{TicketId, TicketIdGenerator};

/// Lifecycle state of a support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketState {
    Queued,
    Processed,
}

/// A customer support ticket.
///
/// The id is fixed at creation. Only the support desk moves a ticket from
/// `Queued` to `Processed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    id: TicketId,
    customer: String,
    issue: String,
    state: TicketState,
}

impl Ticket {
    /// Create a queued ticket with a freshly issued id.
    pub fn new(
        ids: &mut TicketIdGenerator,
        customer: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            customer: customer.into(),
            issue: issue.into(),
            state: TicketState::Queued,
        }
    }

    pub fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn issue(&self) -> &str {
        &self.issue
    }

    pub fn state(&self) -> TicketState {
        self.state
    }

    pub(crate) fn mark_processed(&mut self) {
        self.state = TicketState::Processed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ticket_is_queued() {
        let mut ids = TicketIdGenerator::new(Some(3));
        let ticket = Ticket::new(&mut ids, "Zack Ali", "My computer makes strange sounds!");
        assert_eq!(ticket.state(), TicketState::Queued);
        assert_eq!(ticket.customer(), "Zack Ali");
        assert_eq!(ticket.issue(), "My computer makes strange sounds!");
    }

    #[test]
    fn processing_keeps_identity() {
        let mut ids = TicketIdGenerator::new(Some(3));
        let mut ticket = Ticket::new(&mut ids, "Jane Doe", "Phone");
        let id = ticket.id().clone();
        ticket.mark_processed();
        assert_eq!(ticket.state(), TicketState::Processed);
        assert_eq!(ticket.id(), &id);
    }
}
