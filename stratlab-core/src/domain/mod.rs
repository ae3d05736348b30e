//! Domain types: support tickets and price series.

pub mod ids;
pub mod prices;
pub mod ticket;

pub use ids::{TicketId, TicketIdGenerator};
pub use prices::PriceSeries;
pub use ticket::{Ticket, TicketState};
