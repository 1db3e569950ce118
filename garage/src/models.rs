use crate::TimestampMicros;
use serde::{Deserialize, Serialize};

/// The stored record: one write on entry, read-only ever after.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Ticket {
    pub ticket_id: String,
    pub plate: String,
    pub parking_lot: String,
    pub start_time: TimestampMicros,
}

/// Outcome of presenting a ticket at the exit. An unknown identifier is
/// a normal negative result, not a failure.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Redemption {
    Invalid,
    Valid {
        ticket: Ticket,
        elapsed_seconds: u64,
        amount_due: f64,
    },
}
