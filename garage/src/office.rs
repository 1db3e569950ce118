use crate::clock::Clock;
use crate::error::Error;
use crate::fee::fee;
use crate::id::IdGenerator;
use crate::models::{Redemption, Ticket};
use crate::store::TicketStore;
use crate::TicketId;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Issues tickets on entry and redeems them on exit. Holds no state of
/// its own; every ticket lives in the injected store.
pub struct TicketOffice {
    store: Arc<dyn TicketStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl TicketOffice {
    pub fn new(store: Arc<dyn TicketStore>, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, clock, ids }
    }

    /// Records a new ticket for the plate and lot, keyed by a freshly
    /// derived identifier. Exactly one store write, no input validation;
    /// callers reject empty values before calling.
    pub fn issue(&self, plate: &str, parking_lot: &str) -> Result<TicketId, Error> {
        let issued_at = self.clock.now();
        let ticket = Ticket {
            ticket_id: self.ids.ticket_id(plate, parking_lot, issued_at),
            plate: plate.to_owned(),
            parking_lot: parking_lot.to_owned(),
            start_time: issued_at.as_micros() as u64,
        };
        self.store.set(&ticket.ticket_id, &ticket)?;
        Ok(ticket.ticket_id)
    }

    /// Looks a ticket up and prices the stay so far. The stored record is
    /// never modified, so redeeming is repeatable; the amount grows with
    /// elapsed time.
    pub fn redeem(&self, ticket_id: &str) -> Result<Redemption, Error> {
        let Some(ticket) = self.store.get(ticket_id)? else {
            return Ok(Redemption::Invalid);
        };
        let elapsed_seconds = self.elapsed_since(&ticket);
        let amount_due = fee(elapsed_seconds);
        Ok(Redemption::Valid {
            ticket,
            elapsed_seconds,
            amount_due,
        })
    }

    /// Whole seconds between the ticket's creation and now, fractional
    /// seconds truncated. A clock running behind the ticket's start is
    /// clamped to zero rather than producing a negative charge.
    fn elapsed_since(&self, ticket: &Ticket) -> u64 {
        let now = self.clock.now();
        let start = Duration::from_micros(ticket.start_time);
        match now.checked_sub(start) {
            Some(elapsed) => elapsed.as_secs(),
            None => {
                warn!("Clock skew: ticket {} starts in the future.", ticket.ticket_id);
                0
            }
        }
    }
}
