use crate::error::Error;
use crate::models::Ticket;
use redis::Commands;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

const REDIS_HOST_VAR: &str = "REDIS_HOST";
const REDIS_PORT_VAR: &str = "REDIS_PORT";
const DEFAULT_REDIS_HOST: &str = "localhost";
const DEFAULT_REDIS_PORT: u16 = 6379;

/// The persistence collaborator: an opaque key-value map keyed by ticket
/// identifier. Keys are written once and never updated.
pub trait TicketStore: Send + Sync {
    fn get(&self, ticket_id: &str) -> Result<Option<Ticket>, Error>;
    fn set(&self, ticket_id: &str, ticket: &Ticket) -> Result<(), Error>;
}

fn unavailable(err: impl std::fmt::Display) -> Error {
    Error::StoreUnavailable(err.to_string())
}

pub struct MemoryStore {
    items: Mutex<HashMap<String, Ticket>>,
}
impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }
}
impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
impl TicketStore for MemoryStore {
    fn get(&self, ticket_id: &str) -> Result<Option<Ticket>, Error> {
        let items = self
            .items
            .lock()
            .map_err(|_| unavailable("memory store mutex poisoned"))?;
        Ok(items.get(ticket_id).cloned())
    }

    fn set(&self, ticket_id: &str, ticket: &Ticket) -> Result<(), Error> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| unavailable("memory store mutex poisoned"))?;
        items.insert(ticket_id.to_owned(), ticket.clone());
        Ok(())
    }
}

/// Redis-backed store. Tickets are persisted as JSON strings under their
/// identifier.
pub struct RedisStore {
    client: redis::Client,
}
impl RedisStore {
    pub fn connect(host: &str, port: u16) -> Result<Self, Error> {
        let client = redis::Client::open((host, port)).map_err(unavailable)?;
        Ok(Self { client })
    }

    /// Connection parameters come from REDIS_HOST and REDIS_PORT, falling
    /// back to a local instance on the default port.
    pub fn from_env() -> Result<Self, Error> {
        let host = env::var(REDIS_HOST_VAR).unwrap_or_else(|_| DEFAULT_REDIS_HOST.to_string());
        let port = env::var(REDIS_PORT_VAR)
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_REDIS_PORT);
        Self::connect(&host, port)
    }
}
impl TicketStore for RedisStore {
    fn get(&self, ticket_id: &str) -> Result<Option<Ticket>, Error> {
        let mut connection = self.client.get_connection().map_err(unavailable)?;
        let payload: Option<String> = connection.get(ticket_id).map_err(unavailable)?;
        // A payload that no longer parses as a ticket reads as absent.
        Ok(payload.and_then(|payload| serde_json::from_str(&payload).ok()))
    }

    fn set(&self, ticket_id: &str, ticket: &Ticket) -> Result<(), Error> {
        let payload = serde_json::to_string(ticket).map_err(unavailable)?;
        let mut connection = self.client.get_connection().map_err(unavailable)?;
        connection
            .set::<_, _, ()>(ticket_id, payload)
            .map_err(unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStore, TicketStore};
    use crate::models::Ticket;

    fn ticket(ticket_id: &str) -> Ticket {
        Ticket {
            ticket_id: ticket_id.to_owned(),
            plate: "ABC123".to_owned(),
            parking_lot: "LOT7".to_owned(),
            start_time: 1_700_000_000_000_000,
        }
    }

    #[test]
    fn set_then_get() {
        let store = MemoryStore::new();
        let stored = ticket("t1");
        store.set("t1", &stored).expect("Write should not fail.");
        assert_eq!(Some(stored), store.get("t1").expect("Read should not fail."));
    }

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(None, store.get("never-written").expect("Read should not fail."));
    }
}
