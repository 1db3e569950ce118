pub mod clock;
pub mod error;
pub mod fee;
pub mod id;
pub mod models;
pub mod office;
pub mod protocol;
pub mod server;
pub mod store;

/// One billable quarter-hour block, in seconds.
pub const QUARTER_HOUR_SECONDS: u64 = 900;
/// Flat rate charged per started quarter-hour block.
pub const QUARTER_HOUR_RATE: f64 = 2.5;

pub type TicketId = String;
/// Whole microseconds since the Unix epoch.
pub type TimestampMicros = u64;
