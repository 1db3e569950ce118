use std::time::Duration;
use uuid::Uuid;

// Separates the fields of a composite identifier. Not expected to occur
// in plate or parking lot values.
const ID_DELIMITER: &str = "__";

/// Strategy for deriving ticket identifiers. Two issuances must never
/// produce the same identifier, with no coordination between instances.
pub trait IdGenerator: Send + Sync {
    fn ticket_id(&self, plate: &str, parking_lot: &str, issued_at: Duration) -> String;
}

/// Joins the plate, the lot and the creation timestamp, then appends a
/// random nonce so that two issuances within the same microsecond still
/// receive distinct identifiers.
pub struct CompositeId;
impl IdGenerator for CompositeId {
    fn ticket_id(&self, plate: &str, parking_lot: &str, issued_at: Duration) -> String {
        format!(
            "{plate}{ID_DELIMITER}{parking_lot}{ID_DELIMITER}{}{ID_DELIMITER}{}",
            issued_at.as_micros(),
            Uuid::new_v4().simple(),
        )
    }
}
