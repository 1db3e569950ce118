use crate::error::Error;
use crate::models::Ticket;
use crate::TicketId;
use serde::{Deserialize, Serialize};

const STATUS_SUCCESS: &str = "Success";
const STATUS_ERROR: &str = "Error";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    method: String,
    plate: Option<String>,
    parking_lot: Option<String>,
    ticket_id: Option<String>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Request {
    Health,
    Entry { plate: String, parking_lot: String },
    Exit { ticket_id: String },
}

impl Request {
    /// Parses one newline-delimited JSON request. Empty and missing
    /// values are rejected here; the office itself never validates.
    pub fn parse(line: &[u8]) -> Result<Self, Error> {
        let raw: RawRequest = serde_json::from_slice(line).map_err(|_| Error::MalformedRequest)?;
        match raw.method.as_str() {
            "health" => Ok(Self::Health),
            "entry" => {
                let plate = required(raw.plate, "plate")?;
                let parking_lot = required(raw.parking_lot, "parkingLot")?;
                Ok(Self::Entry { plate, parking_lot })
            }
            "exit" => {
                let ticket_id = required(raw.ticket_id, "ticketId")?;
                Ok(Self::Exit { ticket_id })
            }
            _ => Err(Error::UnknownMethod),
        }
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, Error> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingParameter(name)),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AliveBody {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssuedBody<'a> {
    status: &'static str,
    ticket_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RedeemedBody<'a> {
    status: &'static str,
    ticket_id: &'a str,
    plate: &'a str,
    parking_lot: &'a str,
    start_time: u64,
    elapsed_seconds: u64,
    amount_due: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status: &'static str,
    reason: &'a str,
}

pub enum Response {
    Alive,
    Issued(TicketId),
    Redeemed {
        ticket: Ticket,
        elapsed_seconds: u64,
        amount_due: f64,
    },
    Rejected(String),
}
impl Response {
    /// One JSON response line, newline-terminated.
    pub fn to_line(&self) -> Vec<u8> {
        let mut line = match self {
            Self::Alive => to_json(&AliveBody {
                status: STATUS_SUCCESS,
                message: "I'm Alive!",
            }),
            Self::Issued(ticket_id) => to_json(&IssuedBody {
                status: STATUS_SUCCESS,
                ticket_id,
            }),
            Self::Redeemed {
                ticket,
                elapsed_seconds,
                amount_due,
            } => to_json(&RedeemedBody {
                status: STATUS_SUCCESS,
                ticket_id: &ticket.ticket_id,
                plate: &ticket.plate,
                parking_lot: &ticket.parking_lot,
                // Whole seconds on the wire.
                start_time: ticket.start_time / 1_000_000,
                elapsed_seconds: *elapsed_seconds,
                amount_due: *amount_due,
            }),
            Self::Rejected(reason) => to_json(&ErrorBody {
                status: STATUS_ERROR,
                reason,
            }),
        };
        line.push(b'\n');
        line
    }
}

fn to_json(body: &impl Serialize) -> Vec<u8> {
    serde_json::to_vec(body).expect("Serializing a response should not fail.")
}
