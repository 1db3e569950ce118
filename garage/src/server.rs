use crate::error::Error;
use crate::models::Redemption;
use crate::office::TicketOffice;
use crate::protocol::{Request, Response};
use common::{ASCII_NEWLINE, BUFFER_SIZE};
use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};
use std::sync::Arc;
use tracing::{info, warn};

/// Serves one connection: newline-delimited JSON requests in, one JSON
/// response line out per request. A request that cannot be parsed at all
/// terminates the connection after an error response.
pub fn handle_stream(mut stream: TcpStream, office: Arc<TicketOffice>) {
    let mut queue: Vec<u8> = vec![];
    let mut buffer = [0u8; BUFFER_SIZE];

    'connected: loop {
        match stream.read(&mut buffer) {
            Ok(0) => break 'connected,
            Ok(n) => queue.extend_from_slice(&buffer[..n]),
            Err(ref err) if err.kind() == ErrorKind::WouldBlock => (),
            Err(err) => {
                warn!("Error processing stream: {err:?}");
                break 'connected;
            }
        };

        while let Some(position) = queue.iter().position(|&byte| byte == ASCII_NEWLINE) {
            let line: Vec<u8> = queue.drain(..position + 1).collect();
            let (response, keep_open) = process_line(&line, &office);
            if stream.write_all(&response.to_line()).is_err() {
                break 'connected;
            }
            if !keep_open {
                break 'connected;
            }
        }
    }

    _ = stream.shutdown(Shutdown::Both);
}

fn process_line(line: &[u8], office: &TicketOffice) -> (Response, bool) {
    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(err @ (Error::MalformedRequest | Error::UnknownMethod)) => {
            return (Response::Rejected(err.to_string()), false)
        }
        Err(err) => return (Response::Rejected(err.to_string()), true),
    };

    match request {
        Request::Health => (Response::Alive, true),
        Request::Entry { plate, parking_lot } => match office.issue(&plate, &parking_lot) {
            Ok(ticket_id) => {
                info!("Issued ticket {ticket_id} for plate {plate} in lot {parking_lot}.");
                (Response::Issued(ticket_id), true)
            }
            Err(err) => (Response::Rejected(err.to_string()), true),
        },
        Request::Exit { ticket_id } => match office.redeem(&ticket_id) {
            Ok(Redemption::Valid {
                ticket,
                elapsed_seconds,
                amount_due,
            }) => {
                info!("Redeemed ticket {} after {elapsed_seconds}s.", ticket.ticket_id);
                (
                    Response::Redeemed {
                        ticket,
                        elapsed_seconds,
                        amount_due,
                    },
                    true,
                )
            }
            Ok(Redemption::Invalid) => (Response::Rejected("Invalid ticket".to_owned()), true),
            Err(err) => (Response::Rejected(err.to_string()), true),
        },
    }
}
