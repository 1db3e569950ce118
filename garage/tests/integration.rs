//! Integration tests for the garage server.
//! Unit tests belong at the bottom of source files.

#[cfg(test)]
mod test {
    use common::THREAD_SLOW_DOWN;
    use garage::clock::SystemClock;
    use garage::fee::fee;
    use garage::id::CompositeId;
    use garage::office::TicketOffice;
    use garage::server::handle_stream;
    use garage::store::MemoryStore;
    use serde_json::Value;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;
    use testing::{connect, listen_on_available_port, read_line_from, send_line_from};

    const DEFAULT_TIMEOUT: Duration = Duration::from_millis(500);

    fn setup() -> u16 {
        let (listener, port) = listen_on_available_port();
        let office = Arc::new(TicketOffice::new(
            Arc::new(MemoryStore::new()),
            Arc::new(SystemClock),
            Arc::new(CompositeId),
        ));
        thread::spawn(move || loop {
            if let Ok((stream, _)) = listener.accept() {
                let office = office.clone();
                thread::spawn(move || handle_stream(stream, office));
            }
            thread::sleep(THREAD_SLOW_DOWN);
        });
        port
    }

    fn receive_json(client: &mut std::net::TcpStream) -> Value {
        let line = read_line_from(client, DEFAULT_TIMEOUT);
        serde_json::from_str(&line).expect("Server response was not valid JSON.")
    }

    #[test]
    fn entry_then_exit() {
        let port = setup();
        let mut client = connect(port);

        send_line_from!(client, r#"{"method":"entry","plate":"ABC123","parkingLot":"LOT7"}"#);
        let issued = receive_json(&mut client);
        assert_eq!(issued["status"], "Success");
        let ticket_id = issued["ticketId"]
            .as_str()
            .expect("Entry response should carry a ticket identifier.")
            .to_owned();

        send_line_from!(client, format!(r#"{{"method":"exit","ticketId":"{ticket_id}"}}"#));
        let redeemed = receive_json(&mut client);
        assert_eq!(redeemed["status"], "Success");
        assert_eq!(redeemed["ticketId"], ticket_id.as_str());
        assert_eq!(redeemed["plate"], "ABC123");
        assert_eq!(redeemed["parkingLot"], "LOT7");
        let elapsed = redeemed["elapsedSeconds"]
            .as_u64()
            .expect("Exit response should carry elapsed seconds.");
        assert!(elapsed <= 1);
        assert_eq!(redeemed["amountDue"], fee(elapsed));
    }

    #[test]
    fn exit_with_unknown_ticket() {
        let port = setup();
        let mut client = connect(port);

        send_line_from!(client, r#"{"method":"exit","ticketId":"never-issued"}"#);
        let response = receive_json(&mut client);
        assert_eq!(response["status"], "Error");
        assert_eq!(response["reason"], "Invalid ticket");
    }

    #[test]
    fn repeated_entries_get_distinct_tickets() {
        let port = setup();
        let mut client = connect(port);

        send_line_from!(client, r#"{"method":"entry","plate":"ABC123","parkingLot":"LOT7"}"#);
        let first = receive_json(&mut client)["ticketId"]
            .as_str()
            .expect("Entry response should carry a ticket identifier.")
            .to_owned();
        send_line_from!(client, r#"{"method":"entry","plate":"ABC123","parkingLot":"LOT7"}"#);
        let second = receive_json(&mut client)["ticketId"]
            .as_str()
            .expect("Entry response should carry a ticket identifier.")
            .to_owned();
        assert_ne!(first, second);

        for ticket_id in [first, second] {
            send_line_from!(client, format!(r#"{{"method":"exit","ticketId":"{ticket_id}"}}"#));
            assert_eq!(receive_json(&mut client)["status"], "Success");
        }
    }

    #[test]
    fn entry_with_missing_plate_keeps_connection_open() {
        let port = setup();
        let mut client = connect(port);

        send_line_from!(client, r#"{"method":"entry","parkingLot":"LOT7"}"#);
        let response = receive_json(&mut client);
        assert_eq!(response["status"], "Error");
        assert_eq!(response["reason"], "Missing required parameter 'plate'");

        send_line_from!(client, r#"{"method":"health"}"#);
        assert_eq!(receive_json(&mut client)["status"], "Success");
    }

    #[test]
    fn entry_with_empty_plate_is_rejected() {
        let port = setup();
        let mut client = connect(port);

        send_line_from!(client, r#"{"method":"entry","plate":"","parkingLot":"LOT7"}"#);
        let response = receive_json(&mut client);
        assert_eq!(response["status"], "Error");
        assert_eq!(response["reason"], "Missing required parameter 'plate'");
    }

    #[test]
    fn malformed_request_closes_connection() {
        let port = setup();
        let mut client = connect(port);

        send_line_from!(client, "this is not json");
        let response = receive_json(&mut client);
        assert_eq!(response["status"], "Error");
        assert_eq!("", read_line_from(&mut client, DEFAULT_TIMEOUT));
    }

    #[test]
    fn health_probe() {
        let port = setup();
        let mut client = connect(port);

        send_line_from!(client, r#"{"method":"health"}"#);
        let response = receive_json(&mut client);
        assert_eq!(response["status"], "Success");
        assert_eq!(response["message"], "I'm Alive!");
    }
}
