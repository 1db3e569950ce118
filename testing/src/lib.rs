use std::io::Read;
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

pub fn listen_on_available_port() -> (TcpListener, u16) {
    let listener =
        TcpListener::bind(("127.0.0.1", 0)).expect("Could not bind to an available port.");
    let port = listener
        .local_addr()
        .expect("Could not determine local address.")
        .port();
    (listener, port)
}

pub fn connect(port: u16) -> TcpStream {
    TcpStream::connect(("127.0.0.1", port)).expect("Could not connect to integration server.")
}

/// Reads one newline-terminated response from the server, without the
/// trailing newline. An empty string means the server closed the stream.
pub fn read_line_from(stream: &mut TcpStream, timeout: Duration) -> String {
    stream
        .set_read_timeout(Some(timeout))
        .expect("Could not set read timeout.");
    let mut line: Vec<u8> = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match stream.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {
                if byte[0] == b'\n' {
                    break;
                }
                line.push(byte[0]);
            }
            Err(e) => panic!("Client connection errored: {e:?}"),
        }
    }
    stream
        .set_read_timeout(None)
        .expect("Could not unset read timeout.");
    String::from_utf8(line).expect("Server response was not valid UTF-8.")
}

#[macro_export]
macro_rules! send_line_from {
    ($s:expr, $l:expr) => {{
        use std::io::Write;
        _ = $s.write_all($l.as_bytes());
        _ = $s.write_all(b"\n");
    }};
}
