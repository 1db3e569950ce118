use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;

pub fn get_tcp_listener(port: Option<u16>) -> TcpListener {
    let port = port.unwrap_or(crate::DEFAULT_PORT);
    let address: SocketAddr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(address).expect("Could not bind to port.")
}

pub fn run<F>(listener: TcpListener, stream_handler: F)
where
    F: Fn(TcpStream) + Clone + Send + Sync + 'static,
{
    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let thread_handler = stream_handler.clone();
                thread::spawn(move || {
                    thread_handler(stream);
                });
            }
            Err(err) => eprintln!("Incoming TCP connection stream errored... {err:?}"),
        };
    }
}
