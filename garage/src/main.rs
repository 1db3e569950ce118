use common::{get_tcp_listener, run, DEFAULT_PORT};
use garage::clock::SystemClock;
use garage::id::CompositeId;
use garage::office::TicketOffice;
use garage::server::handle_stream;
use garage::store::RedisStore;
use std::sync::Arc;
use std::{env, process::exit};
use tracing::info;

fn main() {
    let args: Vec<String> = env::args().collect();
    let port: u16 = if args.len() >= 2 {
        args[1].parse::<u16>().expect("Invalid Port Number.")
    } else {
        DEFAULT_PORT
    };

    tracing_subscriber::fmt::init();

    let store = match RedisStore::from_env() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Could not reach the ticket store: {err}");
            exit(1);
        }
    };
    let office = Arc::new(TicketOffice::new(
        Arc::new(store),
        Arc::new(SystemClock),
        Arc::new(CompositeId),
    ));

    let listener = get_tcp_listener(Some(port));
    info!("Listening to connections on port {port}...");
    run(listener, move |stream| handle_stream(stream, office.clone()));
}
