//! # wasm_dev_server - Entry Point
//! src/main.rs
//!
//! Uso: `wasm_dev_server [port]`

use log::debug;
use wasm_dev_server::config::Config;
use wasm_dev_server::handler::FileHandler;
use wasm_dev_server::logging;
use wasm_dev_server::mime::MimeTable;
use wasm_dev_server::server::Server;

fn main() {
    logging::init();

    let config = Config::from_args();
    debug!("config: {:?}", config);

    let mut mime = MimeTable::default();
    mime.insert(".wasm", "application/wasm");

    let handler = FileHandler::new(config.root.clone(), mime);
    let mut server = Server::new(config, handler);

    // Bloquea para siempre; solo vuelve si falla el bind
    if let Err(e) = server.run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
