use std::process::ExitCode;

use canned_web::Server;
use canned_web::config::{Args, default_routes};
use canned_web::logging;
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // prints usage to stderr and exits with status 2 unless given exactly <address> <port>
    let config = Args::parse().into_config();

    if let Err(e) = logging::init() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let server = match Server::builder().config(config).routes(default_routes()).build() {
        Ok(server) => server,
        Err(e) => {
            error!(cause = %e, "invalid server configuration");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let listener = match server.bind().await {
        Ok(listener) => listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    listener.serve().await;
    ExitCode::SUCCESS
}
