//! Static-route HTTP/1.1 server.
//!
//! Every request is answered from a fixed [`RouteTable`] by exact comparison of
//! its request-target; anything else gets the fallback response. Connections are
//! kept alive for as long as the client asks for it.
//!
//! ```no_run
//! use canned_web::Server;
//! use canned_web::config::default_routes;
//! use std::net::SocketAddr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let address: SocketAddr = "127.0.0.1:8080".parse()?;
//!     let server = Server::builder().address(address).routes(default_routes()).build()?;
//!     server.bind().await?.serve().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatcher;
pub mod logging;
pub mod router;
pub mod server;

pub use dispatcher::Dispatcher;
pub use dispatcher::dispatch;
pub use router::Route;
pub use router::RouteTable;
pub use server::Listener;
pub use server::Server;
