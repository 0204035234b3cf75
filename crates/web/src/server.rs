//! Listener loop.
//!
//! [`Server::bind`] opens the listening socket; [`Listener::serve`] then accepts
//! connections forever and runs one keep-alive session per connection on its own
//! task, so a slow client never holds up the others.

use std::io;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;

use canned_http::connection::HttpConnection;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Semaphore;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;
use crate::router::RouteTable;

#[derive(Debug, Default)]
pub struct ServerBuilder {
    routes: Option<RouteTable>,
    address: Option<SocketAddr>,
    max_connections: Option<NonZeroUsize>,
}

impl ServerBuilder {
    fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<SocketAddr>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Caps the number of sessions served at once. Connections beyond the cap
    /// wait in the kernel backlog until a session ends.
    #[must_use]
    pub fn max_connections(mut self, max_connections: NonZeroUsize) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Takes address and connection cap from `config`.
    #[must_use]
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.address = Some(config.address);
        self.max_connections = config.max_connections;
        self
    }

    pub fn build(self) -> Result<Server, ServerBuildError> {
        let routes = self.routes.ok_or(ServerBuildError::MissingRoutes)?;
        let address = self.address.ok_or(ServerBuildError::MissingAddress)?;
        Ok(Server { dispatcher: Dispatcher::new(routes), address, max_connections: self.max_connections })
    }
}

#[derive(Error, Debug)]
pub enum ServerBuildError {
    #[error("routes must be set")]
    MissingRoutes,
    #[error("address must be set")]
    MissingAddress,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct Server {
    dispatcher: Dispatcher,
    address: SocketAddr,
    max_connections: Option<NonZeroUsize>,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// Binds the listening socket.
    pub async fn bind(self) -> Result<Listener, ServerError> {
        let address = self.address;
        let tcp_listener = TcpListener::bind(address).await.map_err(|source| ServerError::Bind { address, source })?;
        let local_addr = tcp_listener.local_addr().map_err(|source| ServerError::Bind { address, source })?;

        info!(address = %local_addr, max_connections = ?self.max_connections, "start listening");

        Ok(Listener {
            tcp_listener,
            local_addr,
            dispatcher: Arc::new(self.dispatcher),
            connection_limit: self.max_connections.map(|max| Arc::new(Semaphore::new(max.get()))),
        })
    }
}

/// A bound server, ready to accept connections.
#[derive(Debug)]
pub struct Listener {
    tcp_listener: TcpListener,
    local_addr: SocketAddr,
    dispatcher: Arc<Dispatcher>,
    connection_limit: Option<Arc<Semaphore>>,
}

impl Listener {
    /// The address actually bound, with the assigned port when port 0 was requested.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accepts connections until the process ends.
    ///
    /// A failed accept is logged and skipped. Every session runs on its own task
    /// and ends on its own; errors inside a session never reach this loop.
    pub async fn serve(self) {
        loop {
            // acquired before accept so excess clients queue in the backlog
            let permit = match &self.connection_limit {
                Some(limit) => match Arc::clone(limit).acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(e) => {
                        error!(cause = %e, "connection limit closed");
                        return;
                    }
                },
                None => None,
            };

            let (tcp_stream, remote_addr) = match self.tcp_listener.accept().await {
                Ok(stream_and_addr) => stream_and_addr,
                Err(e) => {
                    warn!(cause = %e, "failed to accept");
                    continue;
                }
            };

            let dispatcher = Arc::clone(&self.dispatcher);
            let span = info_span!("session", peer = %remote_addr);

            tokio::spawn(
                async move {
                    run_session(tcp_stream, dispatcher).await;
                    drop(permit);
                }
                .instrument(span),
            );
        }
    }
}

async fn run_session(tcp_stream: TcpStream, dispatcher: Arc<Dispatcher>) {
    debug!("connection accepted");
    if let Err(e) = tcp_stream.set_nodelay(true) {
        debug!(cause = %e, "set TCP_NODELAY");
    }

    let (reader, writer) = tcp_stream.into_split();
    let connection = HttpConnection::new(reader, writer);
    match connection.process(dispatcher).await {
        Ok(()) => debug!("finished process, connection shutdown"),
        Err(e) => debug!(cause = %e, "session ended with error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_routes;
    use std::net::{IpAddr, Ipv4Addr};

    fn localhost() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[test]
    fn build_requires_routes_and_address() {
        let missing_routes = Server::builder().address(localhost()).build();
        assert!(matches!(missing_routes, Err(ServerBuildError::MissingRoutes)));

        let missing_address = Server::builder().routes(default_routes()).build();
        assert!(matches!(missing_address, Err(ServerBuildError::MissingAddress)));
    }

    #[test]
    fn config_sets_address_and_limit() {
        let config = ServerConfig { address: localhost(), max_connections: NonZeroUsize::new(4) };

        let server = Server::builder().routes(default_routes()).config(config).build().unwrap();

        assert_eq!(server.address(), localhost());
        assert_eq!(server.max_connections, NonZeroUsize::new(4));
    }

    #[tokio::test]
    async fn bind_reports_assigned_port() {
        let server = Server::builder().routes(default_routes()).address(localhost()).build().unwrap();

        let listener = server.bind().await.unwrap();

        assert!(listener.local_addr().ip().is_loopback());
        assert_ne!(listener.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn bind_to_taken_port_fails() {
        let taken = TcpListener::bind(localhost()).await.unwrap();
        let address = taken.local_addr().unwrap();

        let server = Server::builder().routes(default_routes()).address(address).build().unwrap();
        let err = server.bind().await.unwrap_err();

        let ServerError::Bind { address: reported, source } = err;
        assert_eq!(reported, address);
        assert_eq!(source.kind(), io::ErrorKind::AddrInUse);
    }
}
