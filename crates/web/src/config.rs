//! Command line arguments and the server configuration built from them.

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;

use clap::Parser;

use crate::router::RouteTable;

/// Serve a fixed set of canned responses over HTTP/1.1.
#[derive(Debug, Parser)]
#[command(name = "canned-server", version, about)]
pub struct Args {
    /// IPv4 or IPv6 address to listen on, e.g. 0.0.0.0
    pub address: IpAddr,

    /// TCP port to listen on
    pub port: u16,

    /// Maximum number of connections served at the same time; unbounded if omitted
    #[arg(long, value_name = "N")]
    pub max_connections: Option<NonZeroUsize>,
}

impl Args {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig { address: SocketAddr::new(self.address, self.port), max_connections: self.max_connections }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: SocketAddr,
    pub max_connections: Option<NonZeroUsize>,
}

/// The routes served by `canned-server`.
pub fn default_routes() -> RouteTable {
    RouteTable::builder()
        .route("/", "welcome ! available routes: /test, /foo")
        .route("/test", "Hello World")
        .route("/foo", "bar")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn parses_address_and_port() {
        let config = Args::try_parse_from(["canned-server", "0.0.0.0", "8080"]).unwrap().into_config();

        assert_eq!(config.address, SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080));
        assert_eq!(config.max_connections, None);
    }

    #[test]
    fn parses_ipv6_and_connection_cap() {
        let config =
            Args::try_parse_from(["canned-server", "::1", "0", "--max-connections", "16"]).unwrap().into_config();

        assert_eq!(config.address, SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 0));
        assert_eq!(config.max_connections, NonZeroUsize::new(16));
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let none = Args::try_parse_from(["canned-server"]).unwrap_err();
        assert_eq!(none.kind(), ErrorKind::MissingRequiredArgument);

        let one = Args::try_parse_from(["canned-server", "127.0.0.1"]).unwrap_err();
        assert_eq!(one.kind(), ErrorKind::MissingRequiredArgument);

        let three = Args::try_parse_from(["canned-server", "127.0.0.1", "8080", "extra"]).unwrap_err();
        assert_eq!(three.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Args::try_parse_from(["canned-server", "localhost:1", "8080"]).is_err());
        assert!(Args::try_parse_from(["canned-server", "127.0.0.1", "65536"]).is_err());
        assert!(Args::try_parse_from(["canned-server", "127.0.0.1", "80", "--max-connections", "0"]).is_err());
    }

    #[test]
    fn usage_names_both_arguments() {
        let err = Args::try_parse_from(["canned-server"]).unwrap_err();
        let rendered = err.render().to_string();

        assert!(rendered.contains("Usage"));
        assert!(rendered.contains("<ADDRESS>"));
        assert!(rendered.contains("<PORT>"));
    }

    #[test]
    fn default_routes_are_in_order() {
        let routes = default_routes();

        let paths: Vec<&str> = routes.iter().map(|route| route.path()).collect();
        assert_eq!(paths, ["/", "/test", "/foo"]);
        assert_eq!(routes.lookup("/foo"), Some("bar"));
    }
}
