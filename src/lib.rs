//! Configuration for a single server endpoint in a database client's
//! topology layer.
//!
//! A [`ServerConfig`] starts from fixed defaults and is shaped by an ordered
//! list of [`ServerOption`]s. Each option transforms the current value of one
//! field, so options compose: "add five seconds" works without knowing what
//! the interval was before.
//!
//! ```
//! use std::time::Duration;
//! use topology_server::{ServerConfig, ServerOption};
//!
//! let cfg = ServerConfig::from_options([
//!     ServerOption::heartbeat_interval(|d| d + Duration::from_secs(5)),
//!     ServerOption::max_connections(|_| 0),
//! ])
//! .unwrap();
//!
//! assert_eq!(cfg.heartbeat_interval(), Duration::from_secs(15));
//! assert_eq!(cfg.max_connections_limit(), None);
//! ```

mod config;
mod connection;
mod error;
mod option;
mod server;
mod types;

pub use config::{
    DEFAULT_HEARTBEAT_INTERVAL, DEFAULT_HEARTBEAT_TIMEOUT, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MAX_IDLE_CONNECTIONS, ServerConfig, ServerConfigBuilder,
};
pub use connection::ConnectionOption;
pub use error::ConfigError;
pub use option::ServerOption;
pub use server::Server;
pub use types::Address;
