use std::num::NonZeroU16;
use std::time::Duration;

use crate::connection::ConnectionOption;
use crate::error::ConfigError;
use crate::option::ServerOption;

pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_HEARTBEAT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_CONNECTIONS: u16 = 100;
pub const DEFAULT_MAX_IDLE_CONNECTIONS: u16 = 100;

/// Settings for one server endpoint: heartbeat timing, pool bounds and the
/// connection options handed down to the connection layer.
///
/// Fields are only writable inside the crate, by options during a build.
/// Once a build returns, the record is read through accessors only.
/// No field is checked against another: an idle cap above the connection
/// cap, or a zero heartbeat interval, is accepted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) connection_options: Vec<ConnectionOption>,
    pub(crate) heartbeat_interval: Duration,
    pub(crate) heartbeat_timeout: Duration,
    pub(crate) max_connections: u16,
    pub(crate) max_idle_connections: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            connection_options: Vec::new(),
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL,
            heartbeat_timeout: DEFAULT_HEARTBEAT_TIMEOUT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
        }
    }
}

impl ServerConfig {
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder {
            options: Vec::new(),
        }
    }

    /// Start from the defaults and apply `options` in order.
    ///
    /// Each option sees the result of every option before it. The first
    /// option to fail stops the build: its error is returned unchanged and
    /// the remaining options are dropped without running. Changes made by
    /// earlier options are not undone; the half-built record is discarded.
    pub fn from_options<I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ServerOption>,
    {
        let mut cfg = Self::default();

        for (index, opt) in options.into_iter().enumerate() {
            if let Err(e) = opt.apply(&mut cfg) {
                tracing::debug!(index, error = %e, "server option failed, aborting build");
                return Err(e);
            }
        }

        tracing::trace!(config = ?cfg, "server config built");
        Ok(cfg)
    }

    pub fn connection_options(&self) -> &[ConnectionOption] {
        &self.connection_options
    }

    pub fn heartbeat_interval(&self) -> Duration {
        self.heartbeat_interval
    }

    pub fn heartbeat_timeout(&self) -> Duration {
        self.heartbeat_timeout
    }

    /// Raw connection cap, where 0 means unlimited.
    pub fn max_connections(&self) -> u16 {
        self.max_connections
    }

    /// Connection cap with the "0 means unlimited" rule applied: `None` when
    /// the pool may grow without bound.
    pub fn max_connections_limit(&self) -> Option<NonZeroU16> {
        NonZeroU16::new(self.max_connections)
    }

    pub fn max_idle_connections(&self) -> u16 {
        self.max_idle_connections
    }
}

/// Collects options through chained calls and applies them on `build`.
///
/// Every call enqueues a transform instead of storing a value, so two calls
/// for the same field compose in call order.
#[derive(Debug)]
pub struct ServerConfigBuilder {
    options: Vec<ServerOption>,
}

impl ServerConfigBuilder {
    pub fn option(mut self, opt: ServerOption) -> Self {
        self.options.push(opt);
        self
    }

    pub fn options<I>(mut self, opts: I) -> Self
    where
        I: IntoIterator<Item = ServerOption>,
    {
        self.options.extend(opts);
        self
    }

    pub fn connection_options<F>(self, f: F) -> Self
    where
        F: FnOnce(Vec<ConnectionOption>) -> Vec<ConnectionOption> + Send + 'static,
    {
        self.option(ServerOption::connection_options(f))
    }

    pub fn heartbeat_interval<F>(self, f: F) -> Self
    where
        F: FnOnce(Duration) -> Duration + Send + 'static,
    {
        self.option(ServerOption::heartbeat_interval(f))
    }

    pub fn heartbeat_timeout<F>(self, f: F) -> Self
    where
        F: FnOnce(Duration) -> Duration + Send + 'static,
    {
        self.option(ServerOption::heartbeat_timeout(f))
    }

    pub fn max_connections<F>(self, f: F) -> Self
    where
        F: FnOnce(u16) -> u16 + Send + 'static,
    {
        self.option(ServerOption::max_connections(f))
    }

    pub fn max_idle_connections<F>(self, f: F) -> Self
    where
        F: FnOnce(u16) -> u16 + Send + 'static,
    {
        self.option(ServerOption::max_idle_connections(f))
    }

    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        ServerConfig::from_options(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_gives_defaults() {
        let cfg = ServerConfig::from_options(Vec::<ServerOption>::new()).unwrap();

        assert!(cfg.connection_options().is_empty());
        assert_eq!(cfg.heartbeat_interval(), Duration::from_secs(10));
        assert_eq!(cfg.heartbeat_timeout(), Duration::from_secs(30));
        assert_eq!(cfg.max_connections(), 100);
        assert_eq!(cfg.max_idle_connections(), 100);
        assert_eq!(cfg, ServerConfig::default());
    }

    #[test]
    fn builder_applies_in_call_order() {
        let cfg = ServerConfig::builder()
            .max_connections(|n| n + 10)
            .max_connections(|n| n * 2)
            .build()
            .unwrap();

        assert_eq!(cfg.max_connections(), 220);
    }

    #[test]
    fn builder_mixes_chained_and_prebuilt_options() {
        let cfg = ServerConfig::builder()
            .heartbeat_interval(|d| d + Duration::from_secs(5))
            .options([ServerOption::heartbeat_timeout(|_| Duration::from_secs(2))])
            .option(ServerOption::max_idle_connections(|_| 4))
            .build()
            .unwrap();

        assert_eq!(cfg.heartbeat_interval(), Duration::from_secs(15));
        assert_eq!(cfg.heartbeat_timeout(), Duration::from_secs(2));
        assert_eq!(cfg.max_idle_connections(), 4);
    }

    #[test]
    fn zero_max_connections_is_unlimited() {
        let cfg = ServerConfig::builder()
            .max_connections(|_| 0)
            .build()
            .unwrap();

        assert_eq!(cfg.max_connections(), 0);
        assert_eq!(cfg.max_connections_limit(), None);
        assert_eq!(
            ServerConfig::default().max_connections_limit(),
            NonZeroU16::new(100)
        );
    }

    #[test]
    fn inconsistent_caps_are_accepted() {
        let cfg = ServerConfig::builder()
            .max_connections(|_| 5)
            .max_idle_connections(|_| 50)
            .heartbeat_interval(|_| Duration::ZERO)
            .build()
            .unwrap();

        assert_eq!(cfg.max_connections(), 5);
        assert_eq!(cfg.max_idle_connections(), 50);
        assert_eq!(cfg.heartbeat_interval(), Duration::ZERO);
    }

    #[test]
    fn failure_stops_the_build() {
        let err = ServerConfig::builder()
            .max_connections(|_| 1)
            .option(ServerOption::new(|_| {
                Err(ConfigError::option_failed("bad option"))
            }))
            .max_connections(|_| panic!("applied after failure"))
            .build()
            .unwrap_err();

        assert_eq!(err, ConfigError::option_failed("bad option"));
    }
}
