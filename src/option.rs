use std::fmt;
use std::mem;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::connection::ConnectionOption;
use crate::error::ConfigError;

type ApplyFn = dyn FnOnce(&mut ServerConfig) -> Result<(), ConfigError> + Send;

/// A deferred change to a [`ServerConfig`].
///
/// Closures have anonymous types, so the mutation is stored as
/// `Box<dyn FnOnce>`. That lets options built from different closures sit
/// in one `Vec` and be applied in order. `FnOnce` because each option runs
/// at most once, during a single build.
pub struct ServerOption {
    apply: Box<ApplyFn>,
}

impl ServerOption {
    /// Wrap an arbitrary mutation. Returning `Err` aborts the build and the
    /// error is handed back to the caller as-is.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut ServerConfig) -> Result<(), ConfigError> + Send + 'static,
    {
        Self { apply: Box::new(f) }
    }

    /// Transform the list of connection options. The transform receives the
    /// current list, in insertion order, and returns the replacement.
    pub fn connection_options<F>(f: F) -> Self
    where
        F: FnOnce(Vec<ConnectionOption>) -> Vec<ConnectionOption> + Send + 'static,
    {
        Self::new(move |cfg| {
            let current = mem::take(&mut cfg.connection_options);
            cfg.connection_options = f(current);
            Ok(())
        })
    }

    /// Transform the time between heartbeats.
    pub fn heartbeat_interval<F>(f: F) -> Self
    where
        F: FnOnce(Duration) -> Duration + Send + 'static,
    {
        Self::new(move |cfg| {
            cfg.heartbeat_interval = f(cfg.heartbeat_interval);
            Ok(())
        })
    }

    /// Transform how long a heartbeat may take before it counts as failed.
    pub fn heartbeat_timeout<F>(f: F) -> Self
    where
        F: FnOnce(Duration) -> Duration + Send + 'static,
    {
        Self::new(move |cfg| {
            cfg.heartbeat_timeout = f(cfg.heartbeat_timeout);
            Ok(())
        })
    }

    /// Transform the connection cap. A result of 0 means no upper limit.
    pub fn max_connections<F>(f: F) -> Self
    where
        F: FnOnce(u16) -> u16 + Send + 'static,
    {
        Self::new(move |cfg| {
            cfg.max_connections = f(cfg.max_connections);
            Ok(())
        })
    }

    pub fn max_idle_connections<F>(f: F) -> Self
    where
        F: FnOnce(u16) -> u16 + Send + 'static,
    {
        Self::new(move |cfg| {
            cfg.max_idle_connections = f(cfg.max_idle_connections);
            Ok(())
        })
    }

    pub(crate) fn apply(self, cfg: &mut ServerConfig) -> Result<(), ConfigError> {
        (self.apply)(cfg)
    }
}

impl fmt::Debug for ServerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerOption").finish_non_exhaustive()
    }
}
