use crate::config::ServerConfig;
use crate::error::ConfigError;
use crate::option::ServerOption;
use crate::types::Address;

/// A server endpoint ready to be handed to the monitoring and pooling
/// machinery: its address plus the configuration built for it.
#[derive(Debug)]
pub struct Server {
    address: Address,
    config: ServerConfig,
}

impl Server {
    /// Build the configuration from `options` and attach it to `address`.
    ///
    /// A configuration error is fatal to this server: no `Server` is
    /// produced and the error from the failing option is returned.
    pub fn new<I>(address: impl Into<Address>, options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = ServerOption>,
    {
        let address = address.into();

        let config = match ServerConfig::from_options(options) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%address, error = %e, "server configuration failed");
                return Err(e);
            }
        };

        tracing::info!(
            %address,
            heartbeat_interval = ?config.heartbeat_interval(),
            heartbeat_timeout = ?config.heartbeat_timeout(),
            max_connections = config.max_connections(),
            max_idle_connections = config.max_idle_connections(),
            "server configured"
        );

        Ok(Self { address, config })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
