use std::time::Duration;

/// A lower-level setting for the connection-establishment layer.
///
/// The server configuration never looks inside these. It stores them in the
/// order they were supplied and hands the list over untouched; only the
/// connection layer gives them meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionOption {
    /// Name reported to the server in the connection handshake.
    AppName(String),
    ConnectTimeout(Duration),
    IdleTimeout(Duration),
    LifeTimeout(Duration),
    ReadTimeout(Duration),
    WriteTimeout(Duration),
    /// TCP keep-alive period. `Duration::ZERO` disables keep-alive.
    KeepAlive(Duration),
}
