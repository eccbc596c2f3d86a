//! Connection manager for a pin server.
//!
//! A [`RemoteServer`] owns the TCP stream. It hands out [`RemotePin`]
//! handles that share the stream, and closes it on request.
//!
//! # Lifecycle
//!
//! 1. [`RemoteServer::connect`] - resolve and connect, or fail
//! 2. [`RemoteServer::pin`] - bind handles to pins (no I/O)
//! 3. Pin actions - one command per call
//! 4. [`RemoteServer::close`] - release the stream
//!
//! Dropping the server without calling [`RemoteServer::close`] leaves the
//! stream open for as long as any pin handle is alive.

// ============================================================================
// Imports
// ============================================================================

use std::net::SocketAddr;

use tracing::debug;

use crate::error::Result;
use crate::identifiers::{Numbering, PinNumber};
use crate::transport::Connection;

use super::builder::RemoteServerBuilder;
use super::config::ServerConfig;
use super::pin::RemotePin;

// ============================================================================
// RemoteServer
// ============================================================================

/// Open connection to a remote pin server.
///
/// # Example
///
/// ```no_run
/// use remoteio::RemoteServer;
///
/// # async fn example() -> remoteio::Result<()> {
/// let server = RemoteServer::connect("192.168.0.90", 8509).await?;
///
/// let relay = server.pin(8);
/// relay.on_for(2000).await?.blink().await?;
/// relay.off().await?;
///
/// server.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RemoteServer {
    /// Settings the connection was opened with.
    config: ServerConfig,
    /// Stream shared with every pin handle.
    connection: Connection,
}

impl RemoteServer {
    /// Creates a builder for a configured connection.
    #[inline]
    #[must_use]
    pub fn builder() -> RemoteServerBuilder {
        RemoteServerBuilder::new()
    }

    /// Connects to `host:port` with platform socket defaults.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`](crate::Error::Config) if `host` is empty
    /// - [`Error::Connection`](crate::Error::Connection) if the handshake fails
    pub async fn connect(host: impl Into<String>, port: u16) -> Result<Self> {
        Self::connect_with(ServerConfig::new(host, port)).await
    }

    /// Connects using an explicit [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// - [`Error::Config`](crate::Error::Config) if the config is invalid
    /// - [`Error::Connection`](crate::Error::Connection) if the handshake fails
    /// - [`Error::ConnectionTimeout`](crate::Error::ConnectionTimeout) if the
    ///   configured timeout elapses
    pub async fn connect_with(config: ServerConfig) -> Result<Self> {
        config.validate()?;

        debug!(
            host = %config.host,
            port = config.port,
            connect_timeout_ms = ?config.connect_timeout_ms,
            nodelay = config.nodelay,
            "Connecting to pin server"
        );

        let connection = Connection::open(
            &config.host,
            config.port,
            config.connect_timeout(),
            config.nodelay,
        )
        .await?;

        Ok(Self { config, connection })
    }

    /// Returns a handle to `pin_number` using the default numbering (`"b"`).
    ///
    /// Performs no I/O and no validation.
    #[inline]
    #[must_use]
    pub fn pin(&self, pin_number: impl Into<PinNumber>) -> RemotePin {
        self.pin_with(pin_number, Numbering::default())
    }

    /// Returns a handle to `pin_number` in the given numbering scheme.
    ///
    /// Performs no I/O and no validation.
    #[inline]
    #[must_use]
    pub fn pin_with(
        &self,
        pin_number: impl Into<PinNumber>,
        numbering: impl Into<Numbering>,
    ) -> RemotePin {
        RemotePin::new(self.connection.clone(), pin_number.into(), numbering.into())
    }

    /// Closes the stream.
    ///
    /// Pin handles created earlier stay valid as values, but their actions
    /// fail with [`Error::ConnectionClosed`](crate::Error::ConnectionClosed).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the graceful shutdown fails.
    pub async fn close(self) -> Result<()> {
        self.connection.close().await
    }

    /// Returns the configured host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Returns the configured port.
    #[inline]
    #[must_use]
    pub fn port(&self) -> u16 {
        self.config.port
    }

    /// Returns the resolved server address.
    #[inline]
    #[must_use]
    pub fn peer_addr(&self) -> SocketAddr {
        self.connection.peer_addr()
    }

    /// Returns the settings the connection was opened with.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
