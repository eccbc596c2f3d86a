//! Builder pattern for server connections.
//!
//! Provides a fluent API for configuring and opening [`RemoteServer`]
//! connections.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use remoteio::RemoteServer;
//!
//! # async fn example() -> remoteio::Result<()> {
//! let server = RemoteServer::builder()
//!     .host("192.168.0.90")
//!     .port(8509)
//!     .connect_timeout(Duration::from_secs(3))
//!     .connect()
//!     .await?;
//! # server.close().await
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::error::{Error, Result};

use super::config::ServerConfig;
use super::server::RemoteServer;

// ============================================================================
// RemoteServerBuilder
// ============================================================================

/// Builder for configuring a [`RemoteServer`] connection.
///
/// Use [`RemoteServer::builder()`] to create a new builder.
#[derive(Debug, Default, Clone)]
pub struct RemoteServerBuilder {
    /// Server host.
    host: Option<String>,
    /// Server port.
    port: Option<u16>,
    /// Connect timeout.
    connect_timeout: Option<Duration>,
    /// `TCP_NODELAY` flag.
    nodelay: bool,
}

// ============================================================================
// RemoteServerBuilder Implementation
// ============================================================================

impl RemoteServerBuilder {
    /// Creates a new builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server host name or IP address.
    #[inline]
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the server port.
    #[inline]
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Bounds the TCP handshake. Unset means the platform default.
    #[inline]
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets `TCP_NODELAY` on the stream.
    #[inline]
    #[must_use]
    pub fn nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }

    /// Builds the config with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if host or port is not set
    /// - [`Error::Config`] if host is empty
    pub fn build(self) -> Result<ServerConfig> {
        let host = self.host.ok_or_else(|| {
            Error::config(
                "Server host is required. Use .host() to set it.\n\
                 Example: RemoteServer::builder().host(\"192.168.0.90\")",
            )
        })?;

        let port = self.port.ok_or_else(|| {
            Error::config(
                "Server port is required. Use .port() to set it.\n\
                 Example: RemoteServer::builder().port(8509)",
            )
        })?;

        let mut config = ServerConfig::new(host, port).with_nodelay(self.nodelay);
        if let Some(timeout) = self.connect_timeout {
            config = config.with_connect_timeout(timeout);
        }

        config.validate()?;
        Ok(config)
    }

    /// Builds the config and connects.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the configuration is incomplete
    /// - [`Error::Connection`] or [`Error::ConnectionTimeout`] if connecting fails
    pub async fn connect(self) -> Result<RemoteServer> {
        let config = self.build()?;
        RemoteServer::connect_with(config).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = RemoteServerBuilder::new();
        assert!(builder.host.is_none());
        assert!(builder.port.is_none());
        assert!(builder.connect_timeout.is_none());
        assert!(!builder.nodelay);
    }

    #[test]
    fn test_build_full_config() {
        let config = RemoteServerBuilder::new()
            .host("10.1.1.1")
            .port(8509)
            .connect_timeout(Duration::from_millis(250))
            .nodelay(true)
            .build()
            .expect("build should succeed");

        assert_eq!(config.host, "10.1.1.1");
        assert_eq!(config.port, 8509);
        assert_eq!(config.connect_timeout_ms, Some(250));
        assert!(config.nodelay);
    }

    #[test]
    fn test_build_fails_without_host() {
        let err = RemoteServerBuilder::new().port(8509).build().unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn test_build_fails_without_port() {
        let err = RemoteServerBuilder::new().host("10.1.1.1").build().unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_build_fails_with_empty_host() {
        let err = RemoteServerBuilder::new().host("").port(1).build().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[tokio::test]
    async fn test_connect_fails_on_config_before_io() {
        let err = RemoteServerBuilder::new().connect().await.unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(!err.is_connection_error());
    }
}
