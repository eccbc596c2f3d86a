//! Connection settings for a pin server.
//!
//! [`ServerConfig`] is plain data and deserializes from application
//! configuration files:
//!
//! ```
//! use remoteio::ServerConfig;
//!
//! let config: ServerConfig = serde_json::from_str(
//!     r#"{ "host": "192.168.0.90", "port": 8509, "connect_timeout_ms": 3000 }"#,
//! )?;
//! assert_eq!(config.port, 8509);
//! assert!(!config.nodelay);
//! # Ok::<(), serde_json::Error>(())
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Host of the sample pin server used in the documentation.
///
/// Never applied implicitly.
pub const SAMPLE_HOST: &str = "192.168.0.90";

/// Port of the sample pin server used in the documentation.
///
/// Never applied implicitly.
pub const SAMPLE_PORT: u16 = 8509;

// ============================================================================
// ServerConfig
// ============================================================================

/// Address and socket options of a pin server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host name or IP address.
    pub host: String,

    /// TCP port.
    pub port: u16,

    /// Connect timeout in milliseconds. `None` keeps the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,

    /// Disable Nagle's algorithm on the stream.
    #[serde(default)]
    pub nodelay: bool,
}

impl ServerConfig {
    /// Creates a config with platform defaults for every socket option.
    #[inline]
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            connect_timeout_ms: None,
            nodelay: false,
        }
    }

    /// Sets the connect timeout.
    #[inline]
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Sets `TCP_NODELAY` on the stream.
    #[inline]
    #[must_use]
    pub fn with_nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }

    /// Returns the connect timeout as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    /// Checks that the config can be used to connect.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the host is empty.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::config("Server host must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_platform_defaults() {
        let config = ServerConfig::new("localhost", 9000);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 9000);
        assert_eq!(config.connect_timeout(), None);
        assert!(!config.nodelay);
    }

    #[test]
    fn test_with_connect_timeout() {
        let config =
            ServerConfig::new("localhost", 9000).with_connect_timeout(Duration::from_millis(1500));
        assert_eq!(config.connect_timeout_ms, Some(1500));
        assert_eq!(config.connect_timeout(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let err = ServerConfig::new("  ", 9000).validate().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(ServerConfig::new("localhost", 9000).validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: ServerConfig =
            serde_json::from_str(r#"{ "host": "10.0.0.2", "port": 8509 }"#).expect("deserialize");
        assert_eq!(config, ServerConfig::new("10.0.0.2", 8509));
    }

    #[test]
    fn test_serialize_skips_unset_timeout() {
        let json = serde_json::to_value(ServerConfig::new(SAMPLE_HOST, SAMPLE_PORT))
            .expect("serialize");
        assert!(json.get("connect_timeout_ms").is_none());
        assert_eq!(json["port"], 8509);
    }
}
