//! Error types for remoteio.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use remoteio::{RemoteServer, Result};
//!
//! async fn example(server: &RemoteServer) -> Result<()> {
//!     server.pin(8).on_for(2000).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Connection | [`Error::Connection`], [`Error::ConnectionTimeout`] |
//! | Transport | [`Error::Transport`], [`Error::ConnectionClosed`] |
//! | External | [`Error::Io`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes relevant context for debugging.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when the server configuration is incomplete.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Connection Errors
    // ========================================================================
    /// TCP connection failed.
    ///
    /// Returned when the handshake with the pin server does not succeed
    /// (refused, unreachable host, name resolution failure).
    #[error("Connection to {host}:{port} failed: {source}")]
    Connection {
        /// Server host as given by the caller.
        host: String,
        /// Server port.
        port: u16,
        /// Underlying I/O error.
        #[source]
        source: IoError,
    },

    /// Connection attempt exceeded the configured timeout.
    #[error("Connection to {host}:{port} timed out after {timeout_ms}ms")]
    ConnectionTimeout {
        /// Server host as given by the caller.
        host: String,
        /// Server port.
        port: u16,
        /// Milliseconds waited before timeout.
        timeout_ms: u64,
    },

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Sending a command failed.
    ///
    /// Returned when the stream was reset or broken by the peer.
    #[error("Failed to send {command:?}: {source}")]
    Transport {
        /// Wire command that could not be sent.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: IoError,
    },

    /// Connection was closed by the caller.
    ///
    /// Returned by pin actions issued after [`RemoteServer::close`].
    ///
    /// [`RemoteServer::close`]: crate::RemoteServer::close
    #[error("Connection closed")]
    ConnectionClosed,

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    ///
    /// Returned when shutting a connection down fails.
    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(host: impl Into<String>, port: u16, source: IoError) -> Self {
        Self::Connection {
            host: host.into(),
            port,
            source,
        }
    }

    /// Creates a connection timeout error.
    #[inline]
    pub fn connection_timeout(host: impl Into<String>, port: u16, timeout_ms: u64) -> Self {
        Self::ConnectionTimeout {
            host: host.into(),
            port,
            timeout_ms,
        }
    }

    /// Creates a transport error.
    #[inline]
    pub fn transport(command: impl Into<String>, source: IoError) -> Self {
        Self::Transport {
            command: command.into(),
            source,
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the connection could not be established.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::ConnectionTimeout { .. }
        )
    }

    /// Returns `true` if a send on an opened connection failed.
    #[inline]
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::ConnectionClosed)
    }

    /// Returns `true` if this is a timeout error.
    #[inline]
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ConnectionTimeout { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
