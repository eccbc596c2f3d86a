//! Client entities module.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RemoteServer`] | Connection manager (owns the TCP stream) |
//! | [`RemotePin`] | Pin handle (encodes and sends actions) |
//! | [`ServerConfig`] | Address and socket options |
//! | [`RemoteServerBuilder`] | Fluent configuration |
//!
//! # Example
//!
//! ```no_run
//! use remoteio::{RemoteServer, Result};
//!
//! # async fn example() -> Result<()> {
//! let server = RemoteServer::connect("192.168.0.90", 8509).await?;
//!
//! let led = server.pin_with(3, "h");
//! led.blink().await?;
//! led.off().await?;
//!
//! server.close().await
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Builder for server connections.
pub mod builder;

/// Connection settings.
pub mod config;

/// Pin handle and actions.
pub mod pin;

/// Connection manager.
pub mod server;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::RemoteServerBuilder;
pub use config::{SAMPLE_HOST, SAMPLE_PORT, ServerConfig};
pub use pin::RemotePin;
pub use server::RemoteServer;
