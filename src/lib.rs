//! remoteio - Remote GPIO control client.
//!
//! This library switches pins on a remote device (a microcontroller or
//! single-board computer running a pin server) over a persistent TCP
//! connection.
//!
//! # Architecture
//!
//! - **Connection manager** ([`RemoteServer`]): owns one TCP stream,
//!   connects on construction, closes on request
//! - **Pin handles** ([`RemotePin`]): encode actions as text commands and
//!   write them to the shared stream
//!
//! Commands are fire-and-forget: nothing is read back, there is no framing
//! and no retry. Timed actions are carried out by the server; the client
//! only transmits the duration.
//!
//! # Quick Start
//!
//! ```no_run
//! use remoteio::{RemoteServer, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let server = RemoteServer::connect("192.168.0.90", 8509).await?;
//!
//!     let pin = server.pin(8);
//!     pin.on_for(2000).await?; // server switches it off after 2 s
//!     pin.blink().await?;
//!     pin.on().await?;
//!     pin.off().await?;
//!
//!     server.close().await
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`RemoteServer`], [`RemotePin`], configuration |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Pin number and numbering newtypes |
//! | [`protocol`] | Wire command encoding |
//! | [`transport`] | TCP transport layer (internal) |

// ============================================================================
// Modules
// ============================================================================

/// Connection manager and pin handles.
///
/// - [`RemoteServer`] - Open connection to a pin server
/// - [`RemotePin`] - Pin-level actions
pub mod client;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for remote pins.
pub mod identifiers;

/// Wire command encoding.
pub mod protocol;

/// TCP transport layer.
///
/// Internal module handling the shared stream.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Client types
pub use client::{RemotePin, RemoteServer, RemoteServerBuilder, ServerConfig};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{Numbering, PinNumber};

// Protocol types
pub use protocol::{Action, Command};
