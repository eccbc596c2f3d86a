//! TCP transport layer.
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  RemoteServer   │                              │  Pin server     │
//! │  RemotePin ...  │            TCP               │  (device)       │
//! │  → Connection   │─────────────────────────────►│                 │
//! │                 │   "<numbering> <pin> ..."    │                 │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Connection Lifecycle
//!
//! 1. `Connection::open` - Resolve and connect, fail on handshake error
//! 2. `Connection::send` - Write one command, read nothing
//! 3. `Connection::close` - Shut down and release the stream

// ============================================================================
// Submodules
// ============================================================================

/// Shared TCP stream.
pub mod connection;

// ============================================================================
// Re-exports
// ============================================================================

pub use connection::Connection;
