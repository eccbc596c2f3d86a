//! Text protocol spoken to the pin server.
//!
//! Commands are plain ASCII, one per write, with no framing, no terminator
//! and no reply:
//!
//! ```text
//! <numbering> <pin_number> <action> <time_ms>
//! ```
//!
//! | Example | Meaning |
//! |---------|---------|
//! | `b 8 on 2000` | pin 8 (board numbering) on, off again after 2 s |
//! | `b 8 blink 0` | blink pin 8 |
//! | `h 3 off 0` | pin 3 (header numbering) off |

// ============================================================================
// Submodules
// ============================================================================

/// Actions and command encoding.
pub mod command;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{Action, Command};
