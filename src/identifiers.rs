//! Type-safe identifiers for remote pins.
//!
//! Newtype wrappers keep pin numbers and numbering schemes from being
//! mixed up with durations or arbitrary strings.
//!
//! | Type | Wire form | Example |
//! |------|-----------|---------|
//! | [`PinNumber`] | decimal integer | `8` |
//! | [`Numbering`] | opaque token | `b` |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Numbering token used when the caller does not pick one.
pub const DEFAULT_NUMBERING: &str = "b";

// ============================================================================
// PinNumber
// ============================================================================

/// Pin identifier on the remote server.
///
/// Not range-checked: the value is forwarded to the server as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinNumber(i64);

impl PinNumber {
    /// Creates a pin number.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

macro_rules! impl_pin_from {
    ($($int:ty),*) => {
        $(
            impl From<$int> for PinNumber {
                #[inline]
                fn from(value: $int) -> Self {
                    Self(i64::from(value))
                }
            }
        )*
    };
}

impl_pin_from!(i8, i16, i32, i64, u8, u16, u32);

impl fmt::Display for PinNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Numbering
// ============================================================================

/// Pin numbering scheme token.
///
/// Tells the server which numbering convention the pin number uses
/// (board, header, ...). The client never interprets it and sends it
/// verbatim. Defaults to `"b"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Numbering(String);

impl Numbering {
    /// Creates a numbering token.
    #[inline]
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as sent on the wire.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Numbering {
    fn default() -> Self {
        Self(DEFAULT_NUMBERING.to_string())
    }
}

impl From<&str> for Numbering {
    #[inline]
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Numbering {
    #[inline]
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl AsRef<str> for Numbering {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Numbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
