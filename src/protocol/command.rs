//! Pin actions and their text encoding.
//!
//! A command is one line of space-delimited ASCII with no terminator:
//!
//! ```text
//! <numbering> <pin_number> <action> <time_ms>
//! ```
//!
//! | Action | Token | `time_ms` |
//! |--------|-------|-----------|
//! | [`Action::On`] | `on` | caller value, default `0` |
//! | [`Action::Blink`] | `blink` | always `0` |
//! | [`Action::Pulse`] | `pulse` | always `0` |
//! | [`Action::Off`] | `off` | always `0` |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::{Numbering, PinNumber};

// ============================================================================
// Action
// ============================================================================

/// Pin action understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Drive the pin high, optionally switching off after `time_ms`.
    On,
    /// Blink the pin.
    Blink,
    /// Pulse the pin once.
    Pulse,
    /// Drive the pin low.
    Off,
}

impl Action {
    /// All actions in declaration order.
    pub const ALL: [Action; 4] = [Action::On, Action::Blink, Action::Pulse, Action::Off];

    /// Returns the wire token.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Blink => "blink",
            Self::Pulse => "pulse",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Command
// ============================================================================

/// A single command addressed to one pin.
///
/// Only [`Action::On`] can carry a non-zero duration; use
/// [`Command::on_for`] for that. [`Command::new`] always encodes `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    numbering: &'a Numbering,
    pin_number: PinNumber,
    action: Action,
    time_ms: u64,
}

impl<'a> Command<'a> {
    /// Creates a command with a zero duration.
    #[inline]
    #[must_use]
    pub const fn new(numbering: &'a Numbering, pin_number: PinNumber, action: Action) -> Self {
        Self {
            numbering,
            pin_number,
            action,
            time_ms: 0,
        }
    }

    /// Creates an `on` command that asks the server to switch off after `time_ms`.
    #[inline]
    #[must_use]
    pub const fn on_for(numbering: &'a Numbering, pin_number: PinNumber, time_ms: u64) -> Self {
        Self {
            numbering,
            pin_number,
            action: Action::On,
            time_ms,
        }
    }

    /// Returns the numbering scheme.
    #[inline]
    #[must_use]
    pub const fn numbering(&self) -> &'a Numbering {
        self.numbering
    }

    /// Returns the target pin.
    #[inline]
    #[must_use]
    pub const fn pin_number(&self) -> PinNumber {
        self.pin_number
    }

    /// Returns the action.
    #[inline]
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Returns the duration sent with the action.
    #[inline]
    #[must_use]
    pub const fn time_ms(&self) -> u64 {
        self.time_ms
    }

    /// Encodes the command as sent on the wire.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Action token followed by its duration.
    fn action_token(&self) -> String {
        format!("{} {}", self.action, self.time_ms)
    }
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.numbering,
            self.pin_number,
            self.action_token()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_action_tokens() {
        let tokens: Vec<_> = Action::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(tokens, ["on", "blink", "pulse", "off"]);
    }

    #[test]
    fn test_on_for_encoding() {
        let numbering = Numbering::from("b");
        let cmd = Command::on_for(&numbering, PinNumber::new(8), 2000);
        assert_eq!(cmd.encode(), "b 8 on 2000");
    }

    #[test]
    fn test_zero_duration_encoding() {
        let numbering = Numbering::from("h");
        let pin = PinNumber::new(3);

        assert_eq!(Command::new(&numbering, pin, Action::On).encode(), "h 3 on 0");
        assert_eq!(Command::new(&numbering, pin, Action::Blink).encode(), "h 3 blink 0");
        assert_eq!(Command::new(&numbering, pin, Action::Pulse).encode(), "h 3 pulse 0");
        assert_eq!(Command::new(&numbering, pin, Action::Off).encode(), "h 3 off 0");
    }

    #[test]
    fn test_no_terminator() {
        let numbering = Numbering::default();
        let encoded = Command::new(&numbering, PinNumber::new(1), Action::Off).encode();
        assert!(!encoded.ends_with('\n'));
        assert!(!encoded.ends_with('\r'));
        assert!(!encoded.ends_with(' '));
    }

    #[test]
    fn test_negative_pin_is_forwarded() {
        let numbering = Numbering::default();
        let cmd = Command::new(&numbering, PinNumber::new(-1), Action::Pulse);
        assert_eq!(cmd.encode(), "b -1 pulse 0");
    }

    #[test]
    fn test_action_serde() {
        let json = serde_json::to_string(&Action::Blink).expect("serialize");
        assert_eq!(json, "\"blink\"");

        let action: Action = serde_json::from_str("\"pulse\"").expect("deserialize");
        assert_eq!(action, Action::Pulse);
    }

    proptest! {
        #[test]
        fn prop_encoding_matches_wire_format(
            token in "[a-zA-Z0-9_]{1,8}",
            pin in any::<i64>(),
            time_ms in any::<u64>(),
        ) {
            let numbering = Numbering::from(token.as_str());
            let pin_number = PinNumber::new(pin);

            for action in [Action::Blink, Action::Pulse, Action::Off, Action::On] {
                let encoded = Command::new(&numbering, pin_number, action).encode();
                prop_assert_eq!(encoded, format!("{token} {pin} {action} 0"));
            }

            let encoded = Command::on_for(&numbering, pin_number, time_ms).encode();
            prop_assert_eq!(encoded, format!("{token} {pin} on {time_ms}"));
        }
    }
}
