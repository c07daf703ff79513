use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection status code, numbered like the WebSocket ready states.
///
/// Deliberately an open set rather than a closed enum: the underlying client
/// may report codes this crate has never heard of, and those must degrade to
/// the disconnected visual instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocketStatus(u16);

impl SocketStatus {
    pub const CONNECTING: SocketStatus = SocketStatus(0);
    pub const OPEN: SocketStatus = SocketStatus(1);
    pub const CLOSING: SocketStatus = SocketStatus(2);
    pub const CLOSED: SocketStatus = SocketStatus(3);

    pub const fn from_code(code: u16) -> Self {
        SocketStatus(code)
    }

    pub const fn code(self) -> u16 {
        self.0
    }

    pub const fn is_open(self) -> bool {
        self.0 == Self::OPEN.0
    }
}

impl Default for SocketStatus {
    fn default() -> Self {
        Self::CONNECTING
    }
}

impl fmt::Display for SocketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CONNECTING => f.write_str("connecting"),
            Self::OPEN => f.write_str("open"),
            Self::CLOSING => f.write_str("closing"),
            Self::CLOSED => f.write_str("closed"),
            Self(code) => write!(f, "unknown({code})"),
        }
    }
}

// Blueprint palette the dot has always used.
const GREEN_LIGHT: &str = "#3dcc91";
const GREEN: &str = "#0f9960";
const GRAY: &str = "#8a9ba8";

/// One row of the status → visual lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusVisual {
    /// CSS color for the dot fill.
    pub color: &'static str,
    /// Human-readable text, surfaced through the dot's `title` attribute.
    pub label: &'static str,
}

impl StatusVisual {
    /// Fixed lookup table for the indicator. Anything outside the three
    /// mapped states (`CLOSED` included) takes the explicit fallback arm
    /// and renders as disconnected.
    pub fn lookup(status: SocketStatus) -> StatusVisual {
        match status {
            SocketStatus::CONNECTING => StatusVisual {
                color: GREEN_LIGHT,
                label: "Connecting...",
            },
            SocketStatus::OPEN => StatusVisual {
                color: GREEN,
                label: "Connected",
            },
            SocketStatus::CLOSING => StatusVisual {
                color: GRAY,
                label: "Closing...",
            },
            _ => StatusVisual {
                color: GRAY,
                label: "Disconnected",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states_map_to_their_visuals() {
        assert_eq!(StatusVisual::lookup(SocketStatus::CONNECTING).label, "Connecting...");
        assert_eq!(StatusVisual::lookup(SocketStatus::OPEN).label, "Connected");
        assert_eq!(StatusVisual::lookup(SocketStatus::CLOSING).label, "Closing...");
    }

    #[test]
    fn closed_falls_back_to_disconnected() {
        let visual = StatusVisual::lookup(SocketStatus::CLOSED);
        assert_eq!(visual.label, "Disconnected");
        assert_eq!(visual.color, GRAY);
    }

    #[test]
    fn unrecognized_code_falls_back_to_disconnected() {
        let visual = StatusVisual::lookup(SocketStatus::from_code(42));
        assert_eq!(visual.label, "Disconnected");
    }

    #[test]
    fn codes_round_trip() {
        for code in 0..8 {
            assert_eq!(SocketStatus::from_code(code).code(), code);
        }
        assert!(SocketStatus::OPEN.is_open());
        assert!(!SocketStatus::CLOSED.is_open());
    }

    #[test]
    fn default_is_connecting() {
        assert_eq!(SocketStatus::default(), SocketStatus::CONNECTING);
    }
}
