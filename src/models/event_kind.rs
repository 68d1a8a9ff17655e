use serde::{Serialize, Serializer};
use std::fmt;

/// Kind of a time-clock punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Entry,
    LunchOut,
    LunchIn,
    Exit,
    /// Additional punches (`extra_1`, `extra_2`, ...), kept in punch order.
    Extra(u8),
}

impl EventKind {
    /// Parse a kind as typed by the user.
    ///
    /// Accepts `entry`, `lunch_out`, `lunch_in`, `exit` and `extra_N`
    /// (dashes are accepted in place of underscores, case is ignored).
    pub fn ek_from_str(s: &str) -> Option<Self> {
        let norm = s.trim().to_lowercase().replace('-', "_");
        match norm.as_str() {
            "entry" | "in" => Some(Self::Entry),
            "lunch_out" => Some(Self::LunchOut),
            "lunch_in" => Some(Self::LunchIn),
            "exit" | "out" => Some(Self::Exit),
            other => other
                .strip_prefix("extra_")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| *n > 0)
                .map(Self::Extra),
        }
    }

    pub fn ek_as_str(&self) -> String {
        match self {
            EventKind::Entry => "entry".to_string(),
            EventKind::LunchOut => "lunch_out".to_string(),
            EventKind::LunchIn => "lunch_in".to_string(),
            EventKind::Exit => "exit".to_string(),
            EventKind::Extra(n) => format!("extra_{n}"),
        }
    }

    /// Human label used in tables.
    pub fn label(&self) -> String {
        match self {
            EventKind::Entry => "Entry".to_string(),
            EventKind::LunchOut => "Lunch out".to_string(),
            EventKind::LunchIn => "Lunch in".to_string(),
            EventKind::Exit => "Exit".to_string(),
            EventKind::Extra(n) => format!("Extra {n}"),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ek_as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.ek_as_str())
    }
}
