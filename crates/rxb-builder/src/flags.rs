//! Regex mode flags.

use std::fmt;

/// A mode flag applied to the whole pattern at compile time.
///
/// Flags render as the conventional single-letter inline flags, so a flag set
/// can be handed to any engine that accepts `(?ims)` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flag {
    /// `i`: letters match regardless of case.
    CaseInsensitive,
    /// `m`: `^` and `$` match at line boundaries.
    MultiLine,
    /// `s`: `.` also matches `\n`.
    DotMatchesNewLine,
}

impl Flag {
    /// Single-letter inline form of the flag.
    pub fn as_char(self) -> char {
        match self {
            Flag::CaseInsensitive => 'i',
            Flag::MultiLine => 'm',
            Flag::DotMatchesNewLine => 's',
        }
    }

    /// Parse a single-letter inline flag.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(Flag::CaseInsensitive),
            'm' => Some(Flag::MultiLine),
            's' => Some(Flag::DotMatchesNewLine),
            _ => None,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
