//! Error types for pattern building and recipe decoding.

use thiserror::Error;

/// Errors raised by builder operations.
///
/// A failed operation leaves the builder exactly as it was before the call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// Character range whose start sorts after its end.
    #[error(
        "Start of character range '{from}' is greater than the end character '{to}', \
         make sure both characters are the same casing."
    )]
    InvalidRange { from: char, to: char },

    /// Number range that contains no integers.
    #[error("Number range {start}..{end} ({kind}) contains no integers")]
    InvalidNumberRange {
        start: i64,
        end: i64,
        kind: &'static str,
    },

    /// Number range that would expand to more than `limit` alternatives.
    #[error("Number range {start}..{end} exceeds {limit} alternatives")]
    NumberRangeTooLarge { start: i64, end: i64, limit: u64 },

    /// The accumulated pattern was rejected by the regex engine.
    #[error("Failed to compile pattern '{pattern}'")]
    Compile {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

/// Errors raised while rebuilding a builder from a recipe record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Text is not JSON, or not shaped like a recipe record.
    #[error("Malformed recipe record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The `flags` key holds a character that is not a known mode flag.
    #[error("Invalid flag '{0}' in recipe record")]
    InvalidFlag(char),
}

/// Result type for builder operations.
pub type Result<T> = std::result::Result<T, BuilderError>;
