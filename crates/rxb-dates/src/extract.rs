//! Date/time extraction from free text.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::{debug, warn};

use crate::normalize::{normalize, parse_canonical};

/// Loose date/time: a 2-4 digit year, two 1-2 digit date fields, a space or
/// `T`, three 1-2 digit time fields and an optional fraction with optional
/// `Z`. Fields are separated by `-`, `:` or a space.
static LOOSE_DATETIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)[0-9]{2,4}[-: ][0-9]{1,2}[-: ][0-9]{1,2}(?:\s|T)\s?[0-9]{1,2}[-: ][0-9]{1,2}[-: ][0-9]{1,2}(?:\.[0-9]{1,3}Z?)?",
    )
    .expect("Invalid loose datetime regex")
});

/// Parsed form of one raw match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedDate {
    /// A real calendar timestamp.
    Valid(DateTime<Utc>),
    /// Normalized text that is not a real calendar timestamp.
    Invalid { normalized: String },
}

impl ExtractedDate {
    pub fn is_valid(&self) -> bool {
        matches!(self, ExtractedDate::Valid(_))
    }

    /// The timestamp, if valid.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            ExtractedDate::Valid(dt) => Some(*dt),
            ExtractedDate::Invalid { .. } => None,
        }
    }
}

impl fmt::Display for ExtractedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractedDate::Valid(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            ExtractedDate::Invalid { .. } => f.write_str("Invalid Date"),
        }
    }
}

/// Raw matches and their parsed dates, aligned by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateExtraction {
    /// Matched substrings in order of occurrence, verbatim.
    pub raw_matches: Vec<String>,
    /// `normalized[i]` is the canonical rewrite of `raw_matches[i]`.
    pub normalized: Vec<String>,
    /// `extracted_dates[i]` is the parsed form of `raw_matches[i]`.
    pub extracted_dates: Vec<ExtractedDate>,
}

impl DateExtraction {
    pub fn len(&self) -> usize {
        self.raw_matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_matches.is_empty()
    }

    /// Iterate `(raw, parsed)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtractedDate)> {
        self.raw_matches
            .iter()
            .map(String::as_str)
            .zip(self.extracted_dates.iter())
    }

    /// Iterate `(raw, normalized, parsed)` triples.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &ExtractedDate)> {
        self.iter()
            .zip(self.normalized.iter())
            .map(|((raw, date), normalized)| (raw, normalized.as_str(), date))
    }

    /// Number of matches that parsed to a real timestamp.
    pub fn valid_count(&self) -> usize {
        self.extracted_dates.iter().filter(|d| d.is_valid()).count()
    }
}

/// Extraction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateExtractor {
    /// Zero-pad single-digit month, day, hour, minute and second fields.
    pub pad_single_digit_fields: bool,
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self {
            pad_single_digit_fields: true,
        }
    }
}

impl DateExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor that skips single-digit padding.
    pub fn without_padding() -> Self {
        Self {
            pad_single_digit_fields: false,
        }
    }

    /// Canonical form of one raw match.
    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw, self.pad_single_digit_fields)
    }

    /// Normalize and parse one raw match.
    pub fn parse(&self, raw: &str) -> ExtractedDate {
        classify(raw, self.normalize(raw))
    }

    /// Find every non-overlapping loose date/time in `text`, left to right.
    ///
    /// Text without matches yields an empty extraction. An invalid date is
    /// kept in place as [`ExtractedDate::Invalid`] and does not stop the scan.
    pub fn extract(&self, text: &str) -> DateExtraction {
        let raw_matches: Vec<String> = LOOSE_DATETIME
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        let normalized: Vec<String> = raw_matches
            .iter()
            .map(|raw| self.normalize(raw))
            .collect();
        let extracted_dates = raw_matches
            .iter()
            .zip(&normalized)
            .map(|(raw, normalized)| classify(raw, normalized.clone()))
            .collect();
        DateExtraction {
            raw_matches,
            normalized,
            extracted_dates,
        }
    }
}

fn classify(raw: &str, normalized: String) -> ExtractedDate {
    match parse_canonical(&normalized) {
        Some(dt) => {
            debug!(raw, normalized = %normalized, "parsed date");
            ExtractedDate::Valid(dt)
        }
        None => {
            warn!(raw, normalized = %normalized, "match is not a valid date");
            ExtractedDate::Invalid { normalized }
        }
    }
}

/// Extract dates with the default settings.
pub fn extract_dates(text: &str) -> DateExtraction {
    DateExtractor::default().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_requires_time_part() {
        assert!(!LOOSE_DATETIME.is_match("1999-08-28"));
        assert!(LOOSE_DATETIME.is_match("1999-08-28 10:20:30"));
        assert!(LOOSE_DATETIME.is_match("1999-08-28t10:20:30.1z"));
    }

    #[test]
    fn test_display() {
        let date = DateExtractor::new().parse("1999-8-28T10:20:4.20Z");
        assert_eq!(date.to_string(), "1999-08-28T10:20:04.020Z");

        let invalid = DateExtractor::new().parse("1999-13-28T10:20:4");
        assert_eq!(invalid.to_string(), "Invalid Date");
        assert_eq!(
            invalid,
            ExtractedDate::Invalid {
                normalized: "1999-13-28T10:20:04.000Z".to_string()
            }
        );
    }
}
