//! Rewrite a loose date/time match into canonical `YYYY-MM-DDTHH:MM:SS.sssZ`.
//!
//! The rewrite is a fixed sequence of text edits. Separators are re-inserted
//! at fixed offsets of the split field list before field widths are known,
//! so inputs with unexpected field counts come out malformed and later fail
//! to parse; that outcome is deterministic and is left as is.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use regex::Regex;

/// Characters that delimit fields in a raw match.
const FIELD_SEPARATORS: [char; 5] = ['-', ':', ' ', 'T', '.'];

/// Separator inserted at each offset of the split field list, in order.
/// Offsets are cumulative: each one assumes the earlier insertions happened.
const SKELETON: [(usize, &str); 6] = [(1, "-"), (3, "-"), (5, "T"), (7, ":"), (9, ":"), (11, ".")];

/// Canonical timestamp format accepted by [`parse_canonical`].
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

static TWO_DIGIT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})\b").expect("Invalid two-digit year regex"));

static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\.([0-9]+)?Z?)$").expect("Invalid fraction regex"));

static LONG_FRACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.([0-9]+)([0-9]{3})Z$").expect("Invalid long fraction regex")
});

static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z$")
        .expect("Invalid canonical datetime regex")
});

/// Normalize a raw match.
///
/// With `pad_single_digit_fields` off, single-digit month, day, hour, minute
/// and second fields are left unpadded (and the result will not parse).
pub fn normalize(raw: &str, pad_single_digit_fields: bool) -> String {
    // Upper-casing also turns a trailing `z` into `Z`.
    let upper = raw.to_uppercase();

    let mut fields: Vec<&str> = upper.split(FIELD_SEPARATORS.as_slice()).collect();
    for (offset, separator) in SKELETON {
        let at = offset.min(fields.len());
        fields.insert(at, separator);
    }
    let joined = fields.concat();

    // Two-digit years are taken to be in the 2000s.
    let with_year = TWO_DIGIT_YEAR.replace(&joined, "20${1}");
    // Left-pad the fraction into `.000` and make sure it ends in `Z`.
    let with_fraction = FRACTION.replace(&with_year, ".000${2}Z");
    // Keep only the last three fraction digits.
    let trimmed = LONG_FRACTION.replace(&with_fraction, ".${2}Z");

    if pad_single_digit_fields {
        pad_single_digits(&trimmed)
    } else {
        trimmed.into_owned()
    }
}

/// Left-pad every digit run of length one with `0`.
fn pad_single_digits(text: &str) -> String {
    let mut padded = String::with_capacity(text.len() + 5);
    let mut run = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            run.push(c);
            continue;
        }
        flush_run(&mut padded, &mut run);
        padded.push(c);
    }
    flush_run(&mut padded, &mut run);
    padded
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.len() == 1 {
        out.push('0');
    }
    out.push_str(run);
    run.clear();
}

/// Parse a canonical string as a UTC timestamp.
///
/// Returns `None` unless the text has the exact canonical shape and names a
/// real calendar date and time. Second `60` and hour `24` are rejected.
pub fn parse_canonical(normalized: &str) -> Option<DateTime<Utc>> {
    if !CANONICAL.is_match(normalized) {
        return None;
    }
    NaiveDateTime::parse_from_str(normalized, CANONICAL_FORMAT)
        .ok()
        // chrono reads `:60` as a leap second, carried in the nanoseconds.
        .filter(|dt| dt.nanosecond() < 1_000_000_000)
        .map(|dt| dt.and_utc())
}
