//! Loose date/time extraction and normalization.
//!
//! - **extract**: find date/time substrings in free text ([`extract_dates`],
//!   [`DateExtractor`])
//! - **normalize**: rewrite a raw match into `YYYY-MM-DDTHH:MM:SS.sssZ` and
//!   parse it ([`normalize`], [`parse_canonical`])
//!
//! Two-digit years are read as 20xx, missing fractional seconds become
//! `.000`, and every timestamp is taken to be UTC.

pub mod extract;
pub mod normalize;

pub use extract::{DateExtraction, DateExtractor, ExtractedDate, extract_dates};
pub use normalize::{CANONICAL_FORMAT, normalize, parse_canonical};
