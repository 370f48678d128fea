//! Numeric pattern fragments.
//!
//! Every function here returns a self-contained piece of pattern text that can
//! be concatenated with other fragments or handed to a pattern builder:
//!
//! - **integers**: [`positive_integer`], [`negative_integer`], [`signed_integer`]
//! - **decimals**: [`positive_decimal`], [`negative_decimal`], [`signed_decimal`],
//!   [`decimal_with_exact_fraction_digits`]
//! - **other**: [`percentage`], [`scientific_notation`]
//!
//! The fragments are plain strings; none of them validate input text.

use thiserror::Error;

/// Optional leading sign.
const SIGN: &str = r"(?:-|\+)?";

/// Errors raised while building a parameterised fragment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FragmentError {
    /// A decimal fragment was asked for zero fraction digits.
    #[error("fraction digit count must be at least 1")]
    ZeroFractionDigits,
}

/// Result type for fragment construction.
pub type Result<T> = std::result::Result<T, FragmentError>;

/// One or more digits.
pub fn positive_integer() -> &'static str {
    r"\d+"
}

/// A literal minus followed by one or more digits.
pub fn negative_integer() -> &'static str {
    r"-\d+"
}

/// One or more digits with an optional leading `+` or `-`.
pub fn signed_integer() -> String {
    format!("{SIGN}{}", positive_integer())
}

/// Digits, a literal dot, digits.
pub fn positive_decimal() -> &'static str {
    r"\d+\.\d+"
}

/// A literal minus followed by a positive decimal.
pub fn negative_decimal() -> &'static str {
    r"-\d+\.\d+"
}

/// A positive decimal with an optional leading `+` or `-`.
pub fn signed_decimal() -> String {
    format!("{SIGN}{}", positive_decimal())
}

/// A decimal with exactly `digits` digits after the dot.
///
/// The fragment is bounded on both sides by word boundaries, so it never
/// matches part of a longer digit run or a number glued to a word
/// (`"10.0456"` matches for 4 digits, `"10.04567"` and `"10.045"` do not).
///
/// # Errors
///
/// Returns [`FragmentError::ZeroFractionDigits`] when `digits` is 0.
pub fn decimal_with_exact_fraction_digits(digits: u32) -> Result<String> {
    if digits == 0 {
        return Err(FragmentError::ZeroFractionDigits);
    }
    Ok(format!(r"\b\d+\.\d{{{digits}}}\b"))
}

/// An optionally signed integer or decimal followed by `%`.
pub fn percentage() -> String {
    format!(r"{SIGN}\d*\.?\d+?%")
}

/// A number in plain or scientific notation.
///
/// Accepts plain integers (`555`), plain decimals (`1.2`) and exponent forms
/// (`5.56789e+0`, `-22.54e23`, `236E-19`).
pub fn scientific_notation() -> String {
    format!(r"{SIGN}\d+\.?\d*(?:(?:e|E)(?:-|\+)?\d+)?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use regex::Regex;

    fn compile(fragment: &str) -> Regex {
        Regex::new(fragment).unwrap()
    }

    #[test]
    fn test_integers() {
        assert!(compile(positive_integer()).is_match("10"));
        assert!(!compile(positive_integer()).is_match("ten"));
        assert!(compile(negative_integer()).is_match("-10"));
        assert!(!compile(negative_integer()).is_match("10"));

        let signed = compile(&signed_integer());
        assert!(signed.is_match("+10"));
        assert!(signed.is_match("-10"));
        assert!(signed.is_match("10"));
    }

    #[test]
    fn test_decimals() {
        assert!(compile(positive_decimal()).is_match("10.04"));
        assert!(!compile(positive_decimal()).is_match("10"));
        assert!(compile(negative_decimal()).is_match("-10.04"));
        assert!(!compile(negative_decimal()).is_match("10.04"));

        let signed = compile(&signed_decimal());
        assert!(signed.is_match("+10.00"));
        assert!(signed.is_match("-10.00"));
    }

    #[test]
    fn test_exact_fraction_digits() {
        let regex = compile(&decimal_with_exact_fraction_digits(4).unwrap());
        assert!(regex.is_match("10.0456"));
        assert!(!regex.is_match("10.045"));
        assert!(!regex.is_match("10.04567"));
        assert!(!regex.is_match("10.0456a"));
        assert!(regex.is_match("price 10.0456 total"));
    }

    #[test]
    fn test_exact_fraction_digits_rejects_zero() {
        assert_eq!(
            decimal_with_exact_fraction_digits(0),
            Err(FragmentError::ZeroFractionDigits)
        );
    }

    #[test]
    fn test_scientific_notation() {
        let regex = Regex::new(&format!("^{}$", scientific_notation())).unwrap();
        for case in [
            "5.56789e+0",
            "12E21",
            "12E219",
            "236E-19",
            "66.2e99",
            "22.54e23",
            "1.2",
            "555",
            "4.2",
            "-22.54e23",
            "+4.5",
            "3545.6578e240465863",
            "-7.001e-2",
        ] {
            assert!(regex.is_match(case), "{case} should match");
        }
        assert!(!regex.is_match("e10"));
    }

    proptest! {
        #[test]
        fn percentage_matches_signed_values(value in 0u32..200, sign in prop::sample::select(vec!["", "-", "+"])) {
            let regex = compile(&percentage());
            let text = format!("{sign}{value}%");
            prop_assert!(regex.is_match(&text));
        }
    }
}
