//! Recipe wire format.
//!
//! A builder's [`Recipe`](crate::Recipe) serializes to a JSON record:
//!
//! ```json
//! {
//!   "startsWith": "E",
//!   "endsWith": "[0-9]",
//!   "caseSensitive": "true",
//!   "expressions": [{ "pattern": "mployee" }]
//! }
//! ```
//!
//! Decoding replays the record onto a fresh builder in a fixed order: start
//! anchor, case mode, extra flags, body steps, end anchor.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::builder::PatternBuilder;
use crate::error::DecodeError;
use crate::flags::Flag;

/// Case mode as it appears on the wire (`"true"` / `"false"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseSensitivity {
    #[serde(rename = "true")]
    Sensitive,
    #[serde(rename = "false")]
    Insensitive,
}

impl CaseSensitivity {
    pub fn is_sensitive(self) -> bool {
        matches!(self, CaseSensitivity::Sensitive)
    }
}

impl From<bool> for CaseSensitivity {
    fn from(sensitive: bool) -> Self {
        if sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }
}

/// A single body step on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionRecord {
    pub pattern: String,
}

/// Serialized form of a builder recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_with: Option<String>,

    /// Absent means case-insensitive when decoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<CaseSensitivity>,

    /// Mode flags other than case-insensitivity, e.g. `"ms"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,

    pub expressions: Vec<ExpressionRecord>,
}

/// Encode a builder's recipe.
///
/// `caseSensitive` always carries the builder's effective mode, so a builder
/// that never toggled case still decodes as case-sensitive.
pub fn encode(builder: &PatternBuilder) -> RecipeRecord {
    let recipe = builder.recipe();
    let extra_flags: String = builder
        .flags()
        .iter()
        .filter(|flag| **flag != Flag::CaseInsensitive)
        .map(|flag| flag.as_char())
        .collect();

    RecipeRecord {
        starts_with: recipe.starts_with.clone(),
        ends_with: recipe.ends_with.clone(),
        case_sensitive: Some(builder.is_case_sensitive().into()),
        flags: (!extra_flags.is_empty()).then_some(extra_flags),
        expressions: recipe
            .steps
            .iter()
            .map(|step| ExpressionRecord {
                pattern: step.fragment.clone(),
            })
            .collect(),
    }
}

/// Rebuild a builder from a record.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidFlag`] for an unknown character in `flags`.
pub fn decode(record: &RecipeRecord) -> Result<PatternBuilder, DecodeError> {
    let extra_flags = parse_flags(record.flags.as_deref().unwrap_or_default())?;

    let mut builder = PatternBuilder::new();
    if let Some(start) = &record.starts_with {
        builder.starts_with(start);
    }
    let sensitive = record
        .case_sensitive
        .is_some_and(CaseSensitivity::is_sensitive);
    builder.case_sensitive(sensitive);
    for flag in extra_flags {
        builder.flag(flag);
    }
    for expression in &record.expressions {
        builder.then(&expression.pattern);
    }
    if let Some(end) = &record.ends_with {
        builder.ends_with(end);
    }

    debug!(
        steps = record.expressions.len(),
        case_sensitive = sensitive,
        "decoded recipe"
    );
    Ok(builder)
}

/// Decode from a JSON value.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the value is not a recipe record.
pub fn decode_value(value: Value) -> Result<PatternBuilder, DecodeError> {
    let record: RecipeRecord = serde_json::from_value(value)?;
    decode(&record)
}

/// Decode from JSON text.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when the text is not JSON or not a
/// recipe record.
pub fn decode_str(json: &str) -> Result<PatternBuilder, DecodeError> {
    let record: RecipeRecord = serde_json::from_str(json)?;
    decode(&record)
}

fn parse_flags(flags: &str) -> Result<Vec<Flag>, DecodeError> {
    flags
        .chars()
        .map(|c| match Flag::from_char(c) {
            Some(flag) if flag != Flag::CaseInsensitive => Ok(flag),
            _ => Err(DecodeError::InvalidFlag(c)),
        })
        .collect()
}

impl PatternBuilder {
    /// The recipe as a wire record.
    pub fn to_record(&self) -> RecipeRecord {
        encode(self)
    }

    /// The recipe as a JSON value.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(encode(self))
    }

    /// The recipe as pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&encode(self))
    }

    /// Rebuild a builder from a wire record.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn from_record(record: &RecipeRecord) -> Result<Self, DecodeError> {
        decode(record)
    }

    /// Rebuild a builder from JSON text.
    ///
    /// # Errors
    ///
    /// See [`decode_str`].
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        decode_str(json)
    }
}
