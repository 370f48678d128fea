//! Command implementations, independent of argument parsing.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use rxb_builder::PatternBuilder;
use rxb_dates::DateExtractor;
use serde::Serialize;
use tracing::{debug, info};

/// Summary of a decoded recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternReport {
    pub pattern: String,
    pub flags: String,
    pub steps: usize,
}

/// Result of testing one input against a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub input: String,
    pub matched: Option<String>,
}

impl CheckOutcome {
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

/// One extracted date, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRow {
    pub raw: String,
    pub normalized: String,
    pub timestamp: Option<String>,
}

impl DateRow {
    pub fn is_valid(&self) -> bool {
        self.timestamp.is_some()
    }
}

/// Read and decode a recipe file.
pub fn load_recipe(path: &Path) -> Result<PatternBuilder> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("read recipe {}", path.display()))?;
    let builder = PatternBuilder::from_json(&json)
        .with_context(|| format!("decode recipe {}", path.display()))?;
    info!(path = %path.display(), "loaded recipe");
    Ok(builder)
}

pub fn describe_pattern(builder: &PatternBuilder) -> PatternReport {
    PatternReport {
        pattern: builder.pattern(),
        flags: builder.flags_string(),
        steps: builder.recipe().steps.len(),
    }
}

/// Test every input against the builder's pattern.
pub fn check_inputs(builder: &PatternBuilder, inputs: &[String]) -> Result<Vec<CheckOutcome>> {
    let regex = builder.to_regex().context("compile pattern")?;
    inputs
        .iter()
        .map(|input| {
            let found = regex
                .find(input)
                .with_context(|| format!("match input '{input}'"))?;
            debug!(input = %input, matched = found.is_some(), "checked input");
            Ok(CheckOutcome {
                input: input.clone(),
                matched: found.map(|m| m.as_str().to_string()),
            })
        })
        .collect()
}

/// Read `path`, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read stdin")?;
            Ok(text)
        }
    }
}

/// Extract dates from `text` as display rows.
pub fn date_rows(text: &str, extractor: DateExtractor) -> Vec<DateRow> {
    let extraction = extractor.extract(text);
    info!(
        matches = extraction.len(),
        valid = extraction.valid_count(),
        "extracted dates"
    );
    extraction
        .entries()
        .map(|(raw, normalized, date)| DateRow {
            raw: raw.to_string(),
            normalized: normalized.to_string(),
            timestamp: date.as_datetime().map(|_| date.to_string()),
        })
        .collect()
}
