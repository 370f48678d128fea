//! Fluent pattern builder.
//!
//! Every mutating operation takes `&mut self` and hands the same builder back,
//! so calls chain:
//!
//! ```
//! use rxb_builder::PatternBuilder;
//!
//! let mut builder = PatternBuilder::new();
//! builder.then("hello").space().must_be_followed_by("world");
//! assert_eq!(builder.pattern(), "hello (?=world)");
//! ```
//!
//! A builder is plain owned state; share it across threads only behind
//! external synchronization.

use std::collections::BTreeSet;
use std::fmt;

use fancy_regex::Regex;
use tracing::{debug, trace};

use crate::error::{BuilderError, Result};
use crate::flags::Flag;
use crate::recipe::{Recipe, Step};

const WORD: &str = r"\w+";
const UPPERCASE_LETTER: &str = "[A-Z]";
const LOWERCASE_LETTER: &str = "[a-z]";
const DIGIT: &str = r"\d";
const DIGITS: &str = r"\d+";
const SPACE: &str = " ";
const WHITESPACE: &str = r"\s";
const TAB: &str = r"\t";
const NEW_LINE: &str = r"(?:\r\n|\r|\n)";
const ANYTHING: &str = ".";

/// Largest number of integers a number-range operation will spell out.
pub const MAX_NUMBER_RANGE_LEN: u64 = 100_000;

/// Accumulates pattern text, mode flags and the recipe that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternBuilder {
    flags: BTreeSet<Flag>,
    recipe: Recipe,
}

impl PatternBuilder {
    /// Create an empty builder with no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder seeded with the given mode flags.
    pub fn with_flags(flags: impl IntoIterator<Item = Flag>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
            recipe: Recipe::default(),
        }
    }

    // =========================================================================
    // Anchors
    // =========================================================================

    /// Anchor `fragment` at the start of the pattern, replacing any earlier
    /// start anchor.
    pub fn starts_with(&mut self, fragment: &str) -> &mut Self {
        trace!(fragment, "set start anchor");
        self.recipe.starts_with = Some(fragment.to_string());
        self
    }

    /// Anchor `fragment` at the end of the pattern, replacing any earlier
    /// end anchor.
    pub fn ends_with(&mut self, fragment: &str) -> &mut Self {
        trace!(fragment, "set end anchor");
        self.recipe.ends_with = Some(fragment.to_string());
        self
    }

    // =========================================================================
    // Appending fragments
    // =========================================================================

    /// Append `fragment` verbatim.
    ///
    /// Every other appending operation goes through here, so the recipe holds
    /// exactly one step per call.
    pub fn then(&mut self, fragment: &str) -> &mut Self {
        trace!(fragment, "append fragment");
        self.recipe.steps.push(Step::new(fragment));
        self
    }

    /// Same as [`then`](Self::then).
    pub fn followed_by(&mut self, fragment: &str) -> &mut Self {
        self.then(fragment)
    }

    /// Same as [`then`](Self::then).
    pub fn match_fragment(&mut self, fragment: &str) -> &mut Self {
        self.then(fragment)
    }

    /// One or more word characters.
    pub fn word(&mut self) -> &mut Self {
        self.then(WORD)
    }

    /// A single `A`-`Z` letter.
    pub fn uppercase_letter(&mut self) -> &mut Self {
        self.then(UPPERCASE_LETTER)
    }

    /// A single `a`-`z` letter.
    pub fn lowercase_letter(&mut self) -> &mut Self {
        self.then(LOWERCASE_LETTER)
    }

    /// A single digit.
    pub fn number(&mut self) -> &mut Self {
        self.then(DIGIT)
    }

    /// One or more digits.
    pub fn numbers(&mut self) -> &mut Self {
        self.then(DIGITS)
    }

    /// A literal space.
    pub fn space(&mut self) -> &mut Self {
        self.then(SPACE)
    }

    /// A single whitespace character.
    pub fn whitespace(&mut self) -> &mut Self {
        self.then(WHITESPACE)
    }

    /// A tab.
    pub fn tab(&mut self) -> &mut Self {
        self.then(TAB)
    }

    /// A line break: CRLF, CR or LF.
    pub fn new_line(&mut self) -> &mut Self {
        self.then(NEW_LINE)
    }

    /// Any single character.
    pub fn anything(&mut self) -> &mut Self {
        self.then(ANYTHING)
    }

    /// Any character from `from` to `to`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidRange`] when `from` sorts after `to`.
    /// Uppercase letters sort before lowercase ones, so mixed-case ranges such
    /// as `'a'..'B'` are rejected too.
    pub fn character_range(&mut self, from: char, to: char) -> Result<&mut Self> {
        if from > to {
            return Err(BuilderError::InvalidRange { from, to });
        }
        let mut class = String::from("[");
        push_class_char(&mut class, from);
        class.push('-');
        push_class_char(&mut class, to);
        class.push(']');
        Ok(self.then(&class))
    }

    // =========================================================================
    // Lookaround, alternation, grouping
    // =========================================================================

    /// Require that what precedes is followed by `fragment`, without
    /// consuming it.
    pub fn must_be_followed_by(&mut self, fragment: &str) -> &mut Self {
        self.then(&format!("(?={fragment})"))
    }

    /// Require that what precedes is not followed by `fragment`.
    pub fn must_not_be_followed_by(&mut self, fragment: &str) -> &mut Self {
        self.then(&format!("(?!{fragment})"))
    }

    /// A non-capturing alternation of `fragments`, tried in order.
    pub fn can_match<I, S>(&mut self, fragments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = fragments
            .into_iter()
            .map(|fragment| fragment.as_ref().to_string())
            .collect();
        self.then(&format!("(?:{})", alternatives.join("|")))
    }

    /// Same as [`can_match`](Self::can_match).
    pub fn either_of<I, S>(&mut self, fragments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.can_match(fragments)
    }

    /// Any single character not in `characters`.
    ///
    /// The characters are treated as a set: duplicates collapse and class
    /// metacharacters are escaped.
    pub fn anything_but(&mut self, characters: impl IntoIterator<Item = char>) -> &mut Self {
        let set: BTreeSet<char> = characters.into_iter().collect();
        let mut class = String::from("[^");
        for c in set {
            push_class_char(&mut class, c);
        }
        class.push(']');
        self.then(&class)
    }

    /// Top-level alternation: everything so far, or `fragment`.
    pub fn or(&mut self, fragment: &str) -> &mut Self {
        self.then(&format!("|{fragment}"))
    }

    /// Wrap `fragment` in a capturing group.
    pub fn group(&mut self, fragment: &str) -> &mut Self {
        self.then(&format!("({fragment})"))
    }

    // =========================================================================
    // Quantifiers
    // =========================================================================

    /// Repeat the preceding fragment exactly `times` times.
    pub fn exactly_n_times(&mut self, times: usize) -> &mut Self {
        self.then(&format!("{{{times}}}"))
    }

    /// Append `fragment` repeated exactly `times` times.
    pub fn repeat(&mut self, fragment: &str, times: usize) -> &mut Self {
        self.then(&format!("(?:{fragment}){{{times}}}"))
    }

    /// Repeat the preceding fragment one or more times.
    pub fn one_or_more_times(&mut self) -> &mut Self {
        self.then("+")
    }

    /// Repeat the preceding fragment zero or more times.
    pub fn zero_or_more_times(&mut self) -> &mut Self {
        self.then("*")
    }

    /// Append `fragment` as an optional non-capturing group.
    ///
    /// Single characters are grouped too, so the `?` always applies to the
    /// whole fragment.
    pub fn optional(&mut self, fragment: &str) -> &mut Self {
        self.then(&format!("(?:{fragment})?"))
    }

    /// Same as [`optional`](Self::optional).
    pub fn maybe(&mut self, fragment: &str) -> &mut Self {
        self.optional(fragment)
    }

    // =========================================================================
    // Number ranges
    // =========================================================================

    /// A capturing alternation of every integer strictly between `start` and
    /// `end`.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidNumberRange`] when the open range holds
    /// no integers, and [`BuilderError::NumberRangeTooLarge`] when it holds
    /// more than [`MAX_NUMBER_RANGE_LEN`].
    pub fn match_number_between(&mut self, start: i64, end: i64) -> Result<&mut Self> {
        if start >= end || start + 1 == end {
            return Err(BuilderError::InvalidNumberRange {
                start,
                end,
                kind: "exclusive",
            });
        }
        check_range_len(start, end, i128::from(end) - i128::from(start) - 1)?;
        Ok(self.push_number_alternation(start + 1..end))
    }

    /// A capturing alternation of every integer from `start` to `end`,
    /// inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidNumberRange`] unless `start < end`, and
    /// [`BuilderError::NumberRangeTooLarge`] past [`MAX_NUMBER_RANGE_LEN`].
    pub fn match_number_between_inclusive(&mut self, start: i64, end: i64) -> Result<&mut Self> {
        if start >= end {
            return Err(BuilderError::InvalidNumberRange {
                start,
                end,
                kind: "inclusive",
            });
        }
        check_range_len(start, end, i128::from(end) - i128::from(start) + 1)?;
        Ok(self.push_number_alternation(start..=end))
    }

    fn push_number_alternation(&mut self, numbers: impl Iterator<Item = i64>) -> &mut Self {
        let alternatives: Vec<String> = numbers.map(|n| n.to_string()).collect();
        self.then(&format!("({})", alternatives.join("|")))
    }

    // =========================================================================
    // Mode flags
    // =========================================================================

    /// Request case-sensitive (`true`) or case-insensitive (`false`) matching.
    ///
    /// The stored flag is the inverse of the request: `false` sets
    /// [`Flag::CaseInsensitive`], `true` clears it. Repeated calls with the
    /// same value are idempotent.
    pub fn case_sensitive(&mut self, sensitive: bool) -> &mut Self {
        if sensitive {
            self.flags.remove(&Flag::CaseInsensitive);
        } else {
            self.flags.insert(Flag::CaseInsensitive);
        }
        self.recipe.case_sensitive = Some(sensitive);
        self
    }

    /// Add a mode flag.
    ///
    /// [`Flag::CaseInsensitive`] is routed through
    /// [`case_sensitive`](Self::case_sensitive) so the recipe stays in step.
    pub fn flag(&mut self, flag: Flag) -> &mut Self {
        if flag == Flag::CaseInsensitive {
            return self.case_sensitive(false);
        }
        self.flags.insert(flag);
        self
    }

    // =========================================================================
    // Read-out
    // =========================================================================

    /// The accumulated pattern text.
    pub fn pattern(&self) -> String {
        self.recipe.render()
    }

    /// The mode flags in effect.
    pub fn flags(&self) -> &BTreeSet<Flag> {
        &self.flags
    }

    /// The mode flags as a conventional flag string, e.g. `"im"`.
    pub fn flags_string(&self) -> String {
        self.flags.iter().map(|flag| flag.as_char()).collect()
    }

    /// False when [`Flag::CaseInsensitive`] is set.
    pub fn is_case_sensitive(&self) -> bool {
        !self.flags.contains(&Flag::CaseInsensitive)
    }

    /// The recipe accumulated so far.
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Pattern text with the mode flags inlined as a leading `(?flags)` group.
    pub fn regex_source(&self) -> String {
        let pattern = self.pattern();
        if self.flags.is_empty() {
            pattern
        } else {
            format!("(?{}){pattern}", self.flags_string())
        }
    }

    /// Compile the accumulated pattern and flags into a matcher.
    ///
    /// The builder stays usable afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Compile`] if the engine rejects the pattern,
    /// for example after an unbalanced raw fragment.
    pub fn to_regex(&self) -> Result<Regex> {
        let source = self.regex_source();
        debug!(pattern = %source, steps = self.recipe.steps.len(), "compiling pattern");
        Regex::new(&source).map_err(|error| BuilderError::Compile {
            pattern: source,
            source: Box::new(error),
        })
    }
}

fn check_range_len(start: i64, end: i64, len: i128) -> Result<()> {
    if len > i128::from(MAX_NUMBER_RANGE_LEN) {
        return Err(BuilderError::NumberRangeTooLarge {
            start,
            end,
            limit: MAX_NUMBER_RANGE_LEN,
        });
    }
    Ok(())
}

impl fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}

/// Push `c` into a character class body, escaping class metacharacters.
fn push_class_char(class: &mut String, c: char) {
    if matches!(c, '\\' | ']' | '[' | '^' | '-') {
        class.push('\\');
    }
    class.push(c);
}
