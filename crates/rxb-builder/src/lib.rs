//! Fluent pattern builder with a reversible recipe.
//!
//! - **builder**: [`PatternBuilder`], chained composition of pattern fragments
//! - **recipe**: [`Recipe`], the ordered record of applied operations
//! - **codec**: [`RecipeRecord`], the JSON wire form, and [`encode`]/[`decode`]
//! - **flags**: [`Flag`], regex mode flags
//!
//! Matchers are compiled with `fancy-regex`, which supports the lookaround
//! fragments produced by [`PatternBuilder::must_be_followed_by`] and
//! [`PatternBuilder::must_not_be_followed_by`].

pub mod builder;
pub mod codec;
pub mod error;
pub mod flags;
pub mod recipe;

pub use builder::{MAX_NUMBER_RANGE_LEN, PatternBuilder};
pub use codec::{
    CaseSensitivity, ExpressionRecord, RecipeRecord, decode, decode_str, decode_value, encode,
};
pub use error::{BuilderError, DecodeError, Result};
pub use flags::Flag;
pub use recipe::{Recipe, Step};
