//! Core types for the validation engine
//!
//! This module contains the two seams everything else is written against:
//!
//! - [`TextRule`]: the "text in, pass/fail out" capability that every
//!   built-in rule satisfies and that external code implements to extend
//!   the catalog through [`Rule::Custom`](crate::rules::Rule::Custom).
//! - [`PatternError`]: the construction-time error for user-supplied
//!   regular expressions that fail to compile.

mod error;
mod traits;

pub use error::PatternError;
pub use traits::TextRule;
