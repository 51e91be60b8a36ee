//! # condex
//!
//! condex is an embeddable infix expression engine written in Rust.
//! It compiles short condition strings to a postfix program, builds a lazy
//! node tree from it, and evaluates that tree against named variables,
//! operators and functions supplied by the host.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The process-wide expression cache.
///
/// Maps source text to compiled expressions, compiling each text at most once
/// and quarantining text that fails to compile.
pub mod cache;
/// Provides unified error types for compilation and evaluation.
///
/// This module defines all errors that can be raised while compiling an
/// expression or forcing its program, and the crate-level `Error` that
/// covers both.
///
/// # Responsibilities
/// - Defines error enums for both phases.
/// - Attaches byte positions to compile errors.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// The expression façade and its builder.
///
/// An expression owns one source string and its own symbol tables, compiles
/// on first use and memoizes the program.
pub mod expression;
/// Orchestrates compilation and evaluation.
///
/// This module ties together lexing, postfix conversion, tree building, value
/// representations and symbol tables.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, compiler, program and values.
/// - Defines the built-in operators, functions and constants.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// Formatting and parsing of numbers for string coercion, and precision
/// handling for rounding.
pub mod util;

pub use cache::ExpressionCache;
pub use error::Error;
pub use expression::{Expression, ExpressionBuilder};
pub use interpreter::{
    symbols::{Arity, Function, Operator, Registry},
    value::{
        core::Variant,
        dynamic::{DynamicVariant, DynamicVariantList},
    },
};

/// Compiles and evaluates `source` once against the global registry.
///
/// # Errors
/// Returns an error if compilation or evaluation fails.
///
/// # Examples
/// ```
/// use condex::{Variant, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Variant::Number(14.0));
/// assert_eq!(evaluate("IF(TRUE, 1, 1/0)").unwrap(), Variant::Number(1.0));
///
/// // 'x' is not defined
/// assert!(evaluate("x + 1").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Variant, Error> {
    Expression::new(source, Registry::global()).eval()
}
