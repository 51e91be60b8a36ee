/// The built-in operators, functions and constants.
///
/// Seeds a [`crate::Registry`] with the default operator set (arithmetic,
/// comparison, equality and short-circuiting logic), the constants `PI`, `e`,
/// `TRUE` and `FALSE`, and the function library.
pub mod builtins;
/// The compiler turns source text into a [`program::Program`].
///
/// Compilation runs the lexer, converts the tokens to postfix order with the
/// shunting-yard algorithm, and builds a lazy node tree from the result.
///
/// # Responsibilities
/// - Splits operator runs against the active operator table.
/// - Resolves every identifier at compile time.
/// - Checks function arities and operand/operator adjacency.
pub mod compiler;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw source text and produces tokens for numbers,
/// strings, identifiers, operator runs, parentheses and commas, each paired
/// with its byte offset.
pub mod lexer;
/// Compiled programs and their lazy nodes.
///
/// A program is a tree of nodes that is only evaluated when forced. Operator
/// and function implementations receive their operands as lazy
/// [`program::Arguments`].
pub mod program;
/// Symbol tables for operators, functions and variables.
///
/// Holds the generic table type, the entry types stored in each table, the
/// built-in [`symbols::Registry`] and the per-expression [`symbols::Symbols`]
/// overlay derived from it.
pub mod symbols;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Variant` type that flows through compiled
/// programs, and the dynamic variables that hosts refresh once per cycle.
pub mod value;
