/// Compiler entry point.
///
/// Runs the lexer, the postfix conversion and the tree build in sequence and
/// returns a [`crate::interpreter::program::Program`].
pub mod core;
/// Shunting-yard conversion of tokens to postfix order.
///
/// Splits operator runs against the operator table, folds signed literals,
/// resolves every identifier and checks function arities.
pub mod rpn;
/// Builds the lazy node tree from postfix tokens.
pub mod tree;
