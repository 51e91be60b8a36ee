/// Compilation errors.
///
/// Defines every error that can occur while tokenizing source text, converting
/// it to postfix order, or building the lazy program tree. Compile errors are
/// raised before anything is evaluated.
pub mod compile_error;
/// Evaluation errors.
///
/// Contains the errors a compiled program can raise while it is forced. The
/// engine's own coercions are total, so these come from function and operator
/// implementations that reject their arguments.
pub mod eval_error;

pub use compile_error::{CompileError, CompileResult};
pub use eval_error::{EvalError, EvalResult};

/// Either phase of an expression's life failing.
///
/// Returned by entry points that compile and evaluate in one step, such as
/// [`crate::evaluate`] and [`crate::Expression::eval`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text did not compile.
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// The compiled program failed while being evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
