use crate::{
    error::CompileResult,
    interpreter::{
        compiler::{rpn, tree},
        lexer,
        program::Program,
        symbols::Symbols,
    },
};

/// Compiles source text against a set of symbol tables.
///
/// Compilation is all or nothing: the first error aborts it and no partial
/// program is returned.
///
/// # Parameters
/// - `source`: Expression text.
/// - `symbols`: Tables used to resolve operators, functions and variables.
///
/// # Returns
/// The compiled [`Program`].
///
/// # Example
/// ```
/// use condex::{
///     Variant,
///     interpreter::{
///         compiler::core::compile,
///         symbols::{Registry, Symbols},
///     },
/// };
///
/// let symbols = Symbols::derive(&Registry::builtin());
/// let program = compile("2 + 3 * 4", &symbols).unwrap();
///
/// assert_eq!(program.to_rpn(), "2 3 4 * +");
/// assert_eq!(program.eval().unwrap(), Variant::Number(14.0));
/// ```
#[tracing::instrument(level = "debug", skip(symbols))]
pub fn compile(source: &str, symbols: &Symbols) -> CompileResult<Program> {
    let tokens = lexer::tokenize(source)?;
    let rpn = rpn::convert(source, &tokens, symbols)?;
    let root = tree::build(&rpn)?;

    tracing::debug!(tokens = rpn.len(), "compiled expression");
    Ok(Program::new(root, rpn))
}
