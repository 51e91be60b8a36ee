use crate::interpreter::symbols::function::Arity;

/// Result type used by the compiler.
pub type CompileResult<T> = Result<T, CompileError>;

/// Represents all errors that can occur while compiling an expression.
///
/// Positions are byte offsets into the source text. The type is `Clone` so a
/// failed compilation can be memoized alongside successful ones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The source text contained no tokens.
    #[error("Error: Expression is empty.")]
    EmptyExpression,
    /// Found a character that does not start any token.
    #[error("Error at position {position}: Unexpected character '{text}'.")]
    UnexpectedCharacter {
        /// The offending text.
        text:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A numeric literal could not be represented.
    #[error("Error at position {position}: Malformed literal '{literal}'.")]
    MalformedLiteral {
        /// The literal as written.
        literal:  String,
        /// Byte offset in the source.
        position: usize,
    },
    /// An operator symbol is not in the operator table.
    #[error("Error at position {position}: Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The symbol that failed to resolve.
        symbol:   String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A called function is not in the function table.
    #[error("Error at position {position}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// An identifier is not in the variable table.
    #[error("Error at position {position}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset in the source.
        position: usize,
    },
    /// A function was called with a number of arguments its arity rejects.
    #[error("Error at position {position}: Function '{name}' expects {expected} argument(s) but found {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The accepted arity.
        expected: Arity,
        /// The number of arguments supplied.
        found:    usize,
        /// Byte offset of the function name.
        position: usize,
    },
    /// A parenthesis was opened but never closed, or closed without opening.
    #[error("Error at position {position}: Unbalanced parentheses.")]
    UnbalancedParentheses {
        /// Byte offset of the unmatched parenthesis.
        position: usize,
    },
    /// A comma appeared outside a function argument list.
    #[error("Error at position {position}: Comma outside of a function call.")]
    MisplacedComma {
        /// Byte offset of the comma.
        position: usize,
    },
    /// An operator, comma or closing parenthesis is missing an operand.
    #[error("Error at position {position}: '{symbol}' is missing an operand.")]
    MissingOperand {
        /// The token that needed an operand.
        symbol:   String,
        /// Byte offset of that token.
        position: usize,
    },
    /// Two operands follow each other with no operator between them.
    #[error("Error at position {position}: Expected an operator.")]
    MissingOperator {
        /// Byte offset of the second operand.
        position: usize,
    },
    /// The program tree would nest deeper than evaluation allows.
    #[error("Error at position {position}: Expression nests deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum tree depth.
        limit:    usize,
        /// Byte offset of the operator or function that crossed the limit.
        position: usize,
    },
    /// The text ended while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of the source.
        position: usize,
    },
}
