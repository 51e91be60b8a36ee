/// Result type used while forcing a compiled program.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents all errors that can occur while evaluating a compiled program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A function was handed the wrong number of already-evaluated arguments.
    ///
    /// The compiler checks arities, so this only surfaces when a built-in is
    /// called directly from host code.
    #[error("Function '{name}' expects {expected} argument(s) but found {found}.")]
    ArgumentCount {
        /// The name of the function.
        name:     String,
        /// The number of arguments required.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// A lazy argument was requested past the end of the argument list.
    #[error("'{name}' has no argument at index {index}.")]
    MissingArgument {
        /// The function or operator being applied.
        name:  String,
        /// The requested index.
        index: usize,
    },
    /// An argument was outside the domain the function accepts.
    #[error("Invalid argument to '{name}': {details}.")]
    InvalidArgument {
        /// The function being applied.
        name:    String,
        /// Why the argument was rejected.
        details: String,
    },
    /// A host-supplied implementation reported a failure.
    #[error("'{name}' failed: {message}")]
    Host {
        /// The function or operator that failed.
        name:    String,
        /// The host's description of the failure.
        message: String,
    },
}

impl EvalError {
    /// Builds a [`EvalError::Host`] for a host-registered implementation.
    ///
    /// # Example
    /// ```
    /// use condex::error::EvalError;
    ///
    /// let err = EvalError::host("BIOME", "world not loaded");
    /// assert_eq!(err.to_string(), "'BIOME' failed: world not loaded");
    /// ```
    pub fn host(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Host { name:    name.into(),
                     message: message.into(), }
    }

    pub(crate) fn invalid_argument(name: &str, details: impl Into<String>) -> Self {
        Self::InvalidArgument { name:    name.to_owned(),
                                details: details.into(), }
    }
}
