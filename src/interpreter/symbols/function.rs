use std::{fmt, sync::Arc};

use crate::{
    error::EvalResult,
    interpreter::{program::Arguments, value::core::Variant},
};

type FunctionFn = dyn Fn(&Arguments<'_>) -> EvalResult<Variant> + Send + Sync;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any arity listed in `slice`.
/// - `AtLeast(n)` marks a variadic function needing at least `n` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of the listed argument counts.
    OneOf(&'static [usize]),
    /// Variadic, with a lower bound.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// # Example
    /// ```
    /// use condex::interpreter::symbols::Arity;
    ///
    /// assert!(Arity::AtLeast(1).check(3));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// assert!(Arity::OneOf(&[1, 2]).check(2));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(arr) => {
                let listed = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", listed.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A function entry in the function table.
#[derive(Clone)]
pub struct Function {
    name:           String,
    arity:          Arity,
    implementation: Arc<FunctionFn>,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Function {
    /// Creates a function whose arguments are all evaluated, in order, before
    /// `call` runs.
    ///
    /// # Example
    /// ```
    /// use condex::{
    ///     Expression, Variant,
    ///     interpreter::symbols::{Arity, Function, Registry},
    /// };
    ///
    /// let mut registry = Registry::builtin();
    /// registry.register_function(Function::eager("DOUBLE", Arity::Exact(1), |args| {
    ///                                                Ok(Variant::Number(args[0].as_number() * 2.0))
    ///                                            }));
    ///
    /// let expr = Expression::new("DOUBLE(21)", &registry);
    /// assert_eq!(expr.eval().unwrap(), Variant::Number(42.0));
    /// ```
    pub fn eager<F>(name: impl Into<String>, arity: Arity, call: F) -> Self
        where F: Fn(&[Variant]) -> EvalResult<Variant> + Send + Sync + 'static
    {
        Self::lazy(name, arity, move |args| call(&args.force_all()?))
    }

    /// Creates a function that forces only the arguments it needs.
    pub fn lazy<F>(name: impl Into<String>, arity: Arity, call: F) -> Self
        where F: Fn(&Arguments<'_>) -> EvalResult<Variant> + Send + Sync + 'static
    {
        Self { name: name.into(),
               arity,
               implementation: Arc::new(call) }
    }

    /// The name used in call syntax.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The accepted argument counts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Invokes the function on its (lazy) arguments.
    pub fn call(&self, args: &Arguments<'_>) -> EvalResult<Variant> {
        (self.implementation)(args)
    }
}
