use std::{fmt, sync::Arc};

use crate::{
    error::EvalResult,
    interpreter::{program::Arguments, value::core::Variant},
};

type OperatorFn = dyn Fn(&Arguments<'_>) -> EvalResult<Variant> + Send + Sync;

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Number of operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorArity {
    /// A prefix operator such as `!`.
    Unary,
    /// An infix operator such as `+`.
    Binary,
}

impl OperatorArity {
    /// The number of operands popped when the operator is applied.
    #[must_use]
    pub const fn operands(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// An operator entry in the operator table.
///
/// The implementation receives its operands lazily, so operators such as
/// `&&` can skip evaluating the right-hand side.
#[derive(Clone)]
pub struct Operator {
    symbol:         String,
    precedence:     u8,
    associativity:  Associativity,
    arity:          OperatorArity,
    implementation: Arc<OperatorFn>,
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
         .field("symbol", &self.symbol)
         .field("precedence", &self.precedence)
         .field("associativity", &self.associativity)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Operator {
    /// Creates a binary operator that evaluates both operands before applying
    /// `apply`.
    ///
    /// # Example
    /// ```
    /// use condex::{
    ///     Expression, Variant,
    ///     interpreter::symbols::{Associativity, Operator, Registry},
    /// };
    ///
    /// let mut registry = Registry::builtin();
    /// registry.register_operator(Operator::binary("^", 40, Associativity::Right, |l, r| {
    ///                                                 Ok(Variant::Number(l.as_number()
    ///                                                                     .powf(r.as_number())))
    ///                                             }));
    ///
    /// let expr = Expression::new("2 ^ 3 ^ 2", &registry);
    /// assert_eq!(expr.eval().unwrap(), Variant::Number(512.0));
    /// ```
    pub fn binary<F>(symbol: impl Into<String>,
                     precedence: u8,
                     associativity: Associativity,
                     apply: F)
                     -> Self
        where F: Fn(&Variant, &Variant) -> EvalResult<Variant> + Send + Sync + 'static
    {
        Self::binary_lazy(symbol, precedence, associativity, move |args| {
            let left = args.force(0)?;
            let right = args.force(1)?;
            apply(&left, &right)
        })
    }

    /// Creates a binary operator that decides itself which operands to force.
    pub fn binary_lazy<F>(symbol: impl Into<String>,
                          precedence: u8,
                          associativity: Associativity,
                          apply: F)
                          -> Self
        where F: Fn(&Arguments<'_>) -> EvalResult<Variant> + Send + Sync + 'static
    {
        Self { symbol: symbol.into(),
               precedence,
               associativity,
               arity: OperatorArity::Binary,
               implementation: Arc::new(apply) }
    }

    /// Creates a right-associative prefix operator.
    pub fn unary<F>(symbol: impl Into<String>, precedence: u8, apply: F) -> Self
        where F: Fn(&Variant) -> EvalResult<Variant> + Send + Sync + 'static
    {
        Self { symbol:         symbol.into(),
               precedence,
               associativity:  Associativity::Right,
               arity:          OperatorArity::Unary,
               implementation: Arc::new(move |args: &Arguments<'_>| apply(&args.force(0)?)), }
    }

    /// The symbol as written in source text.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        self.precedence
    }

    /// Grouping of equal-precedence chains.
    #[must_use]
    pub const fn associativity(&self) -> Associativity {
        self.associativity
    }

    /// Whether the operator is prefix or infix.
    #[must_use]
    pub const fn arity(&self) -> OperatorArity {
        self.arity
    }

    /// Applies the operator to its (lazy) operands.
    pub fn apply(&self, args: &Arguments<'_>) -> EvalResult<Variant> {
        (self.implementation)(args)
    }

    /// Whether this operator, sitting on the compiler's stack, must be emitted
    /// before `incoming` is pushed.
    ///
    /// Stacked operators of higher precedence always go first. Equal
    /// precedence goes first only when `incoming` is left-associative.
    #[must_use]
    pub const fn yields_to(&self, incoming: &Self) -> bool {
        match incoming.associativity {
            Associativity::Left => self.precedence >= incoming.precedence,
            Associativity::Right => self.precedence > incoming.precedence,
        }
    }
}
