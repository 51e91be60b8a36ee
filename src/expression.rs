use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use once_cell::sync::OnceCell;

use crate::{
    error::{CompileResult, Error},
    interpreter::{
        compiler::{core::compile, rpn::RpnToken},
        program::{Node, Program},
        symbols::{Binding, Function, Operator, Registry, Symbols},
        value::{
            core::Variant,
            dynamic::{DynamicVariant, DynamicVariantList},
        },
    },
};

/// One source string with its own symbol tables and a lazily compiled
/// program.
///
/// An `Expression` is immutable. Construction never compiles; the first call
/// to [`Expression::eval`], [`Expression::program`], [`Expression::rpn`] or
/// [`Expression::to_rpn`] compiles once and memoizes the result, including a
/// failure. Concurrent first calls compile once.
///
/// Two expressions are equal when their source text is equal.
///
/// # Example
/// ```
/// use condex::{Expression, Registry, Variant};
///
/// let expr = Expression::builder("speed * 2 > limit", &Registry::builtin())
///     .with_variable("speed", 30)
///     .with_variable("limit", 50)
///     .build();
///
/// assert!(!expr.is_compiled());
/// assert_eq!(expr.eval().unwrap(), Variant::Boolean(true));
/// assert!(expr.is_compiled());
/// ```
pub struct Expression {
    source:      Arc<str>,
    symbols:     Symbols,
    program:     OnceCell<CompileResult<Arc<Program>>>,
    quarantined: bool,
}

impl Expression {
    /// Creates an expression using the registry's symbols unchanged.
    #[must_use]
    pub fn new(source: &str, registry: &Registry) -> Self {
        ExpressionBuilder::new(source, registry).build()
    }

    /// Starts a builder that can add symbols before the expression is frozen.
    #[must_use]
    pub fn builder(source: &str, registry: &Registry) -> ExpressionBuilder {
        ExpressionBuilder::new(source, registry)
    }

    /// An already-compiled expression that evaluates to `message`.
    ///
    /// Stands in for text that failed to compile.
    pub(crate) fn placeholder(source: &str, message: String) -> Self {
        let value = Variant::from(message);
        let program = Program::new(Node::Literal(value.clone()), vec![RpnToken::Literal(value)]);

        Self { source:      Arc::from(source),
               symbols:     Symbols::default(),
               program:     OnceCell::with_value(Ok(Arc::new(program))),
               quarantined: true, }
    }

    /// The source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn compiled(&self) -> &CompileResult<Arc<Program>> {
        self.program
            .get_or_init(|| compile(&self.source, &self.symbols).map(Arc::new))
    }

    /// The compiled program, compiling on first call.
    pub fn program(&self) -> CompileResult<Arc<Program>> {
        self.compiled().clone()
    }

    /// The program's postfix tokens, compiling on first call.
    pub fn rpn(&self) -> CompileResult<&[RpnToken]> {
        match self.compiled() {
            Ok(program) => Ok(program.rpn()),
            Err(e) => Err(e.clone()),
        }
    }

    /// The program's postfix tokens as space-separated text.
    pub fn to_rpn(&self) -> CompileResult<String> {
        self.compiled().as_ref().map(|program| program.to_rpn()).map_err(Clone::clone)
    }

    /// Evaluates the expression, compiling on first call.
    ///
    /// Dynamic variables are read as they stand; refreshing them is the
    /// caller's job.
    pub fn eval(&self) -> Result<Variant, Error> {
        let program = self.compiled().as_ref().map_err(Clone::clone)?;
        Ok(program.eval()?)
    }

    /// Whether compilation has already run, successfully or not.
    #[must_use]
    pub fn is_compiled(&self) -> bool {
        self.program.get().is_some()
    }

    /// Whether this is a stand-in for text that failed to compile.
    #[must_use]
    pub const fn is_quarantined(&self) -> bool {
        self.quarantined
    }

    /// Names of every variable visible to the expression, sorted.
    #[must_use]
    pub fn declared_variables(&self) -> Vec<String> {
        self.symbols.variables.sorted_keys()
    }

    /// Symbols of every operator visible to the expression, sorted.
    #[must_use]
    pub fn declared_operators(&self) -> Vec<String> {
        self.symbols.operators.sorted_keys()
    }

    /// Names of every function visible to the expression, sorted.
    #[must_use]
    pub fn declared_functions(&self) -> Vec<String> {
        self.symbols.functions.sorted_keys()
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
         .field("source", &self.source)
         .field("compiled", &self.is_compiled())
         .field("quarantined", &self.quarantined)
         .finish_non_exhaustive()
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Expression {}

impl Hash for Expression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

/// Collects symbol additions for one expression before it is frozen.
///
/// The builder starts from a copy of the registry's tables. Additions shadow
/// entries of the same name and never affect the registry or other
/// expressions.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    source:  Arc<str>,
    symbols: Symbols,
}

impl ExpressionBuilder {
    /// Starts a builder over a copy of the registry's symbol tables.
    #[must_use]
    pub fn new(source: &str, registry: &Registry) -> Self {
        Self { source:  Arc::from(source),
               symbols: Symbols::derive(registry), }
    }

    /// Adds or replaces a constant variable.
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<Variant>) -> &mut Self {
        self.symbols
            .variables
            .put(name, Binding::Constant(value.into()));
        self
    }

    /// Adds or replaces several constant variables.
    pub fn add_variables<I, K, V>(&mut self, variables: I) -> &mut Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<Variant>
    {
        for (name, value) in variables {
            self.add_variable(name, value);
        }
        self
    }

    /// Adds or replaces a dynamic variable under its own name.
    pub fn add_dynamic(&mut self, variant: Arc<DynamicVariant>) -> &mut Self {
        let name = variant.name().to_owned();
        self.symbols.variables.put(name, Binding::Dynamic(variant));
        self
    }

    /// Adds every member of a dynamic variable list.
    pub fn attach(&mut self, list: &DynamicVariantList) -> &mut Self {
        list.attach(self);
        self
    }

    /// Adds or replaces a function.
    pub fn add_function(&mut self, function: Function) -> &mut Self {
        let name = function.name().to_owned();
        self.symbols.functions.put(name, Arc::new(function));
        self
    }

    /// Adds or replaces an operator.
    pub fn add_operator(&mut self, operator: Operator) -> &mut Self {
        let symbol = operator.symbol().to_owned();
        self.symbols.operators.put(symbol, Arc::new(operator));
        self
    }

    /// Consuming form of [`ExpressionBuilder::add_variable`].
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Variant>) -> Self {
        self.add_variable(name, value);
        self
    }

    /// Freezes the builder without compiling.
    #[must_use]
    pub fn build(self) -> Expression {
        Expression { source:      self.source,
                     symbols:     self.symbols,
                     program:     OnceCell::new(),
                     quarantined: false, }
    }

    /// Freezes the builder and compiles immediately.
    pub fn compile(self) -> CompileResult<Expression> {
        let expression = self.build();
        expression.compiled().as_ref().map_err(Clone::clone)?;
        Ok(expression)
    }
}
