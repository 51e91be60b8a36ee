use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::interpreter::{
    builtins,
    symbols::{Binding, Function, Operator, SymbolTable},
    value::{core::Variant, dynamic::DynamicVariant},
};

/// Operators keyed by symbol.
pub type OperatorTable = SymbolTable<Arc<Operator>>;
/// Functions keyed by name.
pub type FunctionTable = SymbolTable<Arc<Function>>;
/// Variables keyed by name.
pub type VariableTable = SymbolTable<Binding>;

static GLOBAL: OnceCell<Registry> = OnceCell::new();

/// The three root symbol tables every expression derives from.
///
/// A registry is configured once at startup and then shared read-only.
/// Expressions copy its tables into their own [`Symbols`] overlay, so later
/// additions to one expression never leak into another.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    operators: OperatorTable,
    functions: FunctionTable,
    variables: VariableTable,
}

impl Registry {
    /// Creates a registry with no symbols at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in operators, functions and
    /// constants.
    ///
    /// # Example
    /// ```
    /// use condex::Registry;
    ///
    /// let registry = Registry::builtin();
    /// assert!(registry.functions().contains("IF"));
    /// assert!(registry.operators().contains("&&"));
    /// assert!(registry.variables().contains("PI"));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        builtins::core::register_all(&mut registry);
        registry
    }

    /// Adds or replaces an operator, keyed by its symbol.
    pub fn register_operator(&mut self, operator: Operator) -> &mut Self {
        let symbol = operator.symbol().to_owned();
        self.operators.put(symbol, Arc::new(operator));
        self
    }

    /// Adds or replaces a function, keyed by its name.
    pub fn register_function(&mut self, function: Function) -> &mut Self {
        let name = function.name().to_owned();
        self.functions.put(name, Arc::new(function));
        self
    }

    /// Adds or replaces a constant variable.
    pub fn register_variable(&mut self, name: impl Into<String>, value: impl Into<Variant>) -> &mut Self {
        self.variables.put(name, Binding::Constant(value.into()));
        self
    }

    /// Adds or replaces a dynamic variable, keyed by its name.
    pub fn register_dynamic(&mut self, variant: Arc<DynamicVariant>) -> &mut Self {
        let name = variant.name().to_owned();
        self.variables.put(name, Binding::Dynamic(variant));
        self
    }

    /// The root operator table.
    #[must_use]
    pub const fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// The root function table.
    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// The root variable table.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Installs `registry` as the process-wide registry.
    ///
    /// Succeeds only before the global registry is first read. Otherwise the
    /// rejected registry is handed back.
    pub fn install(registry: Self) -> Result<(), Self> {
        GLOBAL.set(registry)
    }

    /// The process-wide registry, defaulting to [`Registry::builtin`].
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::builtin)
    }
}

/// Per-expression symbol tables derived from a [`Registry`].
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    /// Operators visible to the expression.
    pub operators: OperatorTable,
    /// Functions visible to the expression.
    pub functions: FunctionTable,
    /// Variables visible to the expression.
    pub variables: VariableTable,
}

impl Symbols {
    /// Derives fresh tables from the registry's roots.
    #[must_use]
    pub fn derive(registry: &Registry) -> Self {
        Self { operators: SymbolTable::derive(&registry.operators),
               functions: SymbolTable::derive(&registry.functions),
               variables: SymbolTable::derive(&registry.variables), }
    }
}
