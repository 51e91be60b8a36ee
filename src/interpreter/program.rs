use std::sync::Arc;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        compiler::rpn::RpnToken,
        symbols::{Binding, Function, Operator},
        value::core::Variant,
    },
};

/// A node of the compiled tree.
///
/// Nothing is evaluated when the tree is built. A node computes its value
/// only when forced, and operator and function nodes hand their children to
/// the implementation unevaluated so it can skip the ones it does not need.
#[derive(Debug, Clone)]
pub enum Node {
    /// A literal value from the source text.
    Literal(Variant),
    /// A variable reference, resolved at compile time.
    Variable {
        /// The name as written in source.
        name:    String,
        /// What the name was bound to.
        binding: Binding,
    },
    /// An operator applied to its operand subtrees.
    Operator {
        /// The resolved operator.
        operator: Arc<Operator>,
        /// Operands in source order.
        operands: Vec<Self>,
    },
    /// A function call with its argument subtrees.
    Function {
        /// The resolved function.
        function:  Arc<Function>,
        /// Arguments in source order.
        arguments: Vec<Self>,
    },
}

impl Node {
    /// Evaluates the node.
    ///
    /// Literals and constant variables return their value, dynamic variables
    /// return their latest refreshed value, and operator or function nodes
    /// delegate to their implementation.
    pub fn force(&self) -> EvalResult<Variant> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::Variable { binding, .. } => Ok(binding.value()),
            Self::Operator { operator, operands } => {
                operator.apply(&Arguments::new(operator.symbol(), operands))
            },
            Self::Function { function, arguments } => {
                function.call(&Arguments::new(function.name(), arguments))
            },
        }
    }
}

/// Lazy arguments passed to an operator or function implementation.
///
/// Each argument is a subtree that is evaluated only when
/// [`Arguments::force`] is called for it.
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    name:  &'a str,
    nodes: &'a [Node],
}

impl<'a> Arguments<'a> {
    /// Wraps argument subtrees for the operator or function called `name`.
    #[must_use]
    pub const fn new(name: &'a str, nodes: &'a [Node]) -> Self {
        Self { name, nodes }
    }

    /// Number of arguments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no arguments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluates the argument at `index`.
    ///
    /// Forcing the same argument twice evaluates it twice.
    pub fn force(&self, index: usize) -> EvalResult<Variant> {
        self.nodes
            .get(index)
            .ok_or_else(|| EvalError::MissingArgument { name: self.name.to_owned(),
                                                        index })?
            .force()
    }

    /// Evaluates every argument in order, stopping at the first failure.
    pub fn force_all(&self) -> EvalResult<Vec<Variant>> {
        self.nodes.iter().map(Node::force).collect()
    }
}

/// A compiled expression: the postfix token list and the tree built from it.
#[derive(Debug, Clone)]
pub struct Program {
    root: Node,
    rpn:  Vec<RpnToken>,
}

impl Program {
    pub(crate) const fn new(root: Node, rpn: Vec<RpnToken>) -> Self {
        Self { root, rpn }
    }

    /// Forces the root node.
    pub fn eval(&self) -> EvalResult<Variant> {
        self.root.force()
    }

    /// The postfix tokens the tree was built from.
    #[must_use]
    pub fn rpn(&self) -> &[RpnToken] {
        &self.rpn
    }

    /// The postfix tokens rendered as space-separated text.
    ///
    /// # Example
    /// ```
    /// use condex::{Expression, Registry};
    ///
    /// let expr = Expression::new("1 + 2 * MAX(3, 4)", &Registry::builtin());
    /// assert_eq!(expr.to_rpn().unwrap(), "1 2 3 4 MAX * +");
    /// ```
    #[must_use]
    pub fn to_rpn(&self) -> String {
        self.rpn
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
