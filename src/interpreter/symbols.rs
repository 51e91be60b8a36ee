/// The generic name-to-entry table.
///
/// Provides root (empty) and derived (copied from a parent) construction so
/// per-expression additions never touch the shared built-ins.
pub mod table;
/// Operator entries.
///
/// Declares operators with their precedence, associativity and arity, and the
/// rule the compiler uses to decide when a stacked operator is emitted.
pub mod operator;
/// Function entries.
///
/// Declares callable functions and the arity constraint checked when a call
/// is compiled.
pub mod function;
/// Variable entries.
///
/// Declares what an identifier can be bound to: a constant value or a
/// dynamic variable refreshed by the host.
pub mod variable;
/// The built-in registry and per-expression symbol overlays.
pub mod registry;

pub use function::{Arity, Function};
pub use operator::{Associativity, Operator, OperatorArity};
pub use registry::{FunctionTable, OperatorTable, Registry, Symbols, VariableTable};
pub use table::SymbolTable;
pub use variable::Binding;
