/// The built-in function table and registry seeding.
///
/// Declares every built-in function with its arity in one table and installs
/// operators, constants and functions into a [`crate::Registry`].
pub mod core;
/// Built-in operators and their precedence levels.
pub mod operators;
/// Numeric functions: trigonometry, rounding, absolute value and roots.
pub mod math;
/// Variadic `MIN` and `MAX`.
pub mod min_max;
/// `CLAMP`.
pub mod clamp;
/// Boolean functions: `NOT`, `IF`, `ONEOF` and `MATCH`.
pub mod logic;
/// `RANDOM`.
pub mod random;
