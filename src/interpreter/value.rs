/// The `Variant` value type.
///
/// Declares the number/boolean/string value that flows through compiled
/// programs, with its coercions, ordering comparison and `add`.
pub mod core;
/// Dynamic variables.
///
/// Defines values that the host recomputes once per evaluation cycle and the
/// lists that group them for refreshing and for attaching to expressions.
pub mod dynamic;
