/// Numeric formatting and conversion helpers.
///
/// This module provides the conversions the value model relies on: printing
/// numbers the way condition authors write them, parsing numeric text
/// leniently, and turning a floating-point precision argument into a bounded
/// integer exponent.
pub mod num;
