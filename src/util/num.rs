/// Largest magnitude printed as a plain integer (`2^53`).
///
/// Above this, consecutive integers are no longer exactly representable and
/// values fall back to the default float formatting.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Largest decimal precision accepted by rounding helpers.
///
/// `f64` carries roughly 17 significant digits, so larger precisions cannot
/// change the result.
pub const MAX_PRECISION: i32 = 17;

/// Formats a number for display and string coercion.
///
/// Integral values within the safe integer range print without a fractional
/// part. Everything else, including infinities and NaN, uses Rust's shortest
/// round-trip formatting.
///
/// ## Example
/// ```
/// use condex::util::num::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Parses numeric text, ignoring surrounding whitespace.
///
/// ## Returns
/// - `Some(f64)`: If the trimmed text is a valid floating-point literal.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use condex::util::num::parse_number;
///
/// assert_eq!(parse_number(" 42 "), Some(42.0));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("forty"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Converts a precision argument to a decimal exponent.
///
/// The value is truncated toward zero and clamped into
/// `-MAX_PRECISION..=MAX_PRECISION`. Non-finite input maps to `0`.
///
/// ## Example
/// ```
/// use condex::util::num::{MAX_PRECISION, precision_from};
///
/// assert_eq!(precision_from(2.9), 2);
/// assert_eq!(precision_from(-1.0), -1);
/// assert_eq!(precision_from(1e9), MAX_PRECISION);
/// assert_eq!(precision_from(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn precision_from(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc()
         .clamp(f64::from(-MAX_PRECISION), f64::from(MAX_PRECISION)) as i32
}
