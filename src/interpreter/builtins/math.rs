use crate::{
    error::{EvalError, EvalResult},
    interpreter::{builtins::core::expect_args, value::core::Variant},
    util::num::precision_from,
};

/// Applies a unary numeric builtin to one argument.
///
/// The generated functions accept exactly one argument, coerce it with
/// [`Variant::as_number`] and return a `Variant::Number`. IEEE-754 results
/// such as `NaN` from `SQRT(-1)` are returned as values, not errors.
///
/// # Example
/// ```
/// use condex::{Variant, interpreter::builtins::math::sin};
///
/// let r = sin(&[Variant::Number(90.0)]).unwrap();
/// assert_eq!(r, Variant::Number(1.0));
/// ```
macro_rules! unary_numeric_builtin {
    ($(#[$meta:meta])* $fname:ident, $label:literal, |$x:ident| $body:expr) => {
        $(#[$meta])*
        pub fn $fname(args: &[Variant]) -> EvalResult<Variant> {
            let [arg] = expect_args::<1>($label, args)?;
            let $x = arg.as_number();
            Ok(Variant::Number($body))
        }
    };
}

unary_numeric_builtin!(
    /// Sine of an angle given in degrees.
    sin, "SIN", |x| x.to_radians().sin()
);
unary_numeric_builtin!(
    /// Cosine of an angle given in degrees.
    cos, "COS", |x| x.to_radians().cos()
);
unary_numeric_builtin!(
    /// Tangent of an angle given in degrees.
    tan, "TAN", |x| x.to_radians().tan()
);
unary_numeric_builtin!(
    /// Converts degrees to radians.
    rad, "RAD", |x| x.to_radians()
);
unary_numeric_builtin!(
    /// Converts radians to degrees.
    deg, "DEG", |x| x.to_degrees()
);
unary_numeric_builtin!(abs, "ABS", |x| x.abs());
unary_numeric_builtin!(floor, "FLOOR", |x| x.floor());
unary_numeric_builtin!(ceiling, "CEILING", |x| x.ceil());
unary_numeric_builtin!(sqrt, "SQRT", |x| x.sqrt());

/// Rounds a number half away from zero.
///
/// Accepts one or two arguments. The optional second argument is the number
/// of decimal places to keep; it is truncated to an integer and clamped to
/// the range `f64` can represent. Negative precisions round to tens,
/// hundreds and so on.
///
/// # Parameters
/// - `args`: `[value]` or `[value, precision]`.
///
/// # Returns
/// The rounded `Variant::Number`.
///
/// # Example
/// ```
/// use condex::{Variant, interpreter::builtins::math::round};
///
/// assert_eq!(round(&[Variant::Number(2.5)]).unwrap(), Variant::Number(3.0));
/// assert_eq!(round(&[Variant::Number(-2.5)]).unwrap(), Variant::Number(-3.0));
/// assert_eq!(round(&[Variant::Number(1234.0), Variant::Number(-2.0)]).unwrap(),
///            Variant::Number(1200.0));
/// ```
pub fn round(args: &[Variant]) -> EvalResult<Variant> {
    let (value, precision) = match args {
        [value] => (value.as_number(), 0),
        [value, precision] => (value.as_number(), precision_from(precision.as_number())),
        _ => {
            return Err(EvalError::ArgumentCount { name:     "ROUND".to_owned(),
                                                  expected: 2,
                                                  found:    args.len(), });
        },
    };

    if precision == 0 {
        return Ok(Variant::Number(value.round()));
    }

    let factor = 10f64.powi(precision.abs());
    let rounded = if precision > 0 {
        (value * factor).round() / factor
    } else {
        (value / factor).round() * factor
    };

    Ok(Variant::Number(rounded))
}
