use crate::{
    error::{EvalError, EvalResult},
    interpreter::{builtins::core::expect_args, value::core::Variant},
};

/// Clamps a numeric value between a minimum and maximum bound.
///
/// All three arguments are coerced to numbers.
/// If `min > max`, an `InvalidArgument` error is returned.
///
/// # Parameters
/// - `args`: Slice containing `[value, min, max]`.
///
/// # Returns
/// `Variant::Number` holding the clamped value.
///
/// # Example
/// ```
/// use condex::{Variant, interpreter::builtins::clamp::clamp};
///
/// let result = clamp(&[Variant::Number(5.0), Variant::Number(0.0), Variant::Number(3.0)]).unwrap();
///
/// // 5 clamped between 0 and 3 yields 3
/// assert_eq!(result, Variant::Number(3.0));
/// ```
pub fn clamp(args: &[Variant]) -> EvalResult<Variant> {
    let [value, min, max] = expect_args::<3>("CLAMP", args)?;

    let value = value.as_number();
    let min = min.as_number();
    let max = max.as_number();

    if min > max {
        return Err(EvalError::invalid_argument("CLAMP", format!("min ({min}) > max ({max})")));
    }

    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };

    Ok(Variant::Number(clamped))
}
