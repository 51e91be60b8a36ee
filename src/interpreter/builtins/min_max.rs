use std::cmp::Ordering;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::value::core::Variant,
};

/// Computes the minimum or maximum of one or more values.
///
/// Values are ordered with [`Variant::compare_to`], so each candidate is
/// coerced to the type of the current best. Ties keep the earlier argument.
///
/// # Parameters
/// - `name`: Either `"MIN"` or `"MAX"`.
/// - `args`: At least one evaluated argument.
///
/// # Returns
/// The selected argument, unchanged.
///
/// # Example
/// ```
/// use condex::{Variant, interpreter::builtins::min_max::min_max};
///
/// let args = [Variant::Number(3.0), Variant::Number(1.0), Variant::Number(2.0)];
/// assert_eq!(min_max("MIN", &args).unwrap(), Variant::Number(1.0));
/// assert_eq!(min_max("MAX", &args).unwrap(), Variant::Number(3.0));
/// ```
pub fn min_max(name: &str, args: &[Variant]) -> EvalResult<Variant> {
    let wanted = if name == "MIN" { Ordering::Less } else { Ordering::Greater };

    let (first, rest) = args.split_first()
                            .ok_or_else(|| EvalError::ArgumentCount { name:     name.to_owned(),
                                                                      expected: 1,
                                                                      found:    0, })?;

    let best = rest.iter().fold(first, |best, candidate| {
                                if candidate.compare_to(best) == wanted { candidate } else { best }
                            });

    Ok(best.clone())
}
