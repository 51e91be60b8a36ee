use crate::{
    error::EvalResult,
    interpreter::{builtins::core::expect_args, value::core::Variant},
};

/// A uniformly distributed number in `[0, 1)`.
///
/// # Example
/// ```
/// use condex::{Variant, interpreter::builtins::random::random};
///
/// let Variant::Number(n) = random(&[]).unwrap() else { panic!("expected a number") };
/// assert!((0.0..1.0).contains(&n));
/// ```
pub fn random(args: &[Variant]) -> EvalResult<Variant> {
    expect_args::<0>("RANDOM", args)?;
    Ok(Variant::Number(rand::random::<f64>()))
}
