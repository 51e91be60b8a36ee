use std::cmp::Ordering;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{builtins::core::expect_args, program::Arguments, value::core::Variant},
};

/// Most compiled patterns kept at once. The cache is emptied when full.
pub const MAX_CACHED_PATTERNS: usize = 256;

/// Compiled `MATCH` patterns, keyed by their source.
static PATTERNS: Lazy<DashMap<String, Regex>> = Lazy::new(DashMap::new);

/// Logical negation of the argument's boolean view.
///
/// # Example
/// ```
/// use condex::{Variant, interpreter::builtins::logic::not};
///
/// assert_eq!(not(&[Variant::from("false")]).unwrap(), Variant::Boolean(true));
/// ```
pub fn not(args: &[Variant]) -> EvalResult<Variant> {
    let [value] = expect_args::<1>("NOT", args)?;
    Ok(Variant::Boolean(!value.as_boolean()))
}

/// Lazy ternary: forces the condition, then exactly one branch.
pub fn if_then_else(args: &Arguments<'_>) -> EvalResult<Variant> {
    if args.force(0)?.as_boolean() {
        args.force(1)
    } else {
        args.force(2)
    }
}

/// Tests whether the first argument equals any of the others.
///
/// Candidates are forced left to right and the scan stops at the first one
/// that compares equal to the needle.
pub fn one_of(args: &Arguments<'_>) -> EvalResult<Variant> {
    let needle = args.force(0)?;

    for index in 1..args.len() {
        if needle.compare_to(&args.force(index)?) == Ordering::Equal {
            return Ok(Variant::Boolean(true));
        }
    }

    Ok(Variant::Boolean(false))
}

/// Tests a string against a regular expression.
///
/// The pattern is searched for anywhere in the text; anchor it with `^` and
/// `$` for a full match. Compiled patterns are cached process-wide, up to
/// [`MAX_CACHED_PATTERNS`] of them. An invalid pattern yields an
/// `InvalidArgument` error.
///
/// # Parameters
/// - `args`: Slice containing `[pattern, text]`.
///
/// # Example
/// ```
/// use condex::{Variant, interpreter::builtins::logic::match_regex};
///
/// let hit = match_regex(&[Variant::from("^forest_"), Variant::from("forest_hills")]).unwrap();
/// assert_eq!(hit, Variant::Boolean(true));
///
/// assert!(match_regex(&[Variant::from("("), Variant::from("x")]).is_err());
/// ```
pub fn match_regex(args: &[Variant]) -> EvalResult<Variant> {
    let [pattern, text] = expect_args::<2>("MATCH", args)?;
    let pattern = pattern.as_string();
    let text = text.as_string();

    if let Some(regex) = PATTERNS.get(&*pattern) {
        return Ok(Variant::Boolean(regex.is_match(&text)));
    }

    let regex = Regex::new(&pattern).map_err(|e| EvalError::invalid_argument("MATCH", e.to_string()))?;
    let matched = regex.is_match(&text);
    if PATTERNS.len() >= MAX_CACHED_PATTERNS {
        PATTERNS.clear();
    }
    PATTERNS.insert(pattern.into_owned(), regex);

    Ok(Variant::Boolean(matched))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_cache_stays_bounded() {
        for i in 0..MAX_CACHED_PATTERNS * 2 {
            let args = [Variant::from(format!("^{i}$")), Variant::from(i.to_string())];
            assert_eq!(match_regex(&args).unwrap(), Variant::Boolean(true));
        }

        assert!(PATTERNS.len() <= MAX_CACHED_PATTERNS);
        assert_eq!(match_regex(&[Variant::from("^0$"), Variant::from("10")]).unwrap(),
                   Variant::Boolean(false));
    }
}
