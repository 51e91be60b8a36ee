use std::cmp::Ordering;

use crate::{
    error::EvalResult,
    interpreter::{
        program::Arguments,
        symbols::{Associativity, Operator, Registry},
        value::core::Variant,
    },
};

/// `*`, `/` and `%`.
pub const MULTIPLICATIVE: u8 = 30;
/// Binary `+` and `-`.
pub const ADDITIVE: u8 = 20;
/// Prefix `!`.
pub const UNARY: u8 = 20;
/// `>`, `>=`, `<` and `<=`.
pub const RELATIONAL: u8 = 10;
/// `=`, `==`, `!=` and `<>`.
pub const EQUALITY: u8 = 7;
/// `&&`.
pub const AND: u8 = 4;
/// `||`.
pub const OR: u8 = 2;

fn arithmetic(symbol: &str, precedence: u8, apply: fn(f64, f64) -> f64) -> Operator {
    Operator::binary(symbol, precedence, Associativity::Left, move |l, r| {
        Ok(Variant::Number(apply(l.as_number(), r.as_number())))
    })
}

fn comparison(symbol: &str, precedence: u8, accept: fn(Ordering) -> bool) -> Operator {
    Operator::binary(symbol, precedence, Associativity::Left, move |l, r| {
        Ok(Variant::Boolean(accept(l.compare_to(r))))
    })
}

fn and(args: &Arguments<'_>) -> EvalResult<Variant> {
    if !args.force(0)?.as_boolean() {
        return Ok(Variant::Boolean(false));
    }
    Ok(Variant::Boolean(args.force(1)?.as_boolean()))
}

fn or(args: &Arguments<'_>) -> EvalResult<Variant> {
    if args.force(0)?.as_boolean() {
        return Ok(Variant::Boolean(true));
    }
    Ok(Variant::Boolean(args.force(1)?.as_boolean()))
}

/// Installs the built-in operators.
///
/// `+` follows [`Variant::add`], so it sums numbers, ORs booleans and
/// concatenates strings depending on the left operand. The other arithmetic
/// operators coerce both sides to numbers and follow IEEE-754, so `1/0` is
/// infinity. Comparisons use [`Variant::compare_to`]. `&&` and `||` force
/// their right operand only when the left does not decide the result.
pub fn register_operators(registry: &mut Registry) {
    registry.register_operator(Operator::binary("+", ADDITIVE, Associativity::Left, |l, r| Ok(l.add(r))))
            .register_operator(arithmetic("-", ADDITIVE, |l, r| l - r))
            .register_operator(arithmetic("*", MULTIPLICATIVE, |l, r| l * r))
            .register_operator(arithmetic("/", MULTIPLICATIVE, |l, r| l / r))
            .register_operator(arithmetic("%", MULTIPLICATIVE, |l, r| l % r))
            .register_operator(Operator::unary("!", UNARY, |v| Ok(Variant::Boolean(!v.as_boolean()))))
            .register_operator(comparison(">", RELATIONAL, Ordering::is_gt))
            .register_operator(comparison(">=", RELATIONAL, Ordering::is_ge))
            .register_operator(comparison("<", RELATIONAL, Ordering::is_lt))
            .register_operator(comparison("<=", RELATIONAL, Ordering::is_le))
            .register_operator(comparison("=", EQUALITY, Ordering::is_eq))
            .register_operator(comparison("==", EQUALITY, Ordering::is_eq))
            .register_operator(comparison("!=", EQUALITY, Ordering::is_ne))
            .register_operator(comparison("<>", EQUALITY, Ordering::is_ne))
            .register_operator(Operator::binary_lazy("&&", AND, Associativity::Left, and))
            .register_operator(Operator::binary_lazy("||", OR, Associativity::Left, or));
}
