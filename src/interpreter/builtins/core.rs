use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        builtins::{clamp, logic, math, min_max, operators, random},
        symbols::{Arity, Function, Registry},
        value::core::Variant,
    },
};

/// Defines builtin functions by generating their registration code.
///
/// Each entry provides:
/// - a string name,
/// - an arity constraint,
/// - the evaluation strategy (`eager` or `lazy`) and its implementation.
///
/// The macro produces `register_functions`, which installs every entry into
/// a registry.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                $strategy:ident: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        fn register_functions(registry: &mut Registry) {
            $(
                registry.register_function(Function::$strategy($name, $arity, $func));
            )*
        }
    };
}

builtin_functions! {
    "MATCH"   => { arity: Arity::Exact(2),        eager: logic::match_regex },
    "NOT"     => { arity: Arity::Exact(1),        eager: logic::not },
    "IF"      => { arity: Arity::Exact(3),        lazy:  logic::if_then_else },
    "ONEOF"   => { arity: Arity::AtLeast(1),      lazy:  logic::one_of },
    "RANDOM"  => { arity: Arity::Exact(0),        eager: random::random },
    "SIN"     => { arity: Arity::Exact(1),        eager: math::sin },
    "COS"     => { arity: Arity::Exact(1),        eager: math::cos },
    "TAN"     => { arity: Arity::Exact(1),        eager: math::tan },
    "RAD"     => { arity: Arity::Exact(1),        eager: math::rad },
    "DEG"     => { arity: Arity::Exact(1),        eager: math::deg },
    "MIN"     => { arity: Arity::AtLeast(1),      eager: |args| min_max::min_max("MIN", args) },
    "MAX"     => { arity: Arity::AtLeast(1),      eager: |args| min_max::min_max("MAX", args) },
    "ABS"     => { arity: Arity::Exact(1),        eager: math::abs },
    "ROUND"   => { arity: Arity::OneOf(&[1, 2]),  eager: math::round },
    "FLOOR"   => { arity: Arity::Exact(1),        eager: math::floor },
    "CEILING" => { arity: Arity::Exact(1),        eager: math::ceiling },
    "SQRT"    => { arity: Arity::Exact(1),        eager: math::sqrt },
    "CLAMP"   => { arity: Arity::Exact(3),        eager: clamp::clamp },
}

/// Installs every built-in operator, constant and function into `registry`.
///
/// Entries already present under the same name are replaced.
pub fn register_all(registry: &mut Registry) {
    operators::register_operators(registry);
    registry.register_variable("PI", std::f64::consts::PI)
            .register_variable("e", std::f64::consts::E)
            .register_variable("TRUE", true)
            .register_variable("FALSE", false);
    register_functions(registry);
}

/// Checks that a builtin received exactly `N` evaluated arguments.
///
/// The compiler already enforces arities, so this only fails when a builtin
/// is called directly with a hand-built argument slice.
///
/// # Parameters
/// - `name`: Function name for error reporting.
/// - `args`: Evaluated arguments.
///
/// # Returns
/// The arguments as a fixed-size array reference.
pub(crate) fn expect_args<'a, const N: usize>(name: &str,
                                              args: &'a [Variant])
                                              -> EvalResult<&'a [Variant; N]> {
    <&[Variant; N]>::try_from(args).map_err(|_| EvalError::ArgumentCount { name:     name.to_owned(),
                                                                           expected: N,
                                                                           found:    args.len(), })
}
