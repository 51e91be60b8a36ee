use std::{
    collections::HashSet,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use condex::{
    Arity, Error, Expression, Function, Operator, Registry, Variant,
    error::{CompileError, EvalError},
    interpreter::symbols::Associativity,
};
use pretty_assertions::assert_eq;

fn failing() -> Function {
    Function::eager("FAIL", Arity::Exact(0), |_| Err(EvalError::host("FAIL", "boom")))
}

fn counting(calls: &Arc<AtomicUsize>) -> Function {
    let calls = Arc::clone(calls);
    Function::eager("COUNT", Arity::Exact(0), move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(Variant::Number(1.0))
    })
}

#[test]
fn compiles_lazily_and_once() {
    let expr = Expression::builder("speed * 2 > limit", &Registry::builtin()).with_variable("speed", 30)
                                                                             .with_variable("limit", 50)
                                                                             .build();

    assert!(!expr.is_compiled());
    assert_eq!(expr.eval().unwrap(), Variant::Boolean(true));
    assert!(expr.is_compiled());

    let first = expr.program().unwrap();
    let second = expr.program().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn compile_failures_are_memoized() {
    let expr = Expression::new("1 +", &Registry::builtin());

    let expected = CompileError::UnexpectedEndOfInput { position: 3 };
    assert_eq!(expr.program().unwrap_err(), expected);
    assert!(expr.is_compiled());
    assert_eq!(expr.to_rpn().unwrap_err(), expected);
    assert_eq!(expr.eval().unwrap_err(), Error::Compile(expected));
}

#[test]
fn builder_compile_reports_errors_eagerly() {
    let registry = Registry::builtin();

    assert!(Expression::builder("MIN()", &registry).compile().is_err());

    let expr = Expression::builder("MIN(3, 1)", &registry).compile().unwrap();
    assert!(expr.is_compiled());
    assert_eq!(expr.eval().unwrap(), Variant::Number(1.0));
}

#[test]
fn additions_stay_in_their_expression() {
    let registry = Registry::builtin();

    let mut builder = Expression::builder("x + 1", &registry);
    builder.add_variable("x", 41);
    let with_x = builder.build();
    let without_x = Expression::new("x + 1", &registry);

    assert_eq!(with_x.eval().unwrap(), Variant::Number(42.0));
    assert!(matches!(without_x.eval(),
                     Err(Error::Compile(CompileError::UnknownVariable { .. }))));
    assert!(!registry.variables().contains("x"));
}

#[test]
fn additions_shadow_builtins() {
    let expr = Expression::builder("PI", &Registry::builtin()).with_variable("PI", 3)
                                                              .build();
    assert_eq!(expr.eval().unwrap(), Variant::Number(3.0));
}

#[test]
fn add_variables_accepts_pairs() {
    let mut builder = Expression::builder("player.health < 20 && biome = 'forest'", &Registry::builtin());
    builder.add_variables([("player.health", Variant::Number(12.0)),
                           ("biome", Variant::from("forest"))]);

    assert_eq!(builder.build().eval().unwrap(), Variant::Boolean(true));
}

#[test]
fn equality_and_hashing_use_source_only() {
    let registry = Registry::builtin();
    let a = Expression::builder("x", &registry).with_variable("x", 1).build();
    let b = Expression::builder("x", &registry).with_variable("x", 2).build();
    let c = Expression::new("x + 0", &registry);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Expression> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn declared_names_are_sorted() {
    let expr = Expression::builder("1", &Registry::builtin()).with_variable("speed", 1)
                                                             .build();

    let variables = expr.declared_variables();
    let mut sorted = variables.clone();
    sorted.sort();
    assert_eq!(variables, sorted);
    assert!(variables.contains(&"speed".to_string()));
    assert!(variables.contains(&"PI".to_string()));

    assert!(expr.declared_functions().contains(&"IF".to_string()));
    assert!(expr.declared_operators().contains(&"<>".to_string()));
    assert!(!expr.is_compiled());
}

#[test]
fn rpn_tokens_are_exposed() {
    let expr = Expression::new("MAX(1, 2) * 3", &Registry::builtin());

    let rendered = expr.rpn()
                       .unwrap()
                       .iter()
                       .map(ToString::to_string)
                       .collect::<Vec<_>>();
    assert_eq!(rendered, ["1", "2", "MAX", "3", "*"]);
    assert_eq!(expr.source(), "MAX(1, 2) * 3");
}

#[test]
fn host_functions() {
    let mut builder = Expression::builder("BIOME() = 'forest'", &Registry::builtin());
    builder.add_function(Function::eager("BIOME", Arity::Exact(0), |_| Ok(Variant::from("forest"))));

    assert_eq!(builder.build().eval().unwrap(), Variant::Boolean(true));
}

#[test]
fn unselected_branches_are_never_forced() {
    let registry = Registry::builtin();
    let eval = |src: &str| {
        let mut builder = Expression::builder(src, &registry);
        builder.add_function(failing());
        builder.build().eval()
    };

    assert_eq!(eval("IF(FALSE, FAIL(), 2)").unwrap(), Variant::Number(2.0));
    assert_eq!(eval("IF(TRUE, 1, FAIL())").unwrap(), Variant::Number(1.0));
    assert_eq!(eval("FALSE && FAIL()").unwrap(), Variant::Boolean(false));
    assert_eq!(eval("TRUE || FAIL()").unwrap(), Variant::Boolean(true));

    assert_eq!(eval("IF(TRUE, FAIL(), 2)").unwrap_err(),
               Error::Eval(EvalError::host("FAIL", "boom")));
    assert!(eval("TRUE && FAIL()").is_err());
}

#[test]
fn oneof_stops_at_first_match() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut builder = Expression::builder("ONEOF(1, 1, COUNT(), COUNT())", &Registry::builtin());
    builder.add_function(counting(&calls));

    assert_eq!(builder.build().eval().unwrap(), Variant::Boolean(true));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn eager_arguments_are_forced_on_every_eval() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut builder = Expression::builder("MAX(COUNT(), COUNT())", &Registry::builtin());
    builder.add_function(counting(&calls));
    let expr = builder.build();

    expr.eval().unwrap();
    expr.eval().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn host_operators_split_by_longest_match() {
    let registry = Registry::builtin();

    assert_eq!(Expression::new("2 ** 3", &registry).eval().unwrap_err(),
               Error::Compile(CompileError::MissingOperand { symbol:   "*".into(),
                                                             position: 3, }));

    let mut builder = Expression::builder("2 ** 3 ** 2", &registry);
    builder.add_operator(Operator::binary("**", 40, Associativity::Right, |l, r| {
                             Ok(Variant::Number(l.as_number().powf(r.as_number())))
                         }));
    let expr = builder.build();

    assert_eq!(expr.to_rpn().unwrap(), "2 3 2 ** **");
    assert_eq!(expr.eval().unwrap(), Variant::Number(512.0));
}

#[test]
fn host_operators_keep_signed_literals() {
    let mut builder = Expression::builder("2*-3", &Registry::builtin());
    builder.add_operator(Operator::binary("**", 40, Associativity::Right, |l, r| {
                             Ok(Variant::Number(l.as_number().powf(r.as_number())))
                         }));

    assert_eq!(builder.build().eval().unwrap(), Variant::Number(-6.0));
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = Registry::empty();

    assert!(matches!(Expression::new("1 + 2", &registry).eval(),
                     Err(Error::Compile(CompileError::UnknownOperator { .. }))));
    assert_eq!(Expression::new("42", &registry).eval().unwrap(), Variant::Number(42.0));
}

#[test]
fn concurrent_first_use_compiles_once() {
    let expr = Arc::new(Expression::new("2 + 3 * 4", &Registry::builtin()));

    let programs = std::thread::scope(|scope| {
        let handles = (0..8).map(|_| {
                                let expr = Arc::clone(&expr);
                                scope.spawn(move || {
                                         assert_eq!(expr.eval().unwrap(), Variant::Number(14.0));
                                         expr.program().unwrap()
                                     })
                            })
                            .collect::<Vec<_>>();
        handles.into_iter()
               .map(|h| h.join().unwrap())
               .collect::<Vec<_>>()
    });

    assert!(programs.iter().all(|p| Arc::ptr_eq(p, &programs[0])));
}
