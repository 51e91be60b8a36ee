use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use condex::{
    Arity, DynamicVariantList, ExpressionCache, Function, Registry, Variant, error::EvalError,
};
use pretty_assertions::assert_eq;

fn cache() -> ExpressionCache {
    ExpressionCache::new(Arc::new(Registry::builtin()))
}

#[test]
fn blank_text_is_trivially_true() {
    let cache = cache();

    assert!(cache.check(""));
    assert!(cache.check("   "));
    assert!(cache.check("\t\n"));
    assert!(cache.is_empty());
}

#[test]
fn same_text_yields_same_expression() {
    let cache = cache();

    let first = cache.compile("1 + 2");
    let second = cache.compile("  1 + 2 ");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.eval("1 + 2").unwrap(), Variant::Number(3.0));
    assert_eq!(first.source(), "1 + 2");
}

#[test]
fn broken_text_is_quarantined_once() {
    let cache = cache();

    let first = cache.compile("(((");
    assert!(first.is_quarantined());
    assert_eq!(cache.naughty_list(), vec!["(((".to_string()]);

    let second = cache.compile("(((");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.naughty_list().len(), 1);

    assert_eq!(first.eval().unwrap(),
               Variant::from("Error at position 3: Unexpected end of input."));
    assert!(!cache.check("((("));
    assert_eq!(cache.naughty_list().len(), 1);
}

#[test]
fn check_coerces_to_boolean() {
    let cache = cache();

    assert!(cache.check("2 > 1"));
    assert!(!cache.check("1 > 2"));
    assert!(cache.check("'yes'"));
    assert!(!cache.check("'FALSE'"));
    assert!(!cache.check("0"));
    assert!(cache.check("0.5"));
}

#[test]
fn evaluation_failures_are_false_but_not_quarantined() {
    let mut registry = Registry::builtin();
    registry.register_function(Function::eager("FAIL", Arity::Exact(0), |_| {
                                                   Err(EvalError::host("FAIL", "world not loaded"))
                                               }));
    let cache = ExpressionCache::new(Arc::new(registry));

    assert!(!cache.check("FAIL()"));
    assert!(cache.naughty_list().is_empty());
    assert!(cache.eval("FAIL()").is_err());
}

#[test]
fn repeated_checks_see_the_same_state() {
    let cache = cache();

    for _ in 0..3 {
        assert!(cache.check("MAX(1, 2, 3) = 3 && ONEOF(2, 1, 2)"));
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn registered_lists_are_attached_and_refreshed() {
    let ticks = Arc::new(AtomicU32::new(0));
    let source = Arc::clone(&ticks);

    let mut list = DynamicVariantList::new();
    list.register("tick", 0, move || Variant::from(f64::from(source.fetch_add(1, Ordering::SeqCst) + 1)));
    let list = Arc::new(list);

    let cache = cache();
    cache.register_list(Arc::clone(&list));
    cache.register_list(Arc::clone(&list));

    assert!(!cache.check("tick > 0"));

    cache.update_dynamics();
    assert_eq!(ticks.load(Ordering::SeqCst), 1);
    assert!(cache.check("tick > 0"));
    assert_eq!(cache.eval("tick").unwrap(), Variant::Number(1.0));

    cache.update_dynamics();
    assert_eq!(cache.eval("tick").unwrap(), Variant::Number(2.0));
    assert_eq!(cache.len(), 2);
}

#[test]
fn concurrent_misses_share_one_expression() {
    let cache = Arc::new(cache());

    let expressions = std::thread::scope(|scope| {
        let handles = (0..16).map(|_| {
                                 let cache = Arc::clone(&cache);
                                 scope.spawn(move || cache.compile("MAX(1, 2) + 1"))
                             })
                             .collect::<Vec<_>>();
        handles.into_iter()
               .map(|h| h.join().unwrap())
               .collect::<Vec<_>>()
    });

    assert!(expressions.iter().all(|e| Arc::ptr_eq(e, &expressions[0])));
    assert_eq!(cache.len(), 1);
    assert_eq!(expressions[0].eval().unwrap(), Variant::Number(3.0));
}

#[test]
fn global_cache_uses_global_registry() {
    let cache = ExpressionCache::global();

    assert!(cache.check("PI > 3 && e < 3"));
    assert!(Arc::ptr_eq(&cache.compile("PI > 3 && e < 3"), &cache.compile("PI > 3 && e < 3")));
}
