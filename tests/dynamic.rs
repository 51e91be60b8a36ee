use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use condex::{DynamicVariant, DynamicVariantList, Expression, Registry, Variant};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

fn counter_list(ticks: &Arc<AtomicU32>) -> DynamicVariantList {
    let source = Arc::clone(ticks);
    let mut list = DynamicVariantList::new();
    list.register("tick", 0, move || Variant::from(f64::from(source.fetch_add(1, Ordering::SeqCst) + 1)));
    list
}

#[test]
fn members_update_in_registration_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut list = DynamicVariantList::new();

    for name in ["a", "b", "c"] {
        let log = Arc::clone(&log);
        list.register(name, false, move || {
                log.lock().push(name);
                Variant::Boolean(true)
            });
    }

    list.update();
    assert_eq!(*log.lock(), vec!["a", "b", "c"]);
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|member| member.value() == Variant::Boolean(true)));
}

#[test]
fn one_list_serves_many_expressions() {
    let ticks = Arc::new(AtomicU32::new(0));
    let list = counter_list(&ticks);
    let registry = Registry::builtin();

    let expressions = ["tick", "tick * 10", "tick > 0"].map(|src| {
                                                          let mut builder = Expression::builder(src, &registry);
                                                          builder.attach(&list);
                                                          builder.build()
                                                      });

    assert_eq!(expressions[2].eval().unwrap(), Variant::Boolean(false));

    list.update();
    assert_eq!(ticks.load(Ordering::SeqCst), 1);

    assert_eq!(expressions[0].eval().unwrap(), Variant::Number(1.0));
    assert_eq!(expressions[1].eval().unwrap(), Variant::Number(10.0));
    assert_eq!(expressions[2].eval().unwrap(), Variant::Boolean(true));
    assert_eq!(ticks.load(Ordering::SeqCst), 1);
}

#[test]
fn values_are_stable_between_updates() {
    let ticks = Arc::new(AtomicU32::new(0));
    let list = counter_list(&ticks);

    let mut builder = Expression::builder("tick + 1", &Registry::builtin());
    list.attach(&mut builder);
    let expr = builder.build();

    list.update();
    assert_eq!(expr.eval().unwrap(), Variant::Number(2.0));
    assert_eq!(expr.eval().unwrap(), Variant::Number(2.0));

    list.update();
    assert_eq!(expr.eval().unwrap(), Variant::Number(3.0));
}

#[test]
fn attached_members_shadow_earlier_variables() {
    let ticks = Arc::new(AtomicU32::new(0));
    let list = counter_list(&ticks);

    let mut builder = Expression::builder("tick", &Registry::builtin());
    builder.add_variable("tick", 99);
    builder.attach(&list);

    assert_eq!(builder.build().eval().unwrap(), Variant::Number(0.0));
}

#[test]
fn registry_dynamics_reach_every_expression() {
    let weather = Arc::new(DynamicVariant::new("weather", "clear", || Variant::from("rain")));
    let mut registry = Registry::builtin();
    registry.register_dynamic(Arc::clone(&weather));

    let expr = Expression::new("weather = 'rain'", &registry);
    assert_eq!(expr.eval().unwrap(), Variant::Boolean(false));

    weather.update();
    assert_eq!(expr.eval().unwrap(), Variant::Boolean(true));
    assert_eq!(weather.name(), "weather");
}
