//! Host-side usage: configured gates, nested composites, threads, panics.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use gates::unary::BoxPredicate;
use gates::{BinaryGate, Gate, GateConfig, Predicates, ReferencePolicy, UnaryGate, binary, unary};

#[test]
fn configured_gate_from_toml() {
    gates::logging::try_init();

    let cfg = GateConfig::from_toml_str("reference = \"reevaluate\"\n").expect("config");
    let calls = AtomicUsize::new(0);
    let gate = UnaryGate::with_config(
        Gate::Xnor,
        Predicates::new(vec![
            Box::new(|x: &i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                *x > 0
            }) as BoxPredicate<'_, i32>,
            Box::new(|x: &i32| *x < 100),
        ])
        .expect("non-empty"),
        cfg,
    );

    assert!(gate.evaluate(&50));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(gate.config().reference, ReferencePolicy::Reevaluate);
    assert_eq!(gate.gate(), Gate::Xnor);
    assert_eq!(gate.predicates().len(), 2);
}

#[test]
fn empty_sequence_is_rejected_before_any_gate_exists() {
    let err = match Predicates::<BoxPredicate<'static, i32>>::new(Vec::new()) {
        Ok(_) => panic!("empty sequence accepted"),
        Err(err) => err,
    };
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn composites_nest() {
    let small_even = unary::and(
        Predicates::new(vec![
            Box::new(|x: &i32| *x < 10) as BoxPredicate<'static, i32>,
            Box::new(|x: &i32| x % 2 == 0),
        ])
        .expect("non-empty"),
    );
    let large = |x: &i32| *x > 1000;
    let accepted = unary::or(
        Predicates::new(vec![
            Box::new(small_even) as BoxPredicate<'static, i32>,
            Box::new(large),
        ])
        .expect("non-empty"),
    );

    assert!(accepted(&4));
    assert!(accepted(&2000));
    assert!(!accepted(&5));
    assert!(!accepted(&500));
}

#[test]
fn composite_is_shareable_across_threads() {
    let composite = unary::nor(
        Predicates::new(vec![
            Box::new(|x: &u64| *x == 0) as Box<dyn Fn(&u64) -> bool + Send + Sync>,
            Box::new(|x: &u64| *x > 1_000),
        ])
        .expect("non-empty"),
    );

    let accepted = AtomicUsize::new(0);
    thread::scope(|scope| {
        for worker in 0..4u64 {
            let composite = &composite;
            let accepted = &accepted;
            scope.spawn(move || {
                for x in (worker * 500)..((worker + 1) * 500) {
                    if composite(&x) {
                        accepted.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    // 1..=1000 pass; 0 and 1001..2000 do not.
    assert_eq!(accepted.load(Ordering::Relaxed), 1_000);
}

#[test]
fn predicate_panic_propagates_unchanged() {
    let composite = binary::or(
        Predicates::new(vec![
            Box::new(|_: &i32, _: &i32| false) as binary::BoxPredicate<'static, i32, i32>,
            Box::new(|x: &i32, y: &i32| -> bool { panic!("predicate failed on ({x}, {y})") }),
        ])
        .expect("non-empty"),
    );

    let payload = panic::catch_unwind(AssertUnwindSafe(|| composite(&1, &2)))
        .expect_err("predicate panic");
    let message = payload
        .downcast_ref::<String>()
        .expect("formatted panic message");
    assert_eq!(message, "predicate failed on (1, 2)");
}

#[test]
fn short_circuit_skips_panicking_tail() {
    let composite = binary::and(
        Predicates::new(vec![
            Box::new(|x: &i32, y: &i32| x == y) as binary::BoxPredicate<'static, i32, i32>,
            Box::new(|_: &i32, _: &i32| -> bool { panic!("must not run") }),
        ])
        .expect("non-empty"),
    );
    assert!(!composite(&1, &2));
}

#[test]
fn binary_gate_into_fn_keeps_semantics() {
    let gate = BinaryGate::new(
        Gate::Xor,
        Predicates::new(vec![
            Box::new(|a: &str, b: &str| a.len() == b.len())
                as binary::BoxPredicate<'static, str, str>,
            Box::new(|a: &str, b: &str| a == b),
        ])
        .expect("non-empty"),
    );
    assert_eq!(gate.gate(), Gate::Xor);
    let composite = gate.into_fn();
    assert!(composite("abc", "xyz"));
    assert!(!composite("abc", "abc"));
    assert!(!composite("abc", "ab"));
}
