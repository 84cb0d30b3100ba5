use crate::Deferred;
use crate::tests::test_utils;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

type TestDeferred = Deferred<i32, String>;

#[test]
fn new_deferred_is_pending() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();

    assert!(!deferred.is_settled());
    assert_eq!(deferred.result(), None);
}

#[test]
fn callback_settles_with_success() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    deferred.callback(42);

    assert!(deferred.is_settled());
    assert_eq!(deferred.result(), Some(Ok(42)));
}

#[test]
fn errback_settles_with_failure() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    deferred.errback("boom".to_string());

    assert_eq!(deferred.result(), Some(Err("boom".to_string())));
}

#[test]
fn queued_continuations_fire_in_registration_order() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    let fired = Arc::new(Mutex::new(vec![]));

    for idx in 0..3 {
        let fired = Arc::clone(&fired);
        deferred.add_callbacks(
            move |value| -> Result<(), String> {
                fired.lock().unwrap().push((idx, value));
                Ok(())
            },
            |err| Err(err),
        );
    }
    assert!(fired.lock().unwrap().is_empty());

    deferred.callback(7);

    assert_eq!(*fired.lock().unwrap(), vec![(0, 7), (1, 7), (2, 7)]);
}

#[test]
fn continuation_added_after_settlement_fires_immediately() {
    test_utils::setup_logger();
    let deferred = TestDeferred::succeed(5);
    let seen = Arc::new(Mutex::new(None));
    let seen_in_callback = Arc::clone(&seen);

    deferred.add_callbacks(
        move |value| -> Result<(), String> {
            *seen_in_callback.lock().unwrap() = Some(value);
            Ok(())
        },
        |err| Err(err),
    );

    assert_eq!(*seen.lock().unwrap(), Some(5));
}

#[test]
fn each_continuation_fires_exactly_once() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    let success_calls = Arc::new(AtomicUsize::new(0));
    let failure_calls = Arc::new(AtomicUsize::new(0));

    let success_counter = Arc::clone(&success_calls);
    let failure_counter = Arc::clone(&failure_calls);
    deferred.add_callbacks(
        move |_| -> Result<(), String> {
            success_counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
        move |_| {
            failure_counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        },
    );

    deferred.errback("nope".to_string());
    deferred.add_callback(|_| Ok(()));

    assert_eq!(success_calls.load(Ordering::SeqCst), 0);
    assert_eq!(failure_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn add_callbacks_chains_continuation_outcome() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    let doubled = deferred.add_callbacks(
        |value| Ok::<_, String>(value * 2),
        Err,
    );
    let described = doubled.add_callback(|value| Ok(format!("value={value}")));

    assert!(!described.is_settled());
    deferred.callback(21);

    assert_eq!(doubled.result(), Some(Ok(42)));
    assert_eq!(described.result(), Some(Ok("value=42".to_string())));
}

#[test]
fn failure_continuation_can_recover() {
    test_utils::setup_logger();
    let deferred = TestDeferred::fail("missing".to_string());
    let recovered = deferred.add_errback(|err| Ok::<_, ()>(err.len() as i32));

    assert_eq!(recovered.result(), Some(Ok(7)));
}

#[test]
fn success_continuation_can_fail() {
    test_utils::setup_logger();
    let deferred = TestDeferred::succeed(-1);
    let checked = deferred.add_callback(|value| {
        if value < 0 {
            Err(format!("negative: {value}"))
        } else {
            Ok(value)
        }
    });

    assert_eq!(checked.result(), Some(Err("negative: -1".to_string())));
}

#[test]
fn errors_pass_through_add_callback() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    let mapped = deferred.add_callback(|value| Ok(value + 1));
    deferred.errback("upstream".to_string());

    assert_eq!(mapped.result(), Some(Err("upstream".to_string())));
}

#[test]
fn cloned_handles_share_state() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    let handle = deferred.clone();
    handle.callback(3);

    assert_eq!(deferred.result(), Some(Ok(3)));
}

#[test]
#[should_panic(expected = "Deferred was settled more than once.")]
fn double_settlement_panics() {
    let deferred = TestDeferred::new();
    deferred.callback(1);
    deferred.errback("again".to_string());
}

#[test]
#[should_panic(expected = "Deferred was settled more than once.")]
fn settling_a_presettled_deferred_panics() {
    let deferred = TestDeferred::succeed(1);
    deferred.callback(2);
}

#[tokio::test]
async fn into_future_resolves_once_settled() {
    test_utils::setup_logger();
    let deferred = TestDeferred::new();
    let future = deferred.clone().into_future();

    let settler = deferred.clone();
    tokio::spawn(async move {
        tokio::task::yield_now().await;
        settler.callback(99);
    });

    assert_eq!(future.await, Ok(99));
}

#[tokio::test]
async fn into_future_of_failed_deferred_yields_error() {
    test_utils::setup_logger();
    let future = TestDeferred::fail("bad".to_string()).into_future();

    assert_eq!(future.await, Err("bad".to_string()));
}
