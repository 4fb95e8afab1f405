use op_rail::{CaptureMode, ContractError, OpFailed, Outcome, Violation};
use std::io;


fn failed<T>(reason: &'static str) -> Outcome<T> {
    Outcome::fail_reason(reason).unwrap()
}

#[test]
fn ok_reports_success_only() {
    let v = Outcome::ok(5);
    assert!(v.is_success());
    assert!(!v.is_failure());
}

#[test]
fn failure_reports_failure_only() {
    let v: Outcome<i32> = failed("e");
    assert!(v.is_failure());
    assert!(!v.is_success());
}

#[test]
fn from_nullable_rejects_absent_value() {
    let err = Outcome::<String>::from_nullable(None).unwrap_err();
    assert_eq!(
        err,
        ContractError::InvalidArgument { argument: "value", violation: Violation::Absent }
    );

    let v = Outcome::from_nullable(Some("present")).unwrap();
    assert_eq!(v.unwrap(), "present");
}

#[test]
fn fail_reason_rejects_blank_text() {
    for reason in ["", " ", "\t\n"] {
        let err = Outcome::<()>::fail_reason(reason).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidArgument { argument: "reason", violation: Violation::Blank }
        );
    }
}

#[test]
fn failures_are_stored_deferred() {
    let by_reason: Outcome<()> = failed("quota");
    assert_eq!(by_reason.failure().unwrap().mode(), CaptureMode::Deferred);

    let by_cause = Outcome::<()>::fail(io::Error::new(io::ErrorKind::Other, "disk"));
    let failure = by_cause.failure().unwrap();
    assert_eq!(failure.mode(), CaptureMode::Deferred);
    assert!(failure.backtrace().is_none());
    assert_eq!(failure.message(), "disk");
    assert_eq!(failure.cause().unwrap().to_string(), "disk");
}

#[test]
fn from_failure_keeps_capture_mode() {
    let captured = OpFailed::new("kept").unwrap();
    let v = Outcome::<()>::from_failure(captured);
    assert!(v.failure().unwrap().is_captured());
}

#[test]
fn map_applies_transform_on_success() {
    let v = Outcome::ok("a".to_string()).map(|s| s + "b");
    assert_eq!(v.unwrap(), "ab");
}

#[test]
fn map_skips_transform_on_failure() {
    let original: Outcome<String> = failed("boom");
    let signal = original.failure().unwrap().clone();

    let mut called = false;
    let mapped = original.map(|s| {
        called = true;
        s.len()
    });

    assert!(!called, "map must not call its transform on a failure");
    assert_eq!(mapped.failure().unwrap(), &signal);
}

#[test]
fn map_failure_skips_transform_on_success() {
    let mut called = false;
    let v = Outcome::ok(1).map_failure(|e| {
        called = true;
        e
    });

    assert!(!called);
    assert_eq!(v, Outcome::ok(1));
}

#[test]
fn map_failure_wraps_new_signal() {
    let v: Outcome<i32> = failed("timeout");
    let mapped = v.map_failure(|e| OpFailed::new(format!("fetch: {}", e)).unwrap());

    let failure = mapped.failure().unwrap();
    assert_eq!(failure.message(), "fetch: timeout");
    assert_eq!(failure.mode(), CaptureMode::Deferred);
    assert!(failure.backtrace().is_none());
}

#[test]
fn map_failure_with_identity_is_structurally_equal() {
    let cause = io::Error::new(io::ErrorKind::TimedOut, "slow");
    let v = Outcome::<u8>::fail(cause);
    let copy = v.clone();

    assert_eq!(v.map_failure(|e| e), copy);
}

#[test]
fn and_then_short_circuits_on_failure() {
    let mut called = false;
    let v = failed::<i32>("first").and_then(|x| {
        called = true;
        Outcome::ok(x + 1)
    });

    assert!(!called);
    assert_eq!(v.failure().unwrap().message(), "first");
}

#[test]
fn recover_and_or_else_only_touch_failures() {
    assert_eq!(Outcome::ok(3).recover(|_| 0).unwrap(), 3);
    assert_eq!(failed::<usize>("four").recover(|e| e.message().len()).unwrap(), 4);

    let replaced = failed::<i32>("first").or_else(|_| failed("second"));
    assert_eq!(replaced.failure().unwrap().message(), "second");
    assert_eq!(Outcome::ok(1).or_else(|_| failed("unused")).unwrap(), 1);
}

#[test]
fn inspect_hooks_observe_matching_state() {
    let mut seen_value = None;
    let mut seen_failure = None;

    let _ = Outcome::ok(9)
        .inspect(|v| seen_value = Some(*v))
        .inspect_failure(|e| seen_failure = Some(e.message().to_string()));
    assert_eq!(seen_value, Some(9));
    assert_eq!(seen_failure, None);

    let _ = failed::<i32>("seen")
        .inspect(|v| seen_value = Some(*v + 1))
        .inspect_failure(|e| seen_failure = Some(e.message().to_string()));
    assert_eq!(seen_value, Some(9));
    assert_eq!(seen_failure.as_deref(), Some("seen"));
}

#[test]
fn unwrap_or_returns_value_or_fallback() {
    assert_eq!(Outcome::ok(1).unwrap_or(2), 1);
    assert_eq!(failed::<i32>("e").unwrap_or(2), 2);
    assert_eq!(failed::<Option<i32>>("e").unwrap_or(None), None);
}

#[test]
fn unwrap_or_else_calls_factory_only_on_failure() {
    let mut calls = 0;
    assert_eq!(
        Outcome::ok(1).unwrap_or_else(|| {
            calls += 1;
            99
        }),
        1
    );
    assert_eq!(calls, 0);

    assert_eq!(failed::<i32>("e").unwrap_or_else(|| 99), 99);
}

#[test]
fn failure_on_success_is_not_found() {
    let v = Outcome::ok(());
    assert_eq!(v.failure().unwrap_err(), ContractError::NotFound);
    assert_eq!(v.clone().into_failure().unwrap_err(), ContractError::NotFound);

    let mut called = false;
    let remapped = v.failure_with(|_| called = true);
    assert_eq!(remapped.unwrap_err(), ContractError::NotFound);
    assert!(!called);
}

#[test]
fn failure_with_remaps_signal() {
    let v: Outcome<()> = failed("x");
    let wrapped = v
        .failure_with(|e| io::Error::new(io::ErrorKind::Other, e.clone()))
        .unwrap();
    assert_eq!(wrapped.to_string(), "x");
    assert_eq!(v.into_failure().unwrap().message(), "x");
}

#[test]
fn into_result_materializes_failure() {
    let err = failed::<i32>("late").into_result().unwrap_err();
    assert_eq!(err.mode(), CaptureMode::Capturing);
    assert!(err.backtrace().is_some());
    assert_eq!(err.message(), "late");

    assert_eq!(Outcome::ok(4).into_result().unwrap(), 4);
}

#[test]
fn into_result_with_passes_materialized_signal() {
    let err = failed::<i32>("late")
        .into_result_with(|e| (e.is_captured(), e.message().to_string()))
        .unwrap_err();
    assert_eq!(err, (true, "late".to_string()));
}

#[test]
fn check_leaves_receiver_deferred() {
    let v: Outcome<()> = failed("e");
    let err = v.check().unwrap_err();
    assert!(err.is_captured());
    assert_eq!(v.failure().unwrap().mode(), CaptureMode::Deferred);

    assert!(Outcome::ok(()).check().is_ok());
}

#[test]
fn option_conversions_discard_failure() {
    assert_eq!(Outcome::ok(3).as_option(), Some(&3));
    assert_eq!(Outcome::ok(3).into_option(), Some(3));
    assert_eq!(failed::<i32>("e").into_option(), None);

    let opt: Option<i32> = failed::<i32>("e").into();
    assert!(opt.is_none());
}

#[test]
fn as_ref_borrows_value_and_shares_failure() {
    let name = Outcome::ok(String::from("ferris"));
    assert_eq!(name.as_ref().map(|s| s.len()).unwrap(), 6);
    assert_eq!(name.unwrap(), "ferris");

    let v: Outcome<String> = failed("gone");
    let borrowed = v.as_ref();
    assert_eq!(borrowed.failure().unwrap(), v.failure().unwrap());
}

#[test]
fn equality_is_structural() {
    assert_eq!(Outcome::ok(vec![1, 2]), Outcome::ok(vec![1, 2]));
    assert_ne!(Outcome::ok(1), Outcome::ok(2));
    assert_eq!(failed::<i32>("same"), failed::<i32>("same"));
    assert_ne!(failed::<i32>("one"), failed::<i32>("two"));
    assert_ne!(Outcome::ok(1), failed::<i32>("1"));
}

#[test]
fn equal_outcomes_hash_alike() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(failed::<i32>("dup"));
    set.insert(failed::<i32>("dup"));
    set.insert(Outcome::ok(1));
    assert_eq!(set.len(), 2);
}

#[test]
fn display_and_debug_render_state() {
    assert_eq!(Outcome::ok(5).to_string(), "Outcome[ok=5]");
    assert_eq!(failed::<i32>("bad input").to_string(), "Outcome[fail=bad input]");
    assert!(format!("{:?}", Outcome::ok(5)).starts_with("Success(5"));
    assert!(format!("{:?}", failed::<i32>("x")).starts_with("Failure("));
}

#[test]
fn collect_stops_at_first_failure() {
    let mut pulled = 0;
    let items = vec![Outcome::ok(1), failed("second"), Outcome::ok(3)];
    let collected: Outcome<Vec<i32>> = items
        .into_iter()
        .inspect(|_| pulled += 1)
        .collect();

    assert_eq!(collected.failure().unwrap().message(), "second");
    assert_eq!(pulled, 2);

    let all: Outcome<Vec<i32>> = (1..=3).map(Outcome::ok).collect();
    assert_eq!(all.unwrap(), vec![1, 2, 3]);
}

#[test]
fn outcome_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome<String>>();
    assert_send_sync::<OpFailed>();
}

#[test]
fn ok_stores_option_payload_as_given() {
    let v = Outcome::ok(None::<u8>);
    assert!(v.is_success());
    assert_eq!(v.unwrap(), None);

    assert!(Outcome::<u8>::from_nullable(None).unwrap_err().is_invalid_argument());
}
