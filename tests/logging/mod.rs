//! Structured events emitted with the `tracing` feature.

use op_rail::{OpFailed, Outcome};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

type Fields = Vec<(String, String)>;

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Fields>>>,
}

impl Recorder {
    fn events(&self) -> Vec<Fields> {
        self.events.lock().unwrap().clone()
    }
}

struct FieldVisitor(Fields);

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{:?}", value)));
    }
}

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(visitor.0);
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn record<R>(f: impl FnOnce() -> R) -> Vec<Fields> {
    let recorder = Recorder::default();
    tracing::subscriber::with_default(recorder.clone(), f);
    recorder.events()
}

fn field<'a>(fields: &'a Fields, name: &str) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .collect()
}

#[test]
fn materialize_logs_failure_under_its_own_field() {
    let events = record(|| OpFailed::lightweight("disk full").unwrap().materialize());

    assert_eq!(events.len(), 1);
    assert_eq!(field(&events[0], "failure"), ["disk full"]);
    assert_eq!(field(&events[0], "message"), ["capturing backtrace for deferred failure"]);
}

#[test]
fn materialize_on_captured_signal_is_silent() {
    let signal = OpFailed::new("already there").unwrap();
    let events = record(|| signal.materialize());
    assert!(events.is_empty());
}

#[test]
fn unwrap_logs_materialize_then_raise() {
    let v = Outcome::<u8>::fail_reason("boom").unwrap();
    let events = record(|| catch_unwind(AssertUnwindSafe(|| v.unwrap())).is_err());

    assert_eq!(events.len(), 2);
    assert_eq!(field(&events[0], "failure"), ["boom"]);
    assert_eq!(field(&events[1], "failure"), ["boom"]);
    assert_eq!(field(&events[1], "message"), ["raising failed outcome"]);
}

#[test]
fn unwrap_with_logs_remapped_payload() {
    let v = Outcome::<u8>::fail_reason("db").unwrap();
    let events = record(|| {
        catch_unwind(AssertUnwindSafe(|| v.unwrap_with(|e| format!("service down: {}", e))))
    });

    let raised = events.last().unwrap();
    assert_eq!(field(raised, "failure"), ["service down: db"]);
    assert_eq!(field(raised, "message"), ["raising failed outcome"]);
}

#[test]
fn handled_failures_emit_nothing() {
    let events = record(|| {
        Outcome::<u8>::fail_reason("quiet")
            .unwrap()
            .map(|x| x + 1)
            .unwrap_or(0)
    });
    assert!(events.is_empty());
}
