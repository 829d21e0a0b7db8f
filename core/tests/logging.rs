#![cfg(feature = "tracing")]

use std::io;
use std::panic;
use std::sync::{Arc, Mutex};

use tagged_core::{Fault, Maybe, Outcome};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().map_err(|_| io::Error::new(io::ErrorKind::Other, "poisoned"))?.extend_from_slice(buf);
    Ok(buf.len())
  }
  fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl Captured {
  fn lines(&self) -> Vec<String> {
    let buffer = self.0.lock().unwrap();
    String::from_utf8_lossy(&buffer).lines().map(str::to_owned).collect()
  }
}

/// Runs `f` with a thread-local subscriber that writes plain-text events into the returned buffer.
fn capture(f: impl FnOnce()) -> Captured {
  let captured = Captured::default();
  let writer = captured.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .with_max_level(Level::TRACE)
    .finish();
  tracing::subscriber::with_default(subscriber, f);
  captured
}

fn find<'a>(lines: &'a [String], level: &str, operation: &str) -> Option<&'a String> {
  lines.iter().find(|line| line.contains(level) && line.contains(&format!("operation=\"{operation}\"")))
}

#[test]
fn fatal_violations_log_at_error() {
  let captured = capture(|| {
    let result = panic::catch_unwind(|| Maybe::<i32>::none().unwrap());
    assert!(result.is_err());
    let result = panic::catch_unwind(|| Outcome::<i32, Fault>::ok(1).unwrap_err());
    assert!(result.is_err());
  });
  let lines = captured.lines();

  let line = find(&lines, "ERROR", "Maybe::unwrap").expect("no ERROR event for Maybe::unwrap");
  assert!(line.contains("found=\"None\""), "{line}");
  assert!(line.contains("container unwrapped on the wrong variant"), "{line}");
  let line = find(&lines, "ERROR", "Outcome::unwrap_err").expect("no ERROR event for Outcome::unwrap_err");
  assert!(line.contains("found=\"Ok\""), "{line}");
}

#[test]
fn absent_construction_logs_reason() {
  let captured = capture(|| {
    let result = panic::catch_unwind(|| Maybe::some_checked(None::<i32>));
    assert!(result.is_err());
  });
  let lines = captured.lines();
  let line = find(&lines, "ERROR", "Maybe::some_checked").expect("no ERROR event for Maybe::some_checked");
  assert!(line.contains("reason=\"value is absent\""), "{line}");
}

#[test]
fn returned_violations_log_at_debug_only() {
  let captured = capture(|| {
    assert!(Maybe::<i32>::none().try_unwrap().unwrap_err().is_illegal_state());
    assert!(Outcome::<i32, Fault>::ok(1).try_unwrap_err().is_err());
    assert!(Maybe::<i32>::try_some(None).is_err());
  });
  let lines = captured.lines();

  assert!(lines.iter().all(|line| !line.contains("ERROR")), "{lines:#?}");
  let line = find(&lines, "DEBUG", "Maybe::try_unwrap").expect("no DEBUG event for Maybe::try_unwrap");
  assert!(line.contains("found=\"None\""), "{line}");
  assert!(find(&lines, "DEBUG", "Outcome::try_unwrap_err").is_some(), "{lines:#?}");
  assert!(find(&lines, "DEBUG", "Maybe::try_some").is_some(), "{lines:#?}");
}

#[test]
fn absent_lift_logs_at_trace() {
  let captured = capture(|| {
    assert!(Maybe::<i32>::from_nullable(None).is_none());
    assert!(Maybe::from_nullable(Some(1)).is_some());
  });
  let lines = captured.lines();
  let lifts: Vec<_> = lines.iter().filter(|line| line.contains("lifted an absent value into `Maybe::None`")).collect();
  assert_eq!(lifts.len(), 1, "{lines:#?}");
  assert!(lifts[0].contains("TRACE"), "{}", lifts[0]);
}
