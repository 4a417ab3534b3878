// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use switchyard::{action_fn, ActionRef, Direction, Outcome};
use tracing::Level;

// --- Shared visit log ---
/// Records the names of executed actions, in order.
#[derive(Clone, Default)]
pub struct VisitLog(Arc<Mutex<Vec<String>>>);

impl VisitLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&self, name: &str) {
    self.0.lock().push(name.to_string());
  }

  pub fn visits(&self) -> Vec<String> {
    self.0.lock().clone()
  }
}

// --- Common Action Creators ---
/// Appends `suffix` to the input and signals `Success`.
pub fn append_step(name: &'static str, suffix: &'static str, log: &VisitLog) -> ActionRef<String> {
  let log = log.clone();
  action_fn(name, [], move |_ctx, input: String| {
    let log = log.clone();
    async move {
      log.push(name);
      tracing::debug!(target: "test_actions", step = name, "appending '{}'", suffix);
      Outcome::success(format!("{input}{suffix}"))
    }
  })
}

/// Passes the input through and signals `direction` unconditionally.
pub fn signal_step(name: &'static str, declared: Vec<Direction>, direction: Direction, log: &VisitLog) -> ActionRef<String> {
  let log = log.clone();
  action_fn(name, declared, move |_ctx, input: String| {
    let log = log.clone();
    let direction = direction.clone();
    async move {
      log.push(name);
      Outcome::new(input, direction)
    }
  })
}

/// Passes the input through, signals `Error` and reports `message` as the failure.
pub fn failing_step(name: &'static str, message: &'static str, log: &VisitLog) -> ActionRef<String> {
  let log = log.clone();
  action_fn(name, [], move |_ctx, input: String| {
    let log = log.clone();
    async move {
      log.push(name);
      tracing::warn!(target: "test_actions", step = name, "failing with: '{}'", message);
      Outcome::error(input, anyhow::anyhow!(message))
    }
  })
}

/// Signals `retry` until it has run `failures` times, then `Success`.
pub fn flaky_step(name: &'static str, failures: usize, attempts: Arc<AtomicUsize>, log: &VisitLog) -> ActionRef<String> {
  let log = log.clone();
  action_fn(name, [retry()], move |_ctx, input: String| {
    let log = log.clone();
    let attempts = attempts.clone();
    async move {
      log.push(name);
      let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
      if attempt <= failures {
        Outcome::new(format!("{input}!"), retry())
      } else {
        Outcome::success(format!("{input}{name}"))
      }
    }
  })
}

pub fn retry() -> Direction {
  Direction::custom("retry")
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
