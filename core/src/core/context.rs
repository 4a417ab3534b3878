// switchyard/src/core/context.rs

//! Defines the `RunContext` threaded through every action execution.

use std::sync::Arc;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Context handed to each action while a pipeline runs.
///
/// It carries two things:
/// 1. A cancellation token. Cancellation is advisory: the engine never
///    interrupts a running action, so long-running actions should check
///    [`RunContext::is_cancelled`] or await [`RunContext::cancelled`].
/// 2. The run path, e.g. `checkout/payment`, naming the chain of pipelines
///    currently executing. It is only used for diagnostics.
#[derive(Debug, Clone)]
pub struct RunContext {
  cancel: CancellationToken,
  run_path: Option<Arc<str>>,
}

impl RunContext {
  pub fn new() -> Self {
    Self::with_cancellation(CancellationToken::new())
  }

  pub fn with_cancellation(cancel: CancellationToken) -> Self {
    Self { cancel, run_path: None }
  }

  pub fn cancellation_token(&self) -> &CancellationToken {
    &self.cancel
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancel.is_cancelled()
  }

  pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
    self.cancel.cancelled()
  }

  /// Path of the pipelines entered so far, outermost first. `None` outside any pipeline.
  pub fn run_path(&self) -> Option<&str> {
    self.run_path.as_deref()
  }

  /// Returns a child context for a pipeline named `name`, sharing the same token.
  pub fn enter(&self, name: &str) -> Self {
    let run_path = match &self.run_path {
      Some(parent) => format!("{parent}/{name}"),
      None => name.to_string(),
    };
    Self {
      cancel: self.cancel.clone(),
      run_path: Some(Arc::from(run_path)),
    }
  }
}

impl Default for RunContext {
  fn default() -> Self {
    Self::new()
  }
}
