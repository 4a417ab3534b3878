// switchyard/src/core/outcome.rs

//! The `(output, direction, failure)` triple every action returns.

use crate::core::direction::Direction;

/// Result of executing an action or a whole pipeline.
///
/// `failure` is `Some` exactly when the action could not complete normally.
/// A failure does not stop a pipeline by itself; the direction decides where
/// the graph goes next.
#[derive(Debug)]
pub struct Outcome<T> {
  pub output: T,
  pub direction: Direction,
  pub failure: Option<anyhow::Error>,
}

impl<T> Outcome<T> {
  pub fn new(output: T, direction: Direction) -> Self {
    Self {
      output,
      direction,
      failure: None,
    }
  }

  pub fn success(output: T) -> Self {
    Self::new(output, Direction::SUCCESS)
  }

  pub fn abort(output: T) -> Self {
    Self::new(output, Direction::ABORT)
  }

  /// Signals `Error` together with the failure that caused it.
  pub fn error(output: T, failure: impl Into<anyhow::Error>) -> Self {
    Self::new(output, Direction::ERROR).with_failure(failure)
  }

  pub fn with_failure(mut self, failure: impl Into<anyhow::Error>) -> Self {
    self.failure = Some(failure.into());
    self
  }

  pub fn is_success(&self) -> bool {
    self.direction == Direction::SUCCESS && self.failure.is_none()
  }

  pub fn into_parts(self) -> (T, Direction, Option<anyhow::Error>) {
    (self.output, self.direction, self.failure)
  }
}
