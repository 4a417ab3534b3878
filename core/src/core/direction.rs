// switchyard/src/core/direction.rs

//! Outcome labels an action signals after it runs.

use std::borrow::Cow;
use std::fmt;

/// The label an action reports after executing, used to pick the next action.
///
/// Three labels are reserved and implicitly declared by every action:
/// [`Direction::SUCCESS`], [`Direction::ERROR`] and [`Direction::ABORT`].
/// Anything else is a custom branch label such as `"retry"` or `"skip"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Direction(Cow<'static, str>);

impl Direction {
  pub const SUCCESS: Direction = Direction(Cow::Borrowed("Success"));
  pub const ERROR: Direction = Direction(Cow::Borrowed("Error"));
  pub const ABORT: Direction = Direction(Cow::Borrowed("Abort"));

  /// The reserved directions, in the order pipelines declare them.
  pub const RESERVED: [Direction; 3] = [Self::SUCCESS, Self::ERROR, Self::ABORT];

  /// Creates a custom branch label.
  pub fn custom(label: impl Into<Cow<'static, str>>) -> Self {
    Direction(label.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_reserved(&self) -> bool {
    Self::RESERVED.contains(self)
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&'static str> for Direction {
  fn from(label: &'static str) -> Self {
    Direction(Cow::Borrowed(label))
  }
}

impl From<String> for Direction {
  fn from(label: String) -> Self {
    Direction(Cow::Owned(label))
  }
}
