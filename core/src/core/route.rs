// switchyard/src/core/route.rs

//! Routing targets: a member action or the terminate sink.

use crate::core::action::ActionRef;
use std::fmt;

/// Where a direction leads.
///
/// `Terminate` is the graph sink. It is never executed: a run stops as soon
/// as the next route is `Terminate`.
pub enum Route<T: Send + 'static> {
  Action(ActionRef<T>),
  Terminate,
}

impl<T: Send + 'static> Route<T> {
  pub fn is_terminate(&self) -> bool {
    matches!(self, Route::Terminate)
  }

  pub fn action(&self) -> Option<&ActionRef<T>> {
    match self {
      Route::Action(action) => Some(action),
      Route::Terminate => None,
    }
  }

  /// Name used in trace lines: the action's name, or `termination`.
  pub fn label(&self) -> &str {
    match self {
      Route::Action(action) => action.name(),
      Route::Terminate => "termination",
    }
  }
}

impl<T: Send + 'static> From<ActionRef<T>> for Route<T> {
  fn from(action: ActionRef<T>) -> Self {
    Route::Action(action)
  }
}

impl<T: Send + 'static> From<&ActionRef<T>> for Route<T> {
  fn from(action: &ActionRef<T>) -> Self {
    Route::Action(action.clone())
  }
}

impl<T: Send + 'static> Clone for Route<T> {
  fn clone(&self) -> Self {
    match self {
      Route::Action(action) => Route::Action(action.clone()),
      Route::Terminate => Route::Terminate,
    }
  }
}

impl<T: Send + 'static> PartialEq for Route<T> {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Route::Action(a), Route::Action(b)) => a == b,
      (Route::Terminate, Route::Terminate) => true,
      _ => false,
    }
  }
}

impl<T: Send + 'static> Eq for Route<T> {}

impl<T: Send + 'static> fmt::Debug for Route<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Route::Action(action) => f.debug_tuple("Action").field(action).finish(),
      Route::Terminate => f.write_str("Terminate"),
    }
  }
}
