// switchyard/src/core/plan.rs

//! Defines `ActionPlan<T>`, the per-action routing table.

use crate::core::action::ActionRef;
use crate::core::direction::Direction;
use crate::core::route::Route;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Maps each direction an action may signal to the next route.
///
/// Plans handed to `Pipeline::set_run_plan` may be partial; any direction left
/// out is filled in as [`Route::Terminate`] before the plan is installed.
pub struct ActionPlan<T: Send + 'static> {
  routes: BTreeMap<Direction, Route<T>>,
}

impl<T: Send + 'static> ActionPlan<T> {
  pub fn new() -> Self {
    Self { routes: BTreeMap::new() }
  }

  /// Builder form of [`ActionPlan::insert`] routing `direction` to `next`.
  pub fn route(mut self, direction: impl Into<Direction>, next: &ActionRef<T>) -> Self {
    self.insert(direction, next);
    self
  }

  /// Builder form routing `direction` to [`Route::Terminate`].
  pub fn terminate(mut self, direction: impl Into<Direction>) -> Self {
    self.insert(direction, Route::Terminate);
    self
  }

  /// Sets the route for `direction`, returning the previous one.
  pub fn insert(&mut self, direction: impl Into<Direction>, next: impl Into<Route<T>>) -> Option<Route<T>> {
    self.routes.insert(direction.into(), next.into())
  }

  pub fn get(&self, direction: &Direction) -> Option<&Route<T>> {
    self.routes.get(direction)
  }

  pub fn contains(&self, direction: &Direction) -> bool {
    self.routes.contains_key(direction)
  }

  pub fn iter(&self) -> btree_map::Iter<'_, Direction, Route<T>> {
    self.routes.iter()
  }

  pub fn len(&self) -> usize {
    self.routes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }

  /// Routes every direction in `directions` that has no entry yet to terminate.
  pub(crate) fn fill_terminate(&mut self, directions: impl IntoIterator<Item = Direction>) {
    for direction in directions {
      self.routes.entry(direction).or_insert(Route::Terminate);
    }
  }
}

impl<T: Send + 'static> Default for ActionPlan<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Send + 'static> Clone for ActionPlan<T> {
  fn clone(&self) -> Self {
    Self {
      routes: self.routes.clone(),
    }
  }
}

impl<T: Send + 'static> PartialEq for ActionPlan<T> {
  fn eq(&self, other: &Self) -> bool {
    self.routes == other.routes
  }
}

impl<T: Send + 'static> Eq for ActionPlan<T> {}

impl<T: Send + 'static> fmt::Debug for ActionPlan<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map()
      .entries(self.routes.iter().map(|(direction, route)| (direction.as_str(), route.label())))
      .finish()
  }
}

impl<T: Send + 'static> FromIterator<(Direction, Route<T>)> for ActionPlan<T> {
  fn from_iter<I: IntoIterator<Item = (Direction, Route<T>)>>(iter: I) -> Self {
    Self {
      routes: iter.into_iter().collect(),
    }
  }
}

impl<'a, T: Send + 'static> IntoIterator for &'a ActionPlan<T> {
  type Item = (&'a Direction, &'a Route<T>);
  type IntoIter = btree_map::Iter<'a, Direction, Route<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
