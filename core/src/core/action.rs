// switchyard/src/core/action.rs

//! Defines the `Action<T>` trait, the `ActionRef<T>` identity handle and
//! closure-backed leaf actions.

use crate::core::context::RunContext;
use crate::core::direction::Direction;
use crate::core::outcome::Outcome;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::pin::Pin;
use std::sync::Arc;

/// A unit of work inside a pipeline.
///
/// `T` is the value threaded from one action to the next: each action consumes
/// the previous output as its input.
#[async_trait]
pub trait Action<T>: Send + Sync
where
  T: Send + 'static,
{
  /// Label used in diagnostics and error messages. Not an identity.
  fn name(&self) -> &str;

  /// Every direction this action may signal.
  ///
  /// `Success`, `Error` and `Abort` are treated as declared whether or not
  /// they are listed here.
  fn directions(&self) -> Vec<Direction> {
    Direction::RESERVED.to_vec()
  }

  async fn execute(&self, ctx: &RunContext, input: T) -> Outcome<T>;
}

/// Opaque identity of an action, stable while any [`ActionRef`] to it is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(usize);

/// Shared handle to an action.
///
/// Equality and hashing use the identity of the underlying allocation, so two
/// actions with the same name are still distinct routing targets, while clones
/// of one handle all refer to the same member.
pub struct ActionRef<T: Send + 'static>(Arc<dyn Action<T>>);

impl<T: Send + 'static> ActionRef<T> {
  pub fn new<A>(action: A) -> Self
  where
    A: Action<T> + 'static,
  {
    Self(Arc::new(action))
  }

  pub fn from_arc(action: Arc<dyn Action<T>>) -> Self {
    Self(action)
  }

  pub fn id(&self) -> ActionId {
    ActionId(Arc::as_ptr(&self.0) as *const () as usize)
  }

  /// Declared directions plus the reserved ones, deduplicated and ordered.
  pub fn declared_directions(&self) -> BTreeSet<Direction> {
    let mut declared: BTreeSet<Direction> = self.0.directions().into_iter().collect();
    declared.extend(Direction::RESERVED);
    declared
  }
}

impl<T: Send + 'static> Deref for ActionRef<T> {
  type Target = dyn Action<T>;

  fn deref(&self) -> &Self::Target {
    self.0.as_ref()
  }
}

impl<T: Send + 'static> Clone for ActionRef<T> {
  fn clone(&self) -> Self {
    Self(Arc::clone(&self.0))
  }
}

impl<T: Send + 'static> PartialEq for ActionRef<T> {
  fn eq(&self, other: &Self) -> bool {
    self.id() == other.id()
  }
}

impl<T: Send + 'static> Eq for ActionRef<T> {}

impl<T: Send + 'static> Hash for ActionRef<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id().hash(state);
  }
}

impl<T: Send + 'static> fmt::Debug for ActionRef<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActionRef")
      .field("name", &self.0.name())
      .field("id", &self.id())
      .finish()
  }
}

/// Boxed future returned by the body of a [`FnAction`].
pub type ActionFuture<T> = Pin<Box<dyn Future<Output = Outcome<T>> + Send>>;

type ActionBody<T> = Box<dyn Fn(RunContext, T) -> ActionFuture<T> + Send + Sync>;

/// A leaf action backed by an async closure.
///
/// The closure receives an owned clone of the [`RunContext`] so the returned
/// future can be `'static`.
pub struct FnAction<T: Send + 'static> {
  name: String,
  directions: Vec<Direction>,
  body: ActionBody<T>,
}

impl<T: Send + 'static> FnAction<T> {
  pub fn new<F, Fut>(name: impl Into<String>, custom_directions: impl IntoIterator<Item = Direction>, body: F) -> Self
  where
    F: Fn(RunContext, T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<T>> + Send + 'static,
  {
    let mut directions = Direction::RESERVED.to_vec();
    for direction in custom_directions {
      if !directions.contains(&direction) {
        directions.push(direction);
      }
    }
    Self {
      name: name.into(),
      directions,
      body: Box::new(move |ctx, input| Box::pin(body(ctx, input))),
    }
  }
}

#[async_trait]
impl<T: Send + 'static> Action<T> for FnAction<T> {
  fn name(&self) -> &str {
    &self.name
  }

  fn directions(&self) -> Vec<Direction> {
    self.directions.clone()
  }

  async fn execute(&self, ctx: &RunContext, input: T) -> Outcome<T> {
    (self.body)(ctx.clone(), input).await
  }
}

impl<T: Send + 'static> fmt::Debug for FnAction<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnAction")
      .field("name", &self.name)
      .field("directions", &self.directions)
      .finish()
  }
}

/// Shorthand for `ActionRef::new(FnAction::new(..))`.
pub fn action_fn<T, F, Fut>(
  name: impl Into<String>,
  custom_directions: impl IntoIterator<Item = Direction>,
  body: F,
) -> ActionRef<T>
where
  T: Send + 'static,
  F: Fn(RunContext, T) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Outcome<T>> + Send + 'static,
{
  ActionRef::new(FnAction::new(name, custom_directions, body))
}
