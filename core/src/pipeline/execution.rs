// switchyard/src/pipeline/execution.rs

//! Contains `Pipeline::run()` and `Pipeline::run_at()`, which walk the routing
//! graph one action at a time, and the `Action` impl that lets a pipeline be
//! a member of another pipeline.

use crate::core::action::{Action, ActionRef};
use crate::core::context::RunContext;
use crate::core::direction::Direction;
use crate::core::outcome::Outcome;
use crate::core::route::Route;
use crate::error::SwitchyardError;
use crate::pipeline::definition::Pipeline;
use async_trait::async_trait;
use tracing::{event, instrument, Level};

impl<T: Send + 'static> Pipeline<T> {
  /// Executes the pipeline from its entry action until a route leads to terminate.
  ///
  /// A single-member pipeline skips the start-of-run trace and membership
  /// lookup, but walks through the same routing and result composition as
  /// [`Pipeline::run_at`], so both entry points report identical outcomes.
  pub async fn run(&self, ctx: &RunContext, input: T) -> Outcome<T> {
    if self.members.len() == 1 {
      let ctx = ctx.enter(&self.name);
      return self.walk(&ctx, 0, input).await;
    }
    self.run_at(self.init_action(), ctx, input).await
  }

  /// Executes the pipeline starting from any member, e.g. to resume mid-graph.
  ///
  /// Returns the input untouched with direction `Error` and a
  /// [`SwitchyardError::NotMember`] failure, without executing anything, when
  /// `init_action` does not belong to this pipeline.
  ///
  /// The returned outcome is the one of the last action executed, except that:
  /// - a missing route for the signalled direction stops the run with `Abort`
  ///   and a [`SwitchyardError::NoRoute`] failure;
  /// - if any action reported a failure along the way, the last such failure
  ///   is returned and the direction becomes `Error` unless it was `Abort`.
  #[instrument(
    name = "Pipeline::run_at",
    skip_all,
    fields(pipeline = %self.name, members = self.members.len())
  )]
  pub async fn run_at(&self, init_action: &ActionRef<T>, ctx: &RunContext, input: T) -> Outcome<T> {
    let Some(start) = self.position(init_action) else {
      let err = SwitchyardError::NotMember {
        pipeline: self.name.clone(),
        action: init_action.name().to_string(),
      };
      event!(Level::ERROR, error = %err, "Refusing to start from a non-member action.");
      return Outcome::error(input, err);
    };

    let ctx = ctx.enter(&self.name);
    event!(
      Level::DEBUG,
      "{}: Start running with \"{}\"",
      run_path(&ctx, &self.name),
      init_action.name()
    );
    self.walk(&ctx, start, input).await
  }

  /// The engine loop. `ctx` already carries this pipeline's run path.
  async fn walk(&self, ctx: &RunContext, start: usize, input: T) -> Outcome<T> {
    let path = run_path(ctx, &self.name);
    let mut current = start;
    let mut input = input;
    let mut last_failure: Option<anyhow::Error> = None;

    loop {
      let action = &self.members[current];
      let Outcome {
        output,
        direction,
        failure,
      } = action.execute(ctx, input).await;

      let next = match self.select_next(current, &direction) {
        Ok(next) => next,
        Err(err) => {
          event!(Level::ERROR, error = %err, "{}: routing failed", path);
          return Outcome {
            output,
            direction: Direction::ABORT,
            failure: Some(err.into()),
          };
        }
      };
      event!(
        Level::DEBUG,
        "{}: \"{}\" directs \"{}\", selecting \"{}\"",
        path,
        action.name(),
        direction,
        next.map_or("termination", |idx| self.members[idx].name())
      );

      if failure.is_some() {
        last_failure = failure;
      }
      match next {
        Some(idx) => {
          current = idx;
          input = output;
        }
        None => return settle(output, direction, last_failure),
      }
    }
  }

  /// Resolves the route for `direction` to a member position, `None` meaning terminate.
  fn select_next(&self, current: usize, direction: &Direction) -> Result<Option<usize>, SwitchyardError> {
    let action = &self.members[current];
    match self.run_plans[current].get(direction) {
      None => Err(SwitchyardError::NoRoute {
        action: action.name().to_string(),
        direction: direction.to_string(),
      }),
      Some(Route::Terminate) => Ok(None),
      Some(Route::Action(next)) => self
        .position(next)
        .map(Some)
        .ok_or_else(|| SwitchyardError::NonMemberTarget {
          action: action.name().to_string(),
          direction: direction.to_string(),
          target: next.name().to_string(),
        }),
    }
  }
}

fn run_path<'a>(ctx: &'a RunContext, fallback: &'a str) -> &'a str {
  ctx.run_path().unwrap_or(fallback)
}

/// A run that carried a failure reports `Error`, unless it was aborted.
fn settle<T>(output: T, direction: Direction, failure: Option<anyhow::Error>) -> Outcome<T> {
  let direction = if failure.is_some() && direction != Direction::ABORT {
    Direction::ERROR
  } else {
    direction
  };
  Outcome {
    output,
    direction,
    failure,
  }
}

#[async_trait]
impl<T: Send + 'static> Action<T> for Pipeline<T> {
  fn name(&self) -> &str {
    Pipeline::name(self)
  }

  fn directions(&self) -> Vec<Direction> {
    Pipeline::directions(self)
  }

  async fn execute(&self, ctx: &RunContext, input: T) -> Outcome<T> {
    self.run(ctx, input).await
  }
}
