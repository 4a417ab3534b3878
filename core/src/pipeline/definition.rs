// switchyard/src/pipeline/definition.rs

//! Contains the `Pipeline<T>` struct definition, its construction with default
//! straight-line plans, and validated plan overrides.

use crate::core::action::{ActionId, ActionRef};
use crate::core::direction::Direction;
use crate::core::plan::ActionPlan;
use crate::core::route::Route;
use crate::error::{SwitchyardError, SwitchyardResult};
use std::collections::HashMap;
use tracing::{event, Level};

/// A named graph of member actions routed by direction.
///
/// Members and the entry action are fixed at construction. The routing table
/// can only change through [`Pipeline::set_run_plan`], which needs `&mut self`,
/// so overrides can never race with a run. Running only needs `&self`, and a
/// shared pipeline can serve concurrent runs.
pub struct Pipeline<T: Send + 'static> {
  pub(crate) name: String,
  /// Members in declaration order; index 0 is the entry action.
  pub(crate) members: Vec<ActionRef<T>>,
  pub(crate) positions: HashMap<ActionId, usize>,
  /// Routing table, parallel to `members`.
  pub(crate) run_plans: Vec<ActionPlan<T>>,
}

impl<T: Send + 'static> Pipeline<T> {
  /// Creates a pipeline, panicking on an invalid definition.
  ///
  /// See [`Pipeline::try_new`] for the rules. A malformed pipeline is a wiring
  /// mistake, so this is the form most setup code wants.
  pub fn new<R>(name: impl Into<String>, members: impl IntoIterator<Item = R>) -> Self
  where
    R: Into<Route<T>>,
  {
    Self::try_new(name, members).unwrap_or_else(|err| panic!("switchyard setup error: {err}"))
  }

  /// Creates a pipeline whose members run one after another on `Success`.
  ///
  /// The first member becomes the entry action. Each member gets a default
  /// plan in which every declared direction, `Error` and `Abort` lead to
  /// terminate, and `Success` leads to the following member (terminate for
  /// the last one).
  ///
  /// Fails when the name is empty, no members are given, a member appears
  /// twice, or [`Route::Terminate`] is passed as a member.
  pub fn try_new<R>(name: impl Into<String>, members: impl IntoIterator<Item = R>) -> SwitchyardResult<Self>
  where
    R: Into<Route<T>>,
  {
    let name = name.into();
    if name.is_empty() {
      return Err(SwitchyardError::EmptyName);
    }

    let mut actions: Vec<ActionRef<T>> = Vec::new();
    let mut positions = HashMap::new();
    for (idx, member) in members.into_iter().enumerate() {
      let action = match member.into() {
        Route::Action(action) => action,
        Route::Terminate => return Err(SwitchyardError::TerminateAsMember { position: idx + 1 }),
      };
      if positions.insert(action.id(), idx).is_some() {
        return Err(SwitchyardError::DuplicateMember {
          action: action.name().to_string(),
          position: idx + 1,
        });
      }
      actions.push(action);
    }
    if actions.is_empty() {
      return Err(SwitchyardError::NoMembers { pipeline: name });
    }

    let run_plans = actions
      .iter()
      .enumerate()
      .map(|(idx, action)| {
        let mut plan = ActionPlan::new();
        plan.fill_terminate(action.directions().into_iter().chain([Direction::ERROR, Direction::ABORT]));
        let next = actions.get(idx + 1).map_or(Route::Terminate, Route::from);
        plan.insert(Direction::SUCCESS, next);
        plan
      })
      .collect();

    event!(Level::DEBUG, pipeline = %name, members = actions.len(), "Pipeline constructed.");
    Ok(Self {
      name,
      members: actions,
      positions,
      run_plans,
    })
  }

  /// Replaces the plan of `action`, panicking on an invalid plan.
  ///
  /// See [`Pipeline::try_set_run_plan`] for the rules.
  pub fn set_run_plan(&mut self, action: impl Into<Route<T>>, plan: Option<ActionPlan<T>>) {
    if let Err(err) = self.try_set_run_plan(action, plan) {
      panic!("switchyard setup error: {err}");
    }
  }

  /// Replaces the plan of a member action.
  ///
  /// Directions missing from `plan` (or every direction, when `plan` is
  /// `None`) route to terminate. Every explicit route must use a direction the
  /// action declares and lead to another member of this pipeline. The previous
  /// plan is discarded, not merged. When validation fails the routing table is
  /// left as it was.
  pub fn try_set_run_plan(&mut self, action: impl Into<Route<T>>, plan: Option<ActionPlan<T>>) -> SwitchyardResult<()> {
    let action = match action.into() {
      Route::Action(action) => action,
      Route::Terminate => return Err(SwitchyardError::PlanForTerminate),
    };
    let position = self.position(&action).ok_or_else(|| SwitchyardError::NotMember {
      pipeline: self.name.clone(),
      action: action.name().to_string(),
    })?;

    let declared = action.declared_directions();
    let mut plan = plan.unwrap_or_default();
    plan.fill_terminate(declared.iter().cloned());

    for (direction, route) in &plan {
      let Route::Action(next) = route else {
        continue;
      };
      if !declared.contains(direction) {
        return Err(SwitchyardError::UndeclaredDirection {
          action: action.name().to_string(),
          direction: direction.to_string(),
        });
      }
      if !self.contains(next) {
        return Err(SwitchyardError::NonMemberTarget {
          action: action.name().to_string(),
          direction: direction.to_string(),
          target: next.name().to_string(),
        });
      }
      if *next == action {
        return Err(SwitchyardError::SelfLoop {
          action: action.name().to_string(),
          direction: direction.to_string(),
        });
      }
    }

    event!(Level::DEBUG, pipeline = %self.name, action = %action.name(), plan = ?plan, "Run plan replaced.");
    self.run_plans[position] = plan;
    Ok(())
  }

  // --- Introspection ---

  pub fn name(&self) -> &str {
    &self.name
  }

  /// A pipeline is a non-branching action to its parent: it only ever reports
  /// `Success`, `Error` or `Abort`.
  pub fn directions(&self) -> Vec<Direction> {
    Direction::RESERVED.to_vec()
  }

  /// The member `run` starts from.
  pub fn init_action(&self) -> &ActionRef<T> {
    &self.members[0]
  }

  pub fn members(&self) -> &[ActionRef<T>] {
    &self.members
  }

  pub fn member_count(&self) -> usize {
    self.members.len()
  }

  pub fn contains(&self, action: &ActionRef<T>) -> bool {
    self.positions.contains_key(&action.id())
  }

  /// The installed plan for `action`, or `None` if it is not a member.
  pub fn plan_for(&self, action: &ActionRef<T>) -> Option<&ActionPlan<T>> {
    self.position(action).map(|idx| &self.run_plans[idx])
  }

  pub(crate) fn position(&self, action: &ActionRef<T>) -> Option<usize> {
    self.positions.get(&action.id()).copied()
  }
}

impl<T: Send + 'static> std::fmt::Debug for Pipeline<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let plans: Vec<(&str, &ActionPlan<T>)> = self
      .members
      .iter()
      .map(|action| action.name())
      .zip(self.run_plans.iter())
      .collect();
    f.debug_struct("Pipeline")
      .field("name", &self.name)
      .field("run_plans", &plans)
      .finish()
  }
}
