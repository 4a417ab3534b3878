// switchyard/src/error.rs
use thiserror::Error;

/// Errors raised by pipeline construction, plan overrides and graph routing.
///
/// Construction and override variants describe wiring mistakes. The panicking
/// setup methods (`Pipeline::new`, `Pipeline::set_run_plan`) surface them as
/// panics, while their `try_` counterparts return them. `NoRoute` and
/// `NotMember` also appear at run time, boxed into the `failure` of an
/// [`Outcome`](crate::Outcome) as an `anyhow::Error` that can be downcast back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchyardError {
  #[error("pipeline must have a name")]
  EmptyName,

  #[error("no actions were described for creating pipeline '{pipeline}'")]
  NoMembers { pipeline: String },

  #[error("duplicate action '{action}' specified at member position {position}")]
  DuplicateMember { action: String, position: usize },

  #[error("terminate cannot be a member (member position {position})")]
  TerminateAsMember { position: usize },

  #[error("cannot set a run plan for terminate")]
  PlanForTerminate,

  #[error("'{action}' is not a member of pipeline '{pipeline}'")]
  NotMember { pipeline: String, action: String },

  #[error("'{action}' does not support direction '{direction}'")]
  UndeclaredDirection { action: String, direction: String },

  #[error("plan from '{action}' directing '{direction}' targets non-member '{target}'")]
  NonMemberTarget {
    action: String,
    direction: String,
    target: String,
  },

  #[error("plan from '{action}' directing '{direction}' loops back to itself")]
  SelfLoop { action: String, direction: String },

  #[error("no action plan from '{action}' directing '{direction}'")]
  NoRoute { action: String, direction: String },
}

pub type SwitchyardResult<T, E = SwitchyardError> = std::result::Result<T, E>;
