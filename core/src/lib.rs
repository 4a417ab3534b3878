// src/lib.rs

//! Switchyard: an ASYNC, direction-routed workflow engine for Rust.
//!
//! A pipeline is a graph of named actions. Every action returns an output, a
//! direction label and an optional failure; the pipeline uses the direction
//! to pick the next action, threading the output along as the next input:
//!  - Straight-line routing on `Success` out of the box, stop on everything else.
//!  - Per-action plan overrides for branching, recovery and bounded retry loops,
//!    validated eagerly (no self-loops, no foreign targets, no undeclared directions).
//!  - Starting a run at any member with `run_at`.
//!  - Nesting: a `Pipeline<T>` is itself an `Action<T>` and reports only
//!    `Success`, `Error` or `Abort` to its parent.
//!  - Advisory cancellation and a hierarchical run path through `RunContext`.

pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::action::{action_fn, Action, ActionFuture, ActionId, ActionRef, FnAction};
pub use crate::core::context::RunContext;
pub use crate::core::direction::Direction;
pub use crate::core::outcome::Outcome;
pub use crate::core::plan::ActionPlan;
pub use crate::core::route::Route;

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{SwitchyardError, SwitchyardResult};

/*
    Core Workflow:
    1. Pick the value type `T` threaded between actions.
    2. Build leaf actions, either by implementing `Action<T>` or with `action_fn(..)`,
       and keep their `ActionRef<T>` handles.
    3. Create a `Pipeline<T>` from the handles; the first one is the entry point.
    4. Rewire branches with `pipeline.set_run_plan(&action, Some(ActionPlan::new().route(..)))`.
    5. Call `pipeline.run(&RunContext::new(), input).await` and inspect the `Outcome`.
    6. To nest, wrap a finished pipeline with `ActionRef::new(pipeline)` and use it as a member.
*/
