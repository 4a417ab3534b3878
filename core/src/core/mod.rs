pub mod action;
pub mod context;
pub mod direction;
pub mod outcome;
pub mod plan;
pub mod route;

// Re-export key types for easier access from other modules (and lib.rs)
pub use action::{action_fn, Action, ActionFuture, ActionId, ActionRef, FnAction};
pub use context::RunContext;
pub use direction::Direction;
pub use outcome::Outcome;
pub use plan::ActionPlan;
pub use route::Route;
