// switchyard/src/pipeline/mod.rs

//! Defines the `Pipeline<T>` struct, its construction, plan overrides and execution logic.

pub mod definition;
pub mod execution;

// Re-export the main Pipeline struct
pub use definition::Pipeline;
