//! Application handlers.
//!
//! Command handlers that orchestrate the agent workflow.

mod run_task;

pub use run_task::{RunTaskCommand, RunTaskError, RunTaskHandler, RunTaskResult};
