//! Application layer - agents and workflow handlers.
//!
//! This layer orchestrates domain personas over the provider port. The
//! handlers are the only entry points the HTTP adapter calls.

pub mod agents;
pub mod handlers;

pub use agents::ChatAgent;
pub use handlers::{RunTaskCommand, RunTaskError, RunTaskHandler, RunTaskResult};
