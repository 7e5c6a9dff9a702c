//! HTTP adapters - browser-facing endpoint implementations.

pub mod desk;

// Re-export key types for convenience
pub use desk::DeskAppState;
