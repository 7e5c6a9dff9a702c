//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - AI provider implementations (OpenAI-compatible, mock)
//! - `http` - Browser-facing HTTP endpoints

pub mod ai;
pub mod http;

pub use ai::{MockAIProvider, OpenAICompatConfig, OpenAICompatProvider};
pub use http::DeskAppState;
