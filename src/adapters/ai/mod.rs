//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAICompatProvider` - Any OpenAI-compatible chat completions API
//!   (local Ollama by default)

mod mock_provider;
mod openai_compat;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_compat::{OpenAICompatConfig, OpenAICompatProvider};
