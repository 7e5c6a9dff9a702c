//! HTTP DTOs for the writing desk endpoints

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// The task submission form
#[derive(Debug, Clone, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub task: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
}
