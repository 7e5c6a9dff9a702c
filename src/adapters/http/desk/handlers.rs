//! HTTP handlers for the writing desk
//!
//! These handlers connect Axum routes to the application layer workflow
//! handler and render the resulting pages.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json};

use crate::application::handlers::{RunTaskCommand, RunTaskError, RunTaskHandler};
use crate::ports::AIProvider;

use super::dto::{HealthResponse, TaskForm};
use super::pages;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct DeskAppState {
    pub ai_provider: Arc<dyn AIProvider>,
    pub temperature: f32,
}

impl DeskAppState {
    pub fn new(ai_provider: Arc<dyn AIProvider>, temperature: f32) -> Self {
        Self {
            ai_provider,
            temperature,
        }
    }

    pub fn run_task_handler(&self) -> RunTaskHandler<dyn AIProvider> {
        RunTaskHandler::new(self.ai_provider.clone(), self.temperature)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Render the task form
///
/// GET /
pub async fn desk_page() -> Html<String> {
    Html(pages::form_page())
}

/// Run the workflow for a submitted task and render the results
///
/// POST /
///
/// The whole workflow runs inside this request; the response arrives when the
/// final revision does.
pub async fn run_task(
    State(app_state): State<DeskAppState>,
    Form(form): Form<TaskForm>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let task = form.task;

    // Execute command
    let handler = app_state.run_task_handler();
    let result = handler.handle(RunTaskCommand { task: task.clone() }).await;

    match result {
        Ok(result) => Ok(Html(pages::results_page(&task, &result))),
        // An empty submission re-renders the bare form, no result sections
        Err(RunTaskError::EmptyTask) => Ok(Html(pages::form_page())),
        Err(RunTaskError::Provider(msg)) => Err((
            StatusCode::BAD_GATEWAY,
            Html(pages::error_page(
                &task,
                &format!("AI Provider error: {}", msg),
            )),
        )),
    }
}

/// Report service health and the configured provider
///
/// GET /health
pub async fn health(State(app_state): State<DeskAppState>) -> Json<HealthResponse> {
    let info = app_state.ai_provider.provider_info();
    Json(HealthResponse {
        status: "ok".to_string(),
        provider: info.name,
        model: info.model,
    })
}
