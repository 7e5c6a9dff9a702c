//! Route definitions for the writing desk

use axum::routing::get;
use axum::Router;

use super::handlers::{desk_page, health, run_task, DeskAppState};

/// Create the desk router with all endpoints
///
/// # Endpoints
///
/// - `GET /` - Task form
/// - `POST /` - Run the workflow and render the results
/// - `GET /health` - Service health and configured provider
pub fn routes() -> Router<DeskAppState> {
    Router::new()
        .route("/", get(desk_page).post(run_task))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_creates_valid_router() {
        // Ensures the route configuration compiles and creates a valid router
        let _routes = routes();
    }
}
