//! Writing desk HTTP adapter.
//!
//! Serves the single-page form UI, runs the workflow on submission, and
//! exposes a health endpoint.

mod dto;
mod handlers;
mod pages;
mod routes;

pub use handlers::DeskAppState;
pub use routes::routes;
