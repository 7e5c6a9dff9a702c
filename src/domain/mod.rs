//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `agents` - Personas, chat transcripts, and the nested review plan

pub mod agents;
