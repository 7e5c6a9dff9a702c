//! Copydesk - Reflection-Pattern Writing Desk
//!
//! This crate implements a fixed multi-agent writing workflow: a writer agent
//! drafts content, a critic agent routes the draft through a nested panel of
//! reviewers (SEO, compliance, meta), and the writer revises based on the
//! aggregated feedback. The flow is exposed through a single-page web UI.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
