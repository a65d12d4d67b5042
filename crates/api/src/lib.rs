//! Task service HTTP layer.
//!
//! Exposes config, state, error handling, extractors, views and routes so
//! integration tests and the binary entrypoint can both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod routes;
pub mod state;
pub mod views;
