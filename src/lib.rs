#![deny(missing_docs)]

//! Core library for the certifications formatting API server.

/// HTTP routing and REST handlers.
pub mod api;
/// Shared-secret token authentication.
pub mod auth;
/// Environment-driven configuration management.
pub mod config;
/// Formatting cores turning assistant output into display payloads.
pub mod format;
/// Structured logging and tracing setup.
pub mod logging;
