//! # Courtbook Core
//!
//! Domain models, request/response types, and the error taxonomy shared by
//! the courtbook database and API crates.

/// Error types used across the application
pub mod errors;
/// Domain models and API payload types
pub mod models;
