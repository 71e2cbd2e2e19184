//! Shared types for the Radar Fiscal backend
//!
//! Error codes, the `AppError`/`ApiResponse` pair used by every HTTP
//! handler, and small utilities shared across crates.

pub mod error;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
