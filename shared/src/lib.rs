//! MindTrack Shared Library
//!
//! This crate contains the domain model and the pure data-shaping logic
//! (aggregations and listing state) shared between the backend and any
//! future frontend build.

pub mod aggregate;
pub mod listing;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use aggregate::*;
pub use listing::*;
pub use models::*;
pub use types::*;
