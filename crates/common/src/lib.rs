//! FacDash Common Library
//!
//! Shared code for the FacDash services including:
//! - Typed faculty data model
//! - Faculty lookup store (trait + JSON document warehouse)
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use store::{FacultyStore, JsonWarehouse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default data directory for the JSON warehouse
pub const DEFAULT_DATA_DIR: &str = "data";
