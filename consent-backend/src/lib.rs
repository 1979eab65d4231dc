// src/lib.rs
pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod i18n;
pub mod logging;
pub mod middleware;

// Re-export commonly used types
pub use error::{AppError, AppResult};
