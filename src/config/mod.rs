//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (API base URL, endpoints, defaults)
//! - CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::LogLevel;
