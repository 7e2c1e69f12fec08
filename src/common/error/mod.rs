//! Unified error types for sheetio.
//!
//! This module provides the error type shared by every tabular source,
//! presenting a consistent API to row stream callers.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
