//! TV Viewing Planner WASM API
//!
//! This module provides the JavaScript-facing API for the planner core.
//! It includes shared utilities for serialization, validation, and error
//! handling, as well as the exported compute functions.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: Result structs shared by the exported functions
//! - `core`: The exported compute functions

pub mod core;
pub mod helpers;
pub mod types;

// Re-export all public functions to maintain a flat API surface
pub use self::core::*;
pub use types::PlannerFrame;
