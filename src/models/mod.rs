//! Models module for the TV Viewing Planner
//!
//! This module contains the data models used by the calculation core:
//! the fixed TV size catalog and the per-recompute parameter bundle.

pub mod catalog;
pub mod parameters;

// Re-export commonly used types
pub use catalog::*;
pub use parameters::*;
