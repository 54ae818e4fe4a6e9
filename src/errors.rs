//! Error types for the calculation core
//!
//! Every error is terminal for the recompute that raised it; no partial or
//! degraded output is produced. The API layer converts these to JsValue
//! strings at the boundary.

use thiserror::Error;

/// Top-level calculation error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// The selected size has no catalog entry. The UI only ever offers
    /// catalog keys, so this indicates a configuration bug.
    #[error("unknown TV size: {0}\"")]
    UnknownSize(u32),

    /// A physical dimension that must be strictly positive was not
    #[error("{name} must be positive (got {value})")]
    NonPositiveDimension { name: &'static str, value: f64 },
}
