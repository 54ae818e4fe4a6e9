//! Recommendation engine
//!
//! Maps the computed geometry to qualitative bands, selects an ideal size
//! for the viewing distance, and composes the advisory text shown under
//! the diagrams.

pub mod advisory;
pub mod bands;
pub mod selector;

// Re-export commonly used types
pub use advisory::{compose_advisory, AdvisoryContext};
pub use bands::{classify_metrics, MetricBands, RecommendationBand};
pub use selector::{recommend_size, SizeRecommendation, TARGET_HORIZONTAL_FOV_DEG};
