//! Application Services

mod assessment_cache;

pub use assessment_cache::{AssessmentCache, DEFAULT_MAX_ENTRIES};
