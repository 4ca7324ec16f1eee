//! Domain Layer
//!
//! The innermost layer containing the scoring rules with zero infrastructure
//! dependencies.
//!
//! # Bounded Contexts
//!
//! - [`risk_scoring`]: Warning classification, weighted aggregation and
//!   score-to-level classification for token mints

pub mod risk_scoring;
