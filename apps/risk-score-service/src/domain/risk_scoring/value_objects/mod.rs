//! Risk Scoring Value Objects

mod assessment;
mod raw_warning;
mod risk_level;
mod severity;
mod warning;

pub use assessment::{RiskAssessment, to_iso_millis};
pub use raw_warning::RawWarning;
pub use risk_level::RiskLevel;
pub use severity::Severity;
pub use warning::Warning;
