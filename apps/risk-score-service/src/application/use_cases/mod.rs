//! Application Use Cases

mod assess_risk;

pub use assess_risk::AssessRiskUseCase;
