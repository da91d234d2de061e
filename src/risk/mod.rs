pub mod catalog;
pub mod direction;
pub mod explain;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use catalog::fallback_courses;
pub use direction::derive_career_direction;
pub use explain::{fallback_insight, risk_reasons, skills_to_focus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskClass {
    Low,
    Medium,
    High,
}

impl RiskClass {
    pub const ALL: [RiskClass; 3] = [RiskClass::Low, RiskClass::Medium, RiskClass::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for RiskClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{display}")
    }
}

/// Maps a service risk label onto a display class. Anything not exactly `low` or `medium`
/// (ignoring case) is `High`, padded labels included.
pub fn classify_risk_class(risk_level: &str) -> RiskClass {
    let normalized = risk_level.to_ascii_lowercase();
    match normalized.as_str() {
        "low" => RiskClass::Low,
        "medium" => RiskClass::Medium,
        _ => RiskClass::High,
    }
}

/// Stability score as a whole percentage in `0..=100`. Missing or non-finite scores count as 0.
pub fn clamp_score_percent(stability_score: Option<f64>) -> u8 {
    let Some(score) = stability_score.filter(|s| s.is_finite()) else {
        return 0;
    };
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_risk_class("Low"), RiskClass::Low);
        assert_eq!(classify_risk_class("LOW"), RiskClass::Low);
        assert_eq!(classify_risk_class("mEdIuM"), RiskClass::Medium);
        assert_eq!(classify_risk_class("High"), RiskClass::High);
    }

    #[test]
    fn unrecognized_labels_fail_safe_to_high() {
        for label in [
            "", "unknown", "lowish", "med", "critical", "0", "l o w", " medium ", "low\n", "\tLow",
        ] {
            assert_eq!(classify_risk_class(label), RiskClass::High, "label {label:?}");
        }
    }

    #[test]
    fn score_percent_is_rounded_and_clamped() {
        assert_eq!(clamp_score_percent(Some(1.5)), 100);
        assert_eq!(clamp_score_percent(Some(-0.2)), 0);
        assert_eq!(clamp_score_percent(None), 0);
        assert_eq!(clamp_score_percent(Some(0.73)), 73);
        assert_eq!(clamp_score_percent(Some(f64::NAN)), 0);
        assert_eq!(clamp_score_percent(Some(f64::INFINITY)), 0);
    }
}
