use crate::risk::RiskClass;
use crate::types::AssessmentInput;

pub const FOUNDATION_PATH: &str =
    "Career Exploration Foundation Path (guided mentoring + structured goal setting)";
pub const TECHNOLOGY_PATH: &str = "Technology Specialist Path (Software / Data / AI)";
pub const MANAGEMENT_PATH: &str = "Management and Product Path";
pub const CORE_PATH: &str = "Core Domain Specialist Path";

/// Local career direction for results that arrive without one.
///
/// High risk always gets the foundation path. Otherwise the strongest interest wins,
/// ties resolved tech, then management, then core.
pub fn derive_career_direction(risk: RiskClass, input: &AssessmentInput) -> &'static str {
    if risk == RiskClass::High {
        return FOUNDATION_PATH;
    }

    let tech = input.tech_interest;
    let core = input.core_interest;
    let mgmt = input.management_interest;

    if tech >= core && tech >= mgmt {
        TECHNOLOGY_PATH
    } else if mgmt >= core {
        MANAGEMENT_PATH
    } else {
        CORE_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(tech: i64, core: i64, mgmt: i64) -> AssessmentInput {
        AssessmentInput {
            cgpa: 7.5,
            backlogs: 0,
            tech_interest: tech,
            core_interest: core,
            management_interest: mgmt,
            confidence: 3,
            career_changes: 1,
            decision_time: 10,
        }
    }

    #[test]
    fn high_risk_ignores_interests() {
        assert_eq!(
            derive_career_direction(RiskClass::High, &input(5, 1, 1)),
            FOUNDATION_PATH
        );
    }

    #[test]
    fn strongest_interest_wins() {
        assert_eq!(derive_career_direction(RiskClass::Low, &input(5, 2, 1)), TECHNOLOGY_PATH);
        assert_eq!(derive_career_direction(RiskClass::Medium, &input(1, 2, 4)), MANAGEMENT_PATH);
        assert_eq!(derive_career_direction(RiskClass::Low, &input(1, 5, 4)), CORE_PATH);
    }

    #[test]
    fn ties_prefer_tech_then_management() {
        assert_eq!(derive_career_direction(RiskClass::Low, &input(3, 3, 3)), TECHNOLOGY_PATH);
        assert_eq!(derive_career_direction(RiskClass::Low, &input(4, 4, 1)), TECHNOLOGY_PATH);
        assert_eq!(derive_career_direction(RiskClass::Low, &input(1, 4, 4)), MANAGEMENT_PATH);
    }
}
