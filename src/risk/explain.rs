use crate::risk::RiskClass;
use crate::types::AssessmentInput;

pub fn risk_reasons(input: &AssessmentInput, risk: RiskClass) -> Vec<String> {
    let mut reasons = Vec::new();

    if input.confidence <= 2 {
        reasons.push(
            "Your current career confidence is low, so decisions may feel uncertain.".to_string(),
        );
    }
    if input.career_changes >= 3 {
        reasons.push(
            "You have changed career preferences several times, which suggests instability."
                .to_string(),
        );
    }
    if input.cgpa < 6.5 {
        reasons.push(
            "Your recent academic performance may not yet strongly support your chosen direction."
                .to_string(),
        );
    }
    if risk == RiskClass::High && reasons.is_empty() {
        reasons.push("Several medium-level factors together increase overall risk.".to_string());
    }

    reasons
}

/// Three-sentence plain-language summary used when the service sends no insight.
///
/// `reasons` are the ones shown alongside it, so the summary never contradicts them.
pub fn fallback_insight(reasons: &[String], risk: RiskClass) -> String {
    let intro =
        format!("Your profile is currently classified as {risk} risk for career decision instability.");

    let detail = if reasons.is_empty() {
        "Your inputs look reasonably stable right now, with no major warning pattern detected."
            .to_string()
    } else {
        let short = reasons
            .iter()
            .take(2)
            .map(|reason| reason.trim_end_matches('.'))
            .collect::<Vec<_>>()
            .join(", ");
        format!("This result is mainly driven by {short}.")
    };

    let next_step = match risk {
        RiskClass::High => {
            "Focus on one short-term goal and seek mentoring to improve confidence and consistency."
        }
        RiskClass::Medium => {
            "With regular guidance and clearer goals, this risk can likely be reduced over time."
        }
        RiskClass::Low => {
            "Keep following your current plan and review your goals periodically to stay on track."
        }
    };

    format!("{intro} {detail} {next_step}")
}

pub fn skills_to_focus(input: &AssessmentInput, risk: RiskClass) -> Vec<String> {
    let mut skills = vec!["Goal clarity", "Consistency", "Self-reflection"];

    if input.confidence <= 2 {
        skills.push("Decision confidence");
    }
    if input.career_changes >= 3 {
        skills.push("Long-term planning");
    }
    if input.cgpa < 6.5 {
        skills.push("Academic strengthening");
    }
    if risk == RiskClass::Low {
        skills.push("Advanced specialization");
    }

    let mut unique: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        if !unique.iter().any(|s| s == skill) {
            unique.push(skill.to_string());
        }
    }
    unique
}
