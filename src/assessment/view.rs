use crate::risk::{
    clamp_score_percent, classify_risk_class, derive_career_direction, fallback_courses,
    fallback_insight, risk_reasons, skills_to_focus,
};
use crate::types::{AssessmentInput, AssessmentResult, AssessmentView, Provenance};

/// Resolves every optional service field into what gets shown.
///
/// Service values win whenever present; local equivalents fill the gaps.
pub fn assemble_view(result: &AssessmentResult, input: &AssessmentInput) -> AssessmentView {
    let risk_class = classify_risk_class(result.risk_level.as_deref().unwrap_or_default());
    let score_percent = clamp_score_percent(result.stability_score);

    let reasons = match &result.reasons {
        Some(reasons) if !reasons.is_empty() => reasons.clone(),
        _ => risk_reasons(input, risk_class),
    };

    let (insight, insight_source) = match &result.insight {
        Some(text) => (text.clone(), Provenance::Service),
        None => (fallback_insight(&reasons, risk_class), Provenance::Local),
    };

    let (career_direction, career_direction_source) = match &result.career_direction {
        Some(text) => (text.clone(), Provenance::Service),
        None => (
            derive_career_direction(risk_class, input).to_string(),
            Provenance::Local,
        ),
    };

    let (courses, courses_source) = match &result.courses {
        Some(courses) if !courses.is_empty() => (courses.clone(), Provenance::Service),
        _ => (fallback_courses(risk_class), Provenance::Local),
    };

    AssessmentView {
        risk_class,
        score_percent,
        insight,
        insight_source,
        career_direction,
        career_direction_source,
        courses,
        courses_source,
        reasons,
        skills_to_focus: skills_to_focus(input, risk_class),
        detail: result.detail.clone(),
    }
}
