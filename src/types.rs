use serde::{Deserialize, Serialize};

use crate::risk::RiskClass;

/// Validated answers, serialized as the body of an analysis request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentInput {
    pub cgpa: f64,
    pub backlogs: i64,
    pub tech_interest: i64,
    pub core_interest: i64,
    pub management_interest: i64,
    pub confidence: i64,
    pub career_changes: i64,
    pub decision_time: i64,
}

/// Scoring service output with every field optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssessmentResult {
    pub risk_level: Option<String>,
    pub stability_score: Option<f64>,
    pub insight: Option<String>,
    pub career_direction: Option<String>,
    pub courses: Option<Vec<CourseRecommendation>>,
    pub reasons: Option<Vec<String>>,
    /// Raw text kept when the body could not be parsed.
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRecommendation {
    pub title: String,
    pub platform: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub url: Option<String>,
}

impl CourseRecommendation {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            platform: None,
            duration: None,
            level: None,
            url: None,
        }
    }

    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    pub fn with_duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = Some(level.to_string());
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Service,
    Local,
}

/// Everything the renderer needs to show a finished assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentView {
    pub risk_class: RiskClass,
    pub score_percent: u8,
    pub insight: String,
    pub insight_source: Provenance,
    pub career_direction: String,
    pub career_direction_source: Provenance,
    pub courses: Vec<CourseRecommendation>,
    pub courses_source: Provenance,
    pub reasons: Vec<String>,
    pub skills_to_focus: Vec<String>,
    pub detail: Option<String>,
}
