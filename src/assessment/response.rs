use serde_json::{json, Map, Value};
use tracing::warn;

use crate::types::{AssessmentResult, CourseRecommendation};

pub const DETAIL_PREVIEW_CHARS: usize = 180;

/// Turns a raw response body into structured data without ever failing.
///
/// Empty bodies read as `{}`. Bodies that are not JSON become `{"detail": <preview>}`.
pub fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Object(Map::new());
    }
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            warn!("response body is not valid JSON, keeping a preview: {err}");
            let preview: String = body.trim().chars().take(DETAIL_PREVIEW_CHARS).collect();
            json!({ "detail": preview })
        }
    }
}

/// Human-readable reason for a failure status: `detail`, then `errors`, then a generic line.
pub fn failure_reason(status: u16, body: &Value) -> String {
    if let Some(object) = body.as_object() {
        if let Some(detail) = object_get_case_insensitive(object, "detail").and_then(join_messages) {
            return detail;
        }
        if let Some(errors) = object_get_case_insensitive(object, "errors").and_then(join_messages) {
            return errors;
        }
    }
    format!("Request failed with status {status}")
}

pub fn result_from_value(body: &Value) -> AssessmentResult {
    let Some(object) = body.as_object() else {
        return AssessmentResult::default();
    };

    AssessmentResult {
        risk_level: string_from_paths(object, &["risk_level", "risk"]),
        stability_score: number_from_paths(object, &["stability_score", "score"]),
        insight: string_from_paths(object, &["insight", "insight_message", "summary"]),
        career_direction: string_from_paths(
            object,
            &["career_direction", "recommendation.career_path", "career_path"],
        ),
        courses: object_path_value(object, "recommendation.courses")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(course_from_value).collect()),
        reasons: object_get_case_insensitive(object, "reasons")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        detail: string_from_paths(object, &["detail"]),
    }
}

fn course_from_value(value: &Value) -> Option<CourseRecommendation> {
    if let Some(title) = value.as_str() {
        let title = title.trim();
        return (!title.is_empty()).then(|| CourseRecommendation::new(title));
    }
    let object = value.as_object()?;
    let title = string_from_paths(object, &["title", "name", "course"])?;
    Some(CourseRecommendation {
        title,
        platform: string_from_paths(object, &["platform", "provider"]),
        duration: string_from_paths(object, &["duration"]),
        level: string_from_paths(object, &["level", "difficulty"]),
        url: string_from_paths(object, &["url", "link"]),
    })
}

fn join_messages(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Object(object) => string_from_paths(object, &["msg", "message"]),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn string_from_paths(object: &Map<String, Value>, paths: &[&str]) -> Option<String> {
    for path in paths {
        let Some(value) = object_path_value(object, path) else {
            continue;
        };
        match value {
            Value::String(s) => {
                if !s.trim().is_empty() {
                    return Some(s.trim().to_string());
                }
            }
            Value::Number(n) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

fn number_from_paths(object: &Map<String, Value>, paths: &[&str]) -> Option<f64> {
    for path in paths {
        let Some(value) = object_path_value(object, path) else {
            continue;
        };
        if let Some(number) = to_f64(value) {
            return Some(number);
        }
    }
    None
}

fn object_path_value<'a>(object: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = object_get_case_insensitive(object, first)?;
    for segment in segments {
        let nested = current.as_object()?;
        current = object_get_case_insensitive(nested, segment)?;
    }
    Some(current)
}

fn object_get_case_insensitive<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).or_else(|| {
        object
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn to_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
