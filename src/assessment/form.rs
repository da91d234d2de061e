use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AssessmentInput;

/// Raw answers exactly as entered, before any parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormFields {
    pub cgpa: String,
    pub backlogs: String,
    pub tech_interest: String,
    pub core_interest: String,
    pub management_interest: String,
    pub confidence: String,
    pub career_changes: String,
    pub decision_time: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("field {field} is not a finite number: {value:?}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        format!(
            "Please enter a valid number for {}.",
            self.field.replace('_', " ")
        )
    }
}

impl FormFields {
    /// Builds the request input. The first field that is not a finite number fails the whole form.
    pub fn parse(&self) -> Result<AssessmentInput, ValidationError> {
        Ok(AssessmentInput {
            cgpa: parse_decimal("cgpa", &self.cgpa)?,
            backlogs: parse_whole("backlogs", &self.backlogs)?,
            tech_interest: parse_whole("tech_interest", &self.tech_interest)?,
            core_interest: parse_whole("core_interest", &self.core_interest)?,
            management_interest: parse_whole("management_interest", &self.management_interest)?,
            confidence: parse_whole("confidence", &self.confidence)?,
            career_changes: parse_whole("career_changes", &self.career_changes)?,
            decision_time: parse_whole("decision_time", &self.decision_time)?,
        })
    }
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError {
            field,
            value: raw.to_string(),
        })
}

/// Whole-number fields drop any fractional part.
fn parse_whole(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let value = parse_decimal(field, raw)?.trunc();
    if value.abs() >= i64::MAX as f64 {
        return Err(ValidationError {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            cgpa: "8.2".to_string(),
            backlogs: "0".to_string(),
            tech_interest: "5".to_string(),
            core_interest: "2".to_string(),
            management_interest: "1".to_string(),
            confidence: "4".to_string(),
            career_changes: "0".to_string(),
            decision_time: "10".to_string(),
        }
    }

    #[test]
    fn parses_complete_form() {
        let input = filled().parse().expect("valid form");
        assert_eq!(input.cgpa, 8.2);
        assert_eq!(input.tech_interest, 5);
        assert_eq!(input.decision_time, 10);
    }

    #[test]
    fn whole_fields_truncate_fractions() {
        let mut form = filled();
        form.confidence = " 3.9 ".to_string();
        assert_eq!(form.parse().expect("valid").confidence, 3);
    }

    #[test]
    fn rejects_blank_and_non_finite_values() {
        for bad in ["", "abc", "NaN", "inf", "-infinity", "4 5", "1e400"] {
            let mut form = filled();
            form.backlogs = bad.to_string();
            let err = form.parse().expect_err("must fail");
            assert_eq!(err.field, "backlogs", "value {bad:?}");
        }
    }

    #[test]
    fn reports_first_offending_field() {
        let mut form = filled();
        form.cgpa = "eight".to_string();
        form.decision_time = String::new();
        let err = form.parse().expect_err("must fail");
        assert_eq!(err.field, "cgpa");
        assert_eq!(err.user_message(), "Please enter a valid number for cgpa.");
    }

    #[test]
    fn serializes_exactly_eight_wire_fields() {
        let value = serde_json::to_value(filled().parse().expect("valid")).expect("json");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), 8);
        for key in [
            "cgpa",
            "backlogs",
            "tech_interest",
            "core_interest",
            "management_interest",
            "confidence",
            "career_changes",
            "decision_time",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }
}
