use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::progress::{CourseProgress, CourseStatus, Metrics};
use crate::risk::RiskClass;
use crate::types::{AssessmentView, Provenance};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn provenance_note(source: Provenance) -> &'static str {
    match source {
        Provenance::Service => "",
        Provenance::Local => " (estimated locally)",
    }
}

pub fn render_assessment_table(view: &AssessmentView) -> String {
    let mut summary = new_table();
    summary.set_header(vec!["Field", "Value"]);

    let risk_color = match view.risk_class {
        RiskClass::Low => Color::Green,
        RiskClass::Medium => Color::Yellow,
        RiskClass::High => Color::Red,
    };
    summary.add_row(Row::from(vec![
        Cell::new("Risk level"),
        Cell::new(view.risk_class.to_string()).fg(risk_color),
    ]));
    summary.add_row(vec![
        "Stability score".to_string(),
        format!("{}%", view.score_percent),
    ]);
    summary.add_row(vec![
        "Career direction".to_string(),
        format!(
            "{}{}",
            view.career_direction,
            provenance_note(view.career_direction_source)
        ),
    ]);
    summary.add_row(vec![
        "Insight".to_string(),
        format!("{}{}", view.insight, provenance_note(view.insight_source)),
    ]);
    if !view.reasons.is_empty() {
        summary.add_row(vec!["Reasons".to_string(), view.reasons.join("\n")]);
    }
    if !view.skills_to_focus.is_empty() {
        summary.add_row(vec![
            "Skills to focus".to_string(),
            view.skills_to_focus.join(", "),
        ]);
    }
    if let Some(detail) = &view.detail {
        summary.add_row(vec!["Service detail".to_string(), detail.clone()]);
    }

    let mut courses = new_table();
    courses.set_header(vec!["Course", "Platform", "Duration", "Level", "Link"]);
    for course in &view.courses {
        courses.add_row(vec![
            course.title.clone(),
            course.platform.clone().unwrap_or_else(|| "-".to_string()),
            course.duration.clone().unwrap_or_else(|| "-".to_string()),
            course.level.clone().unwrap_or_else(|| "-".to_string()),
            course.url.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    format!(
        "{summary}\nRecommended courses{}:\n{courses}",
        provenance_note(view.courses_source)
    )
}

pub fn render_metrics_table(metrics: &Metrics) -> String {
    let mut table = new_table();
    table.set_header(vec!["Completed", "Started", "Tracked", "Completion", "Skill score"]);
    table.add_row(vec![
        metrics.completed_count.to_string(),
        metrics.started_count.to_string(),
        metrics.total_tracked.to_string(),
        format!("{}%", metrics.completion_percent),
        metrics.skill_score.to_string(),
    ]);
    format!("{table}\n{}", metrics.insight_message())
}

pub fn render_course_status_table(courses: &[CourseProgress]) -> String {
    let mut table = new_table();
    table.set_header(vec!["Course ID", "Title", "Status"]);
    for course in courses {
        let color = match course.status {
            CourseStatus::NotStarted => Color::Grey,
            CourseStatus::Started => Color::Yellow,
            CourseStatus::Completed => Color::Green,
        };
        table.add_row(Row::from(vec![
            Cell::new(course.id.as_str()),
            Cell::new(if course.title.is_empty() { "-" } else { course.title.as_str() }),
            Cell::new(course.status.to_string()).fg(color),
        ]));
    }
    table.to_string()
}
