use anyhow::Result;

use crate::progress::{CourseProgress, Metrics};
use crate::types::CourseRecommendation;

pub fn course_statuses_to_csv(courses: &[CourseProgress]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["course_id", "title", "status"])?;
    for course in courses {
        writer.write_record([
            course.id.as_str(),
            course.title.as_str(),
            course.status.as_str(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn metrics_to_csv(metrics: &Metrics) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "completed_count",
        "started_count",
        "total_tracked",
        "completion_percent",
        "skill_score",
        "insight",
    ])?;
    writer.write_record([
        metrics.completed_count.to_string(),
        metrics.started_count.to_string(),
        metrics.total_tracked.to_string(),
        metrics.completion_percent.to_string(),
        metrics.skill_score.to_string(),
        metrics.insight_message().to_string(),
    ])?;
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn courses_to_csv(courses: &[CourseRecommendation]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["title", "platform", "duration", "level", "url"])?;
    for course in courses {
        writer.write_record([
            course.title.as_str(),
            course.platform.as_deref().unwrap_or_default(),
            course.duration.as_deref().unwrap_or_default(),
            course.level.as_deref().unwrap_or_default(),
            course.url.as_deref().unwrap_or_default(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
