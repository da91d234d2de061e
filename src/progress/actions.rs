use anyhow::{bail, Result};
use tracing::info;

use crate::progress::{CourseId, CourseProgress, CourseStatus, Metrics, ProgressStore};
use crate::render::Renderer;

/// Applies a user's status change to one course and pushes the redraws that follow it.
pub fn apply_course_action(
    store: &ProgressStore,
    renderer: &dyn Renderer,
    title: &str,
    status: CourseStatus,
) -> Result<Metrics> {
    let id = CourseId::from_title(title);
    if id.is_empty() {
        bail!("course title {title:?} has no letters or digits to identify it");
    }
    match status {
        CourseStatus::NotStarted => store.reset(&id)?,
        tracked => store.set_status(&id, tracked)?,
    };
    info!(course = %id, status = status.as_str(), "course progress updated");

    renderer.render_course_statuses(&store.statuses_for([title]));
    let metrics = store.metrics();
    renderer.render_metrics(&metrics);
    Ok(metrics)
}

/// Current status of every tracked course, for a full progress redraw.
///
/// Only slugs are persisted, so rows carry an empty title.
pub fn show_progress(store: &ProgressStore, renderer: &dyn Renderer) -> Metrics {
    let record = store.load();
    let tracked = record
        .iter()
        .map(|(id, status)| CourseProgress {
            id: id.clone(),
            title: String::new(),
            status,
        })
        .collect::<Vec<_>>();
    renderer.render_course_statuses(&tracked);
    let metrics = store.metrics();
    renderer.render_metrics(&metrics);
    metrics
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::render::{RecordingRenderer, RenderEvent};
    use crate::storage::MemoryStorage;

    #[test]
    fn action_redraws_course_and_metrics() {
        let store = ProgressStore::new(Arc::new(MemoryStorage::new()));
        let renderer = RecordingRenderer::new();

        apply_course_action(&store, &renderer, "Career Planning Basics", CourseStatus::Started)
            .expect("start");
        let metrics = apply_course_action(
            &store,
            &renderer,
            "Career Planning Basics",
            CourseStatus::Completed,
        )
        .expect("complete");

        assert_eq!(metrics.completed_count, 1);
        assert_eq!(metrics.skill_score, 20);
        let events = renderer.events();
        assert_eq!(events.len(), 4);
        match &events[2] {
            RenderEvent::CourseStatuses(rows) => {
                assert_eq!(rows[0].id.as_str(), "career-planning-basics");
                assert_eq!(rows[0].status, CourseStatus::Completed);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn blank_titles_are_rejected() {
        let store = ProgressStore::new(Arc::new(MemoryStorage::new()));
        let renderer = RecordingRenderer::new();
        assert!(apply_course_action(&store, &renderer, " -- ", CourseStatus::Started).is_err());
        assert!(renderer.events().is_empty());
    }

    #[test]
    fn show_lists_tracked_courses() {
        let store = ProgressStore::new(Arc::new(MemoryStorage::new()));
        let renderer = RecordingRenderer::new();
        store
            .set_status(&CourseId::from_title("Python for Everybody"), CourseStatus::Started)
            .expect("seed");
        let metrics = show_progress(&store, &renderer);
        assert_eq!(metrics.started_count, 1);
        match &renderer.events()[0] {
            RenderEvent::CourseStatuses(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].id.as_str(), "python-for-everybody");
                assert!(rows[0].title.is_empty());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn reset_action_forgets_the_course() {
        let store = ProgressStore::new(Arc::new(MemoryStorage::new()));
        let renderer = RecordingRenderer::new();
        apply_course_action(&store, &renderer, "Leadership", CourseStatus::Completed)
            .expect("complete");
        let metrics = apply_course_action(&store, &renderer, "Leadership", CourseStatus::NotStarted)
            .expect("reset");

        assert!(store.load().is_empty());
        assert_eq!(metrics.total_tracked, 0);
        assert_eq!(metrics.completed_count, 0);
        match &renderer.events()[2] {
            RenderEvent::CourseStatuses(rows) => assert_eq!(rows[0].status, CourseStatus::NotStarted),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
