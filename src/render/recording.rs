use std::sync::Mutex;

use crate::progress::{CourseProgress, Metrics};
use crate::render::Renderer;
use crate::types::AssessmentView;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Metrics(Metrics),
    Assessment(AssessmentView),
    CourseStatuses(Vec<CourseProgress>),
    Failure(String),
    ServiceWarning(String),
    SubmitEnabled(bool),
}

/// Renderer that keeps every call, for tests and headless embedding.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events
            .lock()
            .expect("render event mutex poisoned")
            .clone()
    }

    pub fn last_failure(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            RenderEvent::Failure(message) => Some(message),
            _ => None,
        })
    }

    pub fn last_assessment(&self) -> Option<AssessmentView> {
        self.events().into_iter().rev().find_map(|event| match event {
            RenderEvent::Assessment(view) => Some(view),
            _ => None,
        })
    }

    pub fn submit_enabled(&self) -> Option<bool> {
        self.events().into_iter().rev().find_map(|event| match event {
            RenderEvent::SubmitEnabled(enabled) => Some(enabled),
            _ => None,
        })
    }

    fn push(&self, event: RenderEvent) {
        self.events
            .lock()
            .expect("render event mutex poisoned")
            .push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn render_metrics(&self, metrics: &Metrics) {
        self.push(RenderEvent::Metrics(metrics.clone()));
    }

    fn render_assessment(&self, view: &AssessmentView) {
        self.push(RenderEvent::Assessment(view.clone()));
    }

    fn render_course_statuses(&self, courses: &[CourseProgress]) {
        self.push(RenderEvent::CourseStatuses(courses.to_vec()));
    }

    fn render_failure(&self, message: &str) {
        self.push(RenderEvent::Failure(message.to_string()));
    }

    fn render_service_warning(&self, message: &str) {
        self.push(RenderEvent::ServiceWarning(message.to_string()));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.push(RenderEvent::SubmitEnabled(enabled));
    }
}
