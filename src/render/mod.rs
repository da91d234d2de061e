pub mod console;
pub mod recording;

use crate::progress::{CourseProgress, Metrics};
use crate::types::AssessmentView;

pub use console::ConsoleRenderer;
pub use recording::{RecordingRenderer, RenderEvent};

/// Display surface driven by the client. Nothing is ever read back from it.
pub trait Renderer: Send + Sync {
    fn render_metrics(&self, metrics: &Metrics);
    fn render_assessment(&self, view: &AssessmentView);
    fn render_course_statuses(&self, courses: &[CourseProgress]);
    fn render_failure(&self, message: &str);
    fn render_service_warning(&self, message: &str);
    fn set_submit_enabled(&self, enabled: bool);
}
