use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, warn};

use crate::output::csv::{course_statuses_to_csv, courses_to_csv, metrics_to_csv};
use crate::output::render_json;
use crate::output::table::{
    render_assessment_table, render_course_status_table, render_metrics_table,
};
use crate::progress::{CourseProgress, Metrics};
use crate::render::Renderer;
use crate::types::AssessmentView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Writes results to stdout and problems to stderr.
pub struct ConsoleRenderer {
    format: OutputFormat,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn print_json<T: Serialize + ?Sized>(&self, kind: &str, value: &T) {
        match render_json(kind, value) {
            Ok(text) => println!("{text}"),
            Err(err) => warn!("failed rendering {kind} as JSON: {err}"),
        }
    }

    fn print_csv(&self, kind: &str, rendered: anyhow::Result<String>) {
        match rendered {
            Ok(text) => print!("{text}"),
            Err(err) => warn!("failed rendering {kind} as CSV: {err}"),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render_metrics(&self, metrics: &Metrics) {
        match self.format {
            OutputFormat::Table => println!("{}", render_metrics_table(metrics)),
            OutputFormat::Json => self.print_json("metrics", metrics),
            OutputFormat::Csv => self.print_csv("metrics", metrics_to_csv(metrics)),
        }
    }

    fn render_assessment(&self, view: &AssessmentView) {
        match self.format {
            OutputFormat::Table => println!("{}", render_assessment_table(view)),
            OutputFormat::Json => self.print_json("assessment", view),
            OutputFormat::Csv => self.print_csv("courses", courses_to_csv(&view.courses)),
        }
    }

    fn render_course_statuses(&self, courses: &[CourseProgress]) {
        match self.format {
            OutputFormat::Table => println!("{}", render_course_status_table(courses)),
            OutputFormat::Json => self.print_json("course_statuses", courses),
            OutputFormat::Csv => self.print_csv("course statuses", course_statuses_to_csv(courses)),
        }
    }

    fn render_failure(&self, message: &str) {
        match self.format {
            OutputFormat::Json => self.print_json("failure", message),
            _ => eprintln!("error: {message}"),
        }
    }

    fn render_service_warning(&self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn set_submit_enabled(&self, enabled: bool) {
        // One submission per process; nothing on a console to grey out.
        debug!(enabled, "submit control toggled");
    }
}
