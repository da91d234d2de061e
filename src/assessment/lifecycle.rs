use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use crate::assessment::response::{failure_reason, parse_body, result_from_value};
use crate::assessment::view::assemble_view;
use crate::assessment::{AssessmentError, FormFields, ScoringService};
use crate::progress::ProgressStore;
use crate::render::Renderer;
use crate::types::AssessmentView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl Display for LifecycleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Succeeded(AssessmentView),
    Failed(AssessmentError),
    /// Another submission was already in flight; nothing happened.
    Suppressed,
}

/// Drives one submission at a time from raw form input to a rendered result.
pub struct AssessmentLifecycle {
    service: Arc<dyn ScoringService>,
    progress: ProgressStore,
    renderer: Arc<dyn Renderer>,
    state: Mutex<LifecycleState>,
    in_flight: AtomicBool,
}

impl AssessmentLifecycle {
    pub fn new(
        service: Arc<dyn ScoringService>,
        progress: ProgressStore,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            service,
            progress,
            renderer,
            state: Mutex::new(LifecycleState::Idle),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.lock().expect("lifecycle state mutex poisoned")
    }

    pub async fn submit(&self, form: &FormFields) -> SubmitOutcome {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("submission already in flight, ignoring trigger");
            return SubmitOutcome::Suppressed;
        }
        let _cleanup = SubmitGuard::engage(self);

        match self.run(form).await {
            Ok(view) => {
                self.transition(LifecycleState::Succeeded);
                self.render_success(&view);
                SubmitOutcome::Succeeded(view)
            }
            Err(err) => {
                self.transition(LifecycleState::Failed);
                warn!("assessment failed: {err}");
                self.renderer.render_failure(&err.user_message());
                SubmitOutcome::Failed(err)
            }
        }
    }

    async fn run(&self, form: &FormFields) -> Result<AssessmentView, AssessmentError> {
        self.transition(LifecycleState::Validating);
        let input = form.parse()?;

        self.transition(LifecycleState::Submitting);
        let reply = self.service.analyze(&input).await?;

        let body = parse_body(&reply.body);
        if !reply.is_success() {
            return Err(AssessmentError::Service {
                status: reply.status,
                reason: failure_reason(reply.status, &body),
            });
        }

        let result = result_from_value(&body);
        Ok(assemble_view(&result, &input))
    }

    fn render_success(&self, view: &AssessmentView) {
        info!(
            risk = view.risk_class.as_str(),
            score = view.score_percent,
            courses = view.courses.len(),
            "assessment succeeded"
        );
        self.renderer.render_assessment(view);
        let statuses = self
            .progress
            .statuses_for(view.courses.iter().map(|c| c.title.as_str()));
        self.renderer.render_course_statuses(&statuses);
        self.renderer.render_metrics(&self.progress.metrics());
    }

    fn transition(&self, next: LifecycleState) {
        let mut state = self.state.lock().expect("lifecycle state mutex poisoned");
        debug!(from = %*state, to = %next, "lifecycle transition");
        *state = next;
    }
}

/// Disables the submit control while alive; dropping it always returns the lifecycle to idle.
struct SubmitGuard<'a> {
    lifecycle: &'a AssessmentLifecycle,
}

impl<'a> SubmitGuard<'a> {
    fn engage(lifecycle: &'a AssessmentLifecycle) -> Self {
        lifecycle.renderer.set_submit_enabled(false);
        Self { lifecycle }
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.lifecycle.transition(LifecycleState::Idle);
        self.lifecycle.in_flight.store(false, Ordering::SeqCst);
        self.lifecycle.renderer.set_submit_enabled(true);
    }
}
