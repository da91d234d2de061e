use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assessment::ScoringService;
use crate::render::Renderer;

pub const UNREACHABLE_MESSAGE: &str = "The scoring service could not be reached. Point the client at a working service with `mentorix config --set-endpoint <url>` or `--service-url <url>`.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthStatus {
    Reachable,
    Unreachable { reason: String },
}

/// One-shot startup check. Advisory only: it never touches the submit control.
pub async fn probe_health(service: &dyn ScoringService, renderer: &dyn Renderer) -> HealthStatus {
    let status = match service.check_health().await {
        Ok(code) if (200..300).contains(&code) => HealthStatus::Reachable,
        Ok(code) => HealthStatus::Unreachable {
            reason: format!("health check returned status {code}"),
        },
        Err(err) => HealthStatus::Unreachable {
            reason: err.to_string(),
        },
    };

    match &status {
        HealthStatus::Reachable => info!(endpoint = service.endpoint(), "scoring service reachable"),
        HealthStatus::Unreachable { reason } => {
            warn!(endpoint = service.endpoint(), "scoring service unreachable: {reason}");
            renderer.render_service_warning(UNREACHABLE_MESSAGE);
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::assessment::{ServiceReply, TransportError};
    use crate::render::{RecordingRenderer, RenderEvent};
    use crate::types::AssessmentInput;

    struct HealthOnly(Result<u16, TransportError>);

    #[async_trait]
    impl ScoringService for HealthOnly {
        fn endpoint(&self) -> &str {
            "http://probe"
        }

        async fn analyze(&self, _input: &AssessmentInput) -> Result<ServiceReply, TransportError> {
            Err(TransportError("not used".to_string()))
        }

        async fn check_health(&self) -> Result<u16, TransportError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn healthy_service_renders_nothing() {
        let renderer = RecordingRenderer::new();
        let status = probe_health(&HealthOnly(Ok(200)), &renderer).await;
        assert_eq!(status, HealthStatus::Reachable);
        assert!(renderer.events().is_empty());
    }

    #[tokio::test]
    async fn failures_show_one_static_warning_and_leave_submit_alone() {
        for outcome in [Ok(503), Err(TransportError("refused".to_string()))] {
            let renderer = RecordingRenderer::new();
            let status = probe_health(&HealthOnly(outcome), &renderer).await;
            assert!(matches!(status, HealthStatus::Unreachable { .. }));
            assert_eq!(
                renderer.events(),
                vec![RenderEvent::ServiceWarning(UNREACHABLE_MESSAGE.to_string())]
            );
        }
    }
}
