use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::info;

use crate::config::ServiceConfig;
use crate::types::AssessmentInput;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Status and raw body of a response that made it back over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReply {
    pub status: u16,
    pub body: String,
}

impl ServiceReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The remote scoring service. Only reaching it can fail here; status codes are the caller's call.
#[async_trait]
pub trait ScoringService: Send + Sync {
    fn endpoint(&self) -> &str;
    async fn analyze(&self, input: &AssessmentInput) -> Result<ServiceReply, TransportError>;
    async fn check_health(&self) -> Result<u16, TransportError>;
}

pub struct HttpScoringService {
    client: Client,
    base_url: String,
    analyze_url: String,
    health_url: String,
}

impl HttpScoringService {
    pub fn new(base_url: &str, config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mentorix-client/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs.max(1)))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            analyze_url: join_url(base_url, &config.analyze_path),
            health_url: join_url(base_url, &config.health_path),
        })
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn analyze(&self, input: &AssessmentInput) -> Result<ServiceReply, TransportError> {
        info!(url = %self.analyze_url, "submitting assessment");
        let response = self
            .client
            .post(&self.analyze_url)
            .json(input)
            .send()
            .await
            .map_err(|e| TransportError(format!("POST {} failed: {e}", self.analyze_url)))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            TransportError(format!("failed reading response body from {}: {e}", self.analyze_url))
        })?;
        info!(status, bytes = body.len(), "assessment response received");
        Ok(ServiceReply { status, body })
    }

    async fn check_health(&self) -> Result<u16, TransportError> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(|e| TransportError(format!("GET {} failed: {e}", self.health_url)))?;
        Ok(response.status().as_u16())
    }
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() || path == "/" {
        return format!("{base}/");
    }
    format!("{base}/{}", path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;

    async fn spawn_service(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        format!("http://{addr}")
    }

    fn sample_input() -> AssessmentInput {
        AssessmentInput {
            cgpa: 8.2,
            backlogs: 0,
            tech_interest: 5,
            core_interest: 2,
            management_interest: 1,
            confidence: 4,
            career_changes: 0,
            decision_time: 10,
        }
    }

    #[test]
    fn joins_paths_onto_base() {
        assert_eq!(join_url("http://h", "/analyze-risk"), "http://h/analyze-risk");
        assert_eq!(join_url("http://h", "analyze-risk"), "http://h/analyze-risk");
        assert_eq!(join_url("http://h", "/"), "http://h/");
    }

    #[tokio::test]
    async fn posts_input_as_json_and_returns_raw_reply() {
        let app = Router::new().route(
            "/analyze-risk",
            post(|Json(body): Json<Value>| async move {
                let echoed = body.as_object().map(|o| o.len()).unwrap_or_default();
                Json(json!({"risk_level": "Low", "fields": echoed}))
            }),
        );
        let base = spawn_service(app).await;
        let service = HttpScoringService::new(&base, &ServiceConfig::default()).expect("client");

        let reply = service.analyze(&sample_input()).await.expect("reply");
        assert!(reply.is_success());
        let body: Value = serde_json::from_str(&reply.body).expect("json");
        assert_eq!(body["fields"], 8);
    }

    #[tokio::test]
    async fn failure_statuses_are_replies_not_errors() {
        let app = Router::new().route(
            "/analyze-risk",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"detail": "cgpa out of range"})),
                )
            }),
        );
        let base = spawn_service(app).await;
        let service = HttpScoringService::new(&base, &ServiceConfig::default()).expect("client");
        let reply = service.analyze(&sample_input()).await.expect("reply");
        assert_eq!(reply.status, 422);
        assert!(!reply.is_success());
    }

    #[tokio::test]
    async fn health_reports_status_and_unreachable_hosts_fail() {
        let app = Router::new().route("/", get(|| async { Json(json!({"status": "ok"})) }));
        let base = spawn_service(app).await;
        let service = HttpScoringService::new(&base, &ServiceConfig::default()).expect("client");
        assert_eq!(service.check_health().await.expect("health"), 200);

        let closed = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr")
        };
        let dead = HttpScoringService::new(&format!("http://{closed}"), &ServiceConfig::default())
            .expect("client");
        assert!(dead.check_health().await.is_err());
        assert!(dead.analyze(&sample_input()).await.is_err());
    }
}
