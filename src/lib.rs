//! Client for the Mentorix career-risk self-assessment.
//!
//! Validates answers, submits them to the remote scoring service, fills in whatever the
//! service leaves out, and tracks progress on recommended courses across sessions.

pub mod assessment;
pub mod config;
pub mod endpoint;
pub mod health;
pub mod output;
pub mod progress;
pub mod render;
pub mod risk;
pub mod storage;
pub mod types;
