use chrono::Utc;
use serde::Serialize;

use crate::config::ConfigPresence;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentReport {
    pub node_env: String,
    #[serde(flatten)]
    pub presence: ConfigPresence,
}

/// Liveness payload served on the health path
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub env: EnvironmentReport,
}

impl HealthResponse {
    pub fn ok(node_env: String, presence: ConfigPresence) -> Self {
        Self {
            status: "ok",
            timestamp: now_iso8601(),
            env: EnvironmentReport { node_env, presence },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    pub message: String,
    pub timestamp: String,
}

impl NotFoundResponse {
    pub fn for_path(path: &str) -> Self {
        Self {
            error: "Not Found",
            message: format!("Route {} not found", path),
            timestamp: now_iso8601(),
        }
    }
}

/// Aggregate counters shown on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_bills: u32,
    pub council_members: u32,
    pub neighborhoods_active: u32,
    pub total_votes: u32,
    pub neighbors_engaged: u32,
}

impl StatsSnapshot {
    pub const fn current() -> Self {
        Self {
            total_bills: 1247,
            council_members: 9,
            neighborhoods_active: 23,
            total_votes: 8934,
            neighbors_engaged: 3421,
        }
    }
}

pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339()
}
