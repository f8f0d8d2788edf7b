//! Health check handlers

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub checks: TableChecks,
}

#[derive(Serialize)]
pub struct TableChecks {
    pub citation_table: CheckResult,
    pub affiliation_table: CheckResult,
}

#[derive(Serialize)]
pub struct CheckResult {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_path: Option<String>,
}

/// Liveness probe - always returns healthy if server is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Readiness probe - checks that the configured source tables exist
pub async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    let citation = check_table(&state.config.citation_table_path());
    let affiliation = check_table(&state.config.affiliation_table_path());

    let all_present = citation.status == "up" && affiliation.status == "up";

    Json(ReadyResponse {
        status: if all_present { "ready" } else { "not_ready" }.to_string(),
        checks: TableChecks {
            citation_table: citation,
            affiliation_table: affiliation,
        },
    })
}

fn check_table(path: &Path) -> CheckResult {
    if path.exists() {
        CheckResult {
            status: "up".to_string(),
            missing_path: None,
        }
    } else {
        CheckResult {
            status: "down".to_string(),
            missing_path: Some(path.display().to_string()),
        }
    }
}
