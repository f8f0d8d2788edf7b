//! Network endpoint handlers
//!
//! Each handler reloads its source table and rebuilds the graph from
//! scratch; build failures are reported inside the payload, so these
//! endpoints always answer with a success status.

use crate::AppState;
use axum::{extract::State, Json};
use papergraph_common::metrics;
use papergraph_network as network;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;

/// Fetch the citation network
pub async fn citation_network(State(state): State<AppState>) -> Json<Value> {
    build_payload(
        "citation",
        state.config.citation_table_path(),
        network::citation_network,
    )
}

/// Fetch the author collaboration network
pub async fn collaboration_network(State(state): State<AppState>) -> Json<Value> {
    build_payload(
        "collaboration",
        state.config.affiliation_table_path(),
        network::collaboration_network,
    )
}

/// Fetch the citation network with derived impact scores
pub async fn enhanced_citation_network(State(state): State<AppState>) -> Json<Value> {
    build_payload(
        "enhanced_citation",
        state.config.citation_table_path(),
        network::enhanced_citation_network,
    )
}

fn build_payload(
    network_name: &str,
    table: PathBuf,
    build: fn(&std::path::Path) -> Value,
) -> Json<Value> {
    let start = Instant::now();
    let payload = build(&table);

    let success = payload.get("error").is_none();
    let nodes = payload["nodes"].as_array().map(|a| a.len()).unwrap_or(0);
    let links = payload["links"].as_array().map(|a| a.len()).unwrap_or(0);
    metrics::record_graph_build(network_name, start.elapsed(), nodes, links, success);

    tracing::info!(
        network = network_name,
        table = %table.display(),
        nodes,
        links,
        success,
        "Network build served"
    );

    Json(payload)
}
