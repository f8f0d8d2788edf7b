//! Result payloads
//!
//! Folds a builder result into the single structured object the
//! transport layer returns: `{"nodes": [...], "links": [...]}` on
//! success, `{"error": ..., "nodes": [], "links": []}` on failure.
//! Every payload passes through the numeric normalizer exactly once
//! before it crosses the serialization boundary.

use crate::citation;
use crate::collaboration;
use crate::errors::GraphError;
use crate::types::NetworkGraph;
use papergraph_common::normalize;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

/// Fetch the citation network payload.
pub fn citation_network(path: &Path) -> Value {
    fold(citation::build(path))
}

/// Fetch the author collaboration network payload.
pub fn collaboration_network(path: &Path) -> Value {
    fold(collaboration::build(path))
}

/// Fetch the citation network payload with derived impact scores.
pub fn enhanced_citation_network(path: &Path) -> Value {
    fold(citation::build_enhanced(path))
}

fn fold<N: Serialize, E: Serialize>(result: Result<NetworkGraph<N, E>, GraphError>) -> Value {
    let value = match result {
        Ok(graph) => match serde_json::to_value(&graph) {
            Ok(value) => value,
            Err(e) => error_value(&GraphError::Processing {
                message: e.to_string(),
            }),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Graph build failed");
            error_value(&e)
        }
    };

    normalize::plain(value)
}

fn error_value(error: &GraphError) -> Value {
    json!({
        "error": error.to_string(),
        "nodes": [],
        "links": [],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_table(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "papergraph-payload-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_success_payload_shape() {
        let path = write_table(
            "refs.csv",
            "citing_paperid,cited_paperid,year,ref_year\n\
             P1,P2,2021,2021\n\
             P1,P2,2022,2021\n",
        );
        let payload = citation_network(&path);

        assert!(payload.get("error").is_none());
        assert_eq!(payload["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(payload["links"].as_array().unwrap().len(), 1);
        assert_eq!(payload["links"][0]["value"], 2);
    }

    #[test]
    fn test_missing_table_payload_shape() {
        let path = PathBuf::from("/nonexistent/refs.csv");
        let payload = citation_network(&path);

        let error = payload["error"].as_str().unwrap();
        assert!(error.contains("/nonexistent/refs.csv"));
        assert_eq!(payload["nodes"].as_array().unwrap().len(), 0);
        assert_eq!(payload["links"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_malformed_table_payload_shape() {
        let path = write_table(
            "bad.csv",
            "citing_paperid,cited_paperid,year,ref_year\nP1,P2,twenty,2021\n",
        );
        let payload = citation_network(&path);

        assert!(payload["error"].as_str().is_some());
        assert_eq!(payload["nodes"].as_array().unwrap().len(), 0);
        assert_eq!(payload["links"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_enhanced_payload_carries_impact_score() {
        let path = write_table(
            "refs-enhanced.csv",
            "citing_paperid,cited_paperid,year,ref_year\nP1,P2,2021,2019\n",
        );
        let payload = enhanced_citation_network(&path);

        let nodes = payload["nodes"].as_array().unwrap();
        let p2 = nodes.iter().find(|n| n["id"] == "P2").unwrap();
        assert_eq!(p2["topic"], "Computer Science");
        assert!((p2["impact_score"].as_f64().unwrap() - 2.8).abs() < 1e-9);
    }

    #[test]
    fn test_collaboration_payload_shape() {
        let path = write_table(
            "affils.csv",
            "paperid,authorid,institutionid,author_position\n\
             W1,A,I1,1\n\
             W1,B,I1,last\n",
        );
        let payload = collaboration_network(&path);

        assert!(payload.get("error").is_none());
        assert_eq!(payload["links"][0]["source"], "A");
        assert_eq!(payload["links"][0]["target"], "B");
        assert_eq!(payload["links"][0]["co_authored_papers"], 1);
    }
}
