//! Synthetic demo-data handlers
//!
//! Unlike the network endpoints, a failure here surfaces as a
//! transport-level server error with a flat `{"error": ...}` body.

use axum::Json;
use papergraph_common::{errors::Result, metrics};
use papergraph_network::synthetic::{self, PatentCitation, YearCount};

/// Randomized papers-per-year demo series
pub async fn paper_counts() -> Result<Json<Vec<YearCount>>> {
    let series = synthetic::paper_counts();
    metrics::record_request("/api/paper-counts", 200);
    Ok(Json(series))
}

/// Randomized patent-citation demo series
pub async fn patent_citations() -> Result<Json<Vec<PatentCitation>>> {
    let series = synthetic::patent_citations();
    metrics::record_request("/api/patent-citations", 200);
    Ok(Json(series))
}
