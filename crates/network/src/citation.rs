//! Citation network construction
//!
//! Derives paper nodes and citation edges from the citation-event table.
//! The enhanced variant attaches a constant topic and a derived impact
//! score per node.

use crate::errors::GraphError;
use crate::types::{
    CitationLink, EnhancedPaperNode, NetworkGraph, PaperNode, PublishYear, INSTITUTION_LABEL,
    TOPIC_LABEL,
};
use papergraph_common::tables;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

/// Citation table schema
pub const CITATION_COLUMNS: &[&str] = &["citing_paperid", "cited_paperid", "year", "ref_year"];

/// Retained citing-year window
const CITING_YEAR_MIN: i64 = 2020;
const CITING_YEAR_MAX: i64 = 2025;

#[derive(Debug, Deserialize)]
struct CitationRow {
    #[serde(rename = "citing_paperid")]
    citing_paper_id: Option<String>,
    #[serde(rename = "cited_paperid")]
    cited_paper_id: Option<String>,
    #[serde(rename = "year")]
    citing_year: Option<i64>,
    #[serde(rename = "ref_year")]
    cited_year: Option<i64>,
}

/// A citation event that survived cleaning
#[derive(Debug, Clone)]
struct CitationRecord {
    citing: String,
    cited: String,
    citing_year: i64,
    cited_year: i64,
}

/// Build the citation network from the table at `path`.
pub fn build(path: &Path) -> Result<NetworkGraph<PaperNode, CitationLink>, GraphError> {
    let rows: Vec<CitationRow> = tables::load_table(path, CITATION_COLUMNS)?;
    let records = clean(rows);
    Ok(assemble(&records))
}

/// Build the citation network with the derived impact metric attached.
pub fn build_enhanced(
    path: &Path,
) -> Result<NetworkGraph<EnhancedPaperNode, CitationLink>, GraphError> {
    build(path).map(enhance)
}

/// Drop rows with any missing required field, then keep the citing-year
/// window.
fn clean(rows: Vec<CitationRow>) -> Vec<CitationRecord> {
    let total = rows.len();
    let records: Vec<CitationRecord> = rows
        .into_iter()
        .filter_map(|row| {
            match (
                row.citing_paper_id,
                row.cited_paper_id,
                row.citing_year,
                row.cited_year,
            ) {
                (Some(citing), Some(cited), Some(citing_year), Some(cited_year)) => {
                    Some(CitationRecord {
                        citing,
                        cited,
                        citing_year,
                        cited_year,
                    })
                }
                _ => None,
            }
        })
        .filter(|r| (CITING_YEAR_MIN..=CITING_YEAR_MAX).contains(&r.citing_year))
        .collect();

    tracing::debug!(total, retained = records.len(), "Citation rows cleaned");
    records
}

fn assemble(records: &[CitationRecord]) -> NetworkGraph<PaperNode, CitationLink> {
    // One pass builds the lookup indexes: first record per citing id,
    // first record per cited id, and how often each id was cited.
    let mut first_citing: HashMap<&str, &CitationRecord> = HashMap::new();
    let mut first_cited: HashMap<&str, &CitationRecord> = HashMap::new();
    let mut cited_counts: HashMap<&str, i64> = HashMap::new();
    for record in records {
        first_citing.entry(record.citing.as_str()).or_insert(record);
        first_cited.entry(record.cited.as_str()).or_insert(record);
        *cited_counts.entry(record.cited.as_str()).or_insert(0) += 1;
    }

    // Node ids in first-seen order: citing ids first, then cited ids.
    let mut node_ids: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        if seen.insert(record.citing.as_str()) {
            node_ids.push(record.citing.as_str());
        }
    }
    for record in records {
        if seen.insert(record.cited.as_str()) {
            node_ids.push(record.cited.as_str());
        }
    }

    let nodes: Vec<PaperNode> = node_ids
        .iter()
        .map(|&id| {
            // Publication year: first appearance as citing, else first
            // appearance as cited, else unknown.
            let publish_year = first_citing
                .get(id)
                .map(|r| PublishYear::Known(r.citing_year))
                .or_else(|| first_cited.get(id).map(|r| PublishYear::Known(r.cited_year)))
                .unwrap_or(PublishYear::Unknown);

            PaperNode {
                id: id.to_string(),
                name: format!("Paper_{id}"),
                publish_year,
                citation_count: cited_counts.get(id).copied().unwrap_or(0),
                institution: INSTITUTION_LABEL.to_string(),
            }
        })
        .collect();

    // One edge per distinct (cited, citing) pair, in sorted key order.
    let mut pair_counts: BTreeMap<(&str, &str), i64> = BTreeMap::new();
    for record in records {
        *pair_counts
            .entry((record.cited.as_str(), record.citing.as_str()))
            .or_insert(0) += 1;
    }

    let mut links = Vec::with_capacity(pair_counts.len());
    for ((cited, citing), value) in pair_counts {
        // Both endpoints exist by construction; the guard stays explicit.
        if !seen.contains(cited) || !seen.contains(citing) {
            continue;
        }
        if let (Some(citing_record), Some(cited_record)) =
            (first_citing.get(citing), first_cited.get(cited))
        {
            let citing_year = citing_record.citing_year;
            let cited_year = cited_record.cited_year;
            links.push(CitationLink {
                source: cited.to_string(),
                target: citing.to_string(),
                value,
                citing_year,
                cited_year,
                year_diff: citing_year - cited_year,
            });
        }
    }

    NetworkGraph { nodes, links }
}

fn enhance(
    graph: NetworkGraph<PaperNode, CitationLink>,
) -> NetworkGraph<EnhancedPaperNode, CitationLink> {
    let nodes = graph
        .nodes
        .into_iter()
        .map(|node| EnhancedPaperNode {
            impact_score: node.citation_count as f64 * 0.8 + 2.0,
            topic: TOPIC_LABEL.to_string(),
            id: node.id,
            name: node.name,
            publish_year: node.publish_year,
            citation_count: node.citation_count,
            institution: node.institution,
        })
        .collect();

    NetworkGraph {
        nodes,
        links: graph.links,
    }
}
