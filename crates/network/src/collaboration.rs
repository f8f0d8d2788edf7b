//! Collaboration network construction
//!
//! Derives author nodes and co-authorship edges from the affiliation
//! table. A sampling cap bounds the pairwise combination step on large
//! tables.

use crate::errors::GraphError;
use crate::position;
use crate::types::{AuthorNode, CollaborationLink, NetworkGraph, INSTITUTION_LABEL};
use papergraph_common::tables;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

/// Affiliation table schema
pub const AFFILIATION_COLUMNS: &[&str] =
    &["paperid", "authorid", "institutionid", "author_position"];

/// Records beyond this many distinct paper ids are discarded
const PAPER_SAMPLE_CAP: usize = 1000;

/// Cap on the h-index placeholder
const H_INDEX_CAP: i64 = 15;

// institutionid is required by the schema but never consumed, so the
// row type leaves it unmapped.
#[derive(Debug, Deserialize)]
struct AffiliationRow {
    #[serde(rename = "paperid")]
    paper_id: Option<String>,
    #[serde(rename = "authorid")]
    author_id: Option<String>,
    author_position: Option<String>,
}

/// An affiliation that survived cleaning
#[derive(Debug, Clone)]
struct AffiliationRecord {
    paper_id: String,
    author_id: String,
    position: i32,
}

/// Build the author collaboration network from the table at `path`.
pub fn build(path: &Path) -> Result<NetworkGraph<AuthorNode, CollaborationLink>, GraphError> {
    let rows: Vec<AffiliationRow> = tables::load_table(path, AFFILIATION_COLUMNS)?;
    let rows = apply_sample_cap(rows);
    let records = clean(rows);
    Ok(assemble(&records))
}

/// Keep only records whose paper id is among the first
/// `PAPER_SAMPLE_CAP` distinct ids encountered, in input order.
fn apply_sample_cap(rows: Vec<AffiliationRow>) -> Vec<AffiliationRow> {
    let mut distinct: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for row in &rows {
        if let Some(paper_id) = row.paper_id.as_deref() {
            if seen.insert(paper_id) {
                distinct.push(paper_id);
            }
        }
    }

    if distinct.len() <= PAPER_SAMPLE_CAP {
        return rows;
    }

    let allowed: HashSet<String> = distinct[..PAPER_SAMPLE_CAP]
        .iter()
        .map(|id| id.to_string())
        .collect();
    tracing::debug!(
        distinct = distinct.len(),
        cap = PAPER_SAMPLE_CAP,
        "Sampling cap applied"
    );

    rows.into_iter()
        .filter(|row| {
            row.paper_id
                .as_deref()
                .map(|id| allowed.contains(id))
                .unwrap_or(false)
        })
        .collect()
}

/// Resolve positions and drop rows without a usable position, paper id,
/// or author id.
fn clean(rows: Vec<AffiliationRow>) -> Vec<AffiliationRecord> {
    let total = rows.len();
    let records: Vec<AffiliationRecord> = rows
        .into_iter()
        .filter_map(|row| {
            let position = position::resolve(row.author_position.as_deref())?;
            let paper_id = row.paper_id?;
            let author_id = row.author_id?;
            if paper_id.trim().is_empty() || author_id.trim().is_empty() {
                return None;
            }
            Some(AffiliationRecord {
                paper_id,
                author_id,
                position,
            })
        })
        .collect();

    tracing::debug!(total, retained = records.len(), "Affiliation rows cleaned");
    records
}

#[derive(Default)]
struct AuthorStats<'a> {
    papers: HashSet<&'a str>,
    first_author: HashSet<&'a str>,
    corresponding: HashSet<&'a str>,
}

fn assemble(records: &[AffiliationRecord]) -> NetworkGraph<AuthorNode, CollaborationLink> {
    // Distinct-paper stats per author, in sorted author-id order.
    let mut stats: BTreeMap<&str, AuthorStats> = BTreeMap::new();
    for record in records {
        let entry = stats.entry(record.author_id.as_str()).or_default();
        entry.papers.insert(record.paper_id.as_str());
        if record.position == position::FIRST_AUTHOR {
            entry.first_author.insert(record.paper_id.as_str());
        }
        if record.position == position::CORRESPONDING_AUTHOR {
            entry.corresponding.insert(record.paper_id.as_str());
        }
    }

    let nodes: Vec<AuthorNode> = stats
        .iter()
        .map(|(&id, author)| {
            let papers_published = author.papers.len() as i64;
            AuthorNode {
                id: id.to_string(),
                name: format!("Author_{id}"),
                department: INSTITUTION_LABEL.to_string(),
                papers_published,
                first_author_papers: author.first_author.len() as i64,
                corr_author_papers: author.corresponding.len() as i64,
                h_index: papers_published.min(H_INDEX_CAP),
            }
        })
        .collect();

    // Distinct authors per paper; every paper with at least two authors
    // contributes all C(k, 2) unordered pairs.
    let mut paper_authors: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        paper_authors
            .entry(record.paper_id.as_str())
            .or_default()
            .insert(record.author_id.as_str());
    }

    let mut pair_counts: BTreeMap<(&str, &str), i64> = BTreeMap::new();
    for authors in paper_authors.values() {
        if authors.len() < 2 {
            continue;
        }
        let authors: Vec<&str> = authors.iter().copied().collect();
        for i in 0..authors.len() {
            for j in (i + 1)..authors.len() {
                *pair_counts.entry((authors[i], authors[j])).or_insert(0) += 1;
            }
        }
    }

    let mut links = Vec::with_capacity(pair_counts.len());
    for ((source, target), value) in pair_counts {
        // Pair members are always aggregated authors; the guard stays
        // explicit.
        if !stats.contains_key(source) || !stats.contains_key(target) {
            continue;
        }
        links.push(CollaborationLink {
            source: source.to_string(),
            target: target.to_string(),
            value,
            co_authored_papers: value,
        });
    }

    NetworkGraph { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn row(paper: &str, author: &str, position: &str) -> AffiliationRow {
        AffiliationRow {
            paper_id: Some(paper.to_string()),
            author_id: Some(author.to_string()),
            author_position: Some(position.to_string()),
        }
    }

    fn record(paper: &str, author: &str, position: i32) -> AffiliationRecord {
        AffiliationRecord {
            paper_id: paper.to_string(),
            author_id: author.to_string(),
            position,
        }
    }

    fn write_table(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "papergraph-collab-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_three_authors_yield_three_ordered_pairs() {
        let records = vec![
            record("W1", "C", 1),
            record("W1", "A", 2),
            record("W1", "B", -1),
        ];
        let graph = assemble(&records);

        assert_eq!(graph.links.len(), 3);
        let pairs: Vec<(&str, &str)> = graph
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C")]);
        for link in &graph.links {
            assert!(link.source < link.target);
            assert_eq!(link.value, 1);
            assert_eq!(link.co_authored_papers, 1);
        }
    }

    #[test]
    fn test_pair_value_counts_distinct_shared_papers() {
        let records = vec![
            record("W1", "A", 1),
            record("W1", "B", 2),
            // A appears twice on W2; the pair still counts W2 once
            record("W2", "A", 1),
            record("W2", "A", 2),
            record("W2", "B", -1),
            record("W3", "A", 1),
        ];
        let graph = assemble(&records);

        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.links[0].value, 2);

        let a = graph.nodes.iter().find(|n| n.id == "A").unwrap();
        assert_eq!(a.papers_published, 3);
        assert_eq!(a.first_author_papers, 3);
    }

    #[test]
    fn test_author_stats_and_h_index_cap() {
        let mut records = Vec::new();
        for i in 0..20 {
            records.push(record(&format!("W{i}"), "A", 1));
        }
        records.push(record("W0", "B", -1));
        let graph = assemble(&records);

        let a = graph.nodes.iter().find(|n| n.id == "A").unwrap();
        assert_eq!(a.papers_published, 20);
        assert_eq!(a.h_index, 15);
        assert_eq!(a.corr_author_papers, 0);

        let b = graph.nodes.iter().find(|n| n.id == "B").unwrap();
        assert_eq!(b.papers_published, 1);
        assert_eq!(b.h_index, 1);
        assert_eq!(b.corr_author_papers, 1);
        assert_eq!(b.first_author_papers, 0);
    }

    #[test]
    fn test_single_author_papers_yield_no_links() {
        let records = vec![record("W1", "A", 1), record("W2", "B", 1)];
        let graph = assemble(&records);

        assert_eq!(graph.nodes.len(), 2);
        assert!(graph.links.is_empty());
    }

    #[test]
    fn test_sample_cap_keeps_first_thousand_distinct_papers() {
        let mut rows = Vec::new();
        for i in 0..1500 {
            rows.push(row(&format!("W{i:04}"), "A", "1"));
        }
        // A second record for an early paper must survive the cap
        rows.push(row("W0007", "B", "2"));

        let kept = apply_sample_cap(rows);
        let papers: HashSet<&str> = kept.iter().filter_map(|r| r.paper_id.as_deref()).collect();

        assert_eq!(papers.len(), 1000);
        assert!(papers.contains("W0000"));
        assert!(papers.contains("W0999"));
        assert!(!papers.contains("W1000"));
        assert!(!papers.contains("W1499"));
        assert_eq!(kept.len(), 1001);
    }

    #[test]
    fn test_sample_cap_is_inert_under_threshold() {
        let rows: Vec<AffiliationRow> = (0..10).map(|i| row(&format!("W{i}"), "A", "1")).collect();
        assert_eq!(apply_sample_cap(rows).len(), 10);
    }

    #[test]
    fn test_clean_drops_unresolvable_and_blank_rows() {
        let rows = vec![
            row("W1", "A", "1"),
            row("W1", "B", "unknown"),
            row("  ", "C", "2"),
            row("W1", " ", "2"),
            AffiliationRow {
                paper_id: Some("W1".into()),
                author_id: Some("D".into()),
                author_position: None,
            },
        ];
        let records = clean(rows);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author_id, "A");
    }

    #[test]
    fn test_build_from_table() {
        let path = write_table(
            "affils.csv",
            "paperid,authorid,institutionid,author_position\n\
             W1,A,I1,1\n\
             W1,B,I1,middle\n\
             W1,C,I2,last\n\
             W2,A,I1,1\n\
             W2,B,I1,corresponding\n",
        );
        let graph = build(&path).unwrap();

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.links.len(), 3);

        let ab = graph
            .links
            .iter()
            .find(|l| l.source == "A" && l.target == "B")
            .unwrap();
        assert_eq!(ab.value, 2);

        let b = graph.nodes.iter().find(|n| n.id == "B").unwrap();
        assert_eq!(b.corr_author_papers, 1);
    }

    #[test]
    fn test_build_missing_table_reports_path() {
        let path = PathBuf::from("/nonexistent/affils.csv");
        let err = build(&path).unwrap_err();

        assert!(matches!(err, GraphError::SourceNotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/affils.csv"));
    }
}
