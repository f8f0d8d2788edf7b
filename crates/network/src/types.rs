//! Node, link, and graph types shared by the builders

use serde::{Serialize, Serializer};

/// Institutional label attached to every paper and author node
pub const INSTITUTION_LABEL: &str = "Yeshiva University, Computer Science Department";

/// Topic label attached by the enhanced citation builder
pub const TOPIC_LABEL: &str = "Computer Science";

/// A node/link graph ready for rendering
#[derive(Debug, Serialize)]
pub struct NetworkGraph<N, E> {
    pub nodes: Vec<N>,
    pub links: Vec<E>,
}

/// Publication year of a paper, or "Unknown" when no retained record
/// names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishYear {
    Known(i64),
    Unknown,
}

impl Serialize for PublishYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PublishYear::Known(year) => serializer.serialize_i64(*year),
            PublishYear::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaperNode {
    pub id: String,
    pub name: String,
    pub publish_year: PublishYear,
    pub citation_count: i64,
    pub institution: String,
}

/// Paper node with the derived impact metric attached
#[derive(Debug, Clone, Serialize)]
pub struct EnhancedPaperNode {
    pub id: String,
    pub name: String,
    pub publish_year: PublishYear,
    pub citation_count: i64,
    pub institution: String,
    pub topic: String,
    pub impact_score: f64,
}

/// Aggregated citation relationship, directed cited -> citing
#[derive(Debug, Clone, Serialize)]
pub struct CitationLink {
    pub source: String,
    pub target: String,
    pub value: i64,
    pub citing_year: i64,
    pub cited_year: i64,
    pub year_diff: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorNode {
    pub id: String,
    pub name: String,
    pub department: String,
    pub papers_published: i64,
    pub first_author_papers: i64,
    pub corr_author_papers: i64,
    pub h_index: i64,
}

/// Aggregated co-authorship relationship, source < target
#[derive(Debug, Clone, Serialize)]
pub struct CollaborationLink {
    pub source: String,
    pub target: String,
    pub value: i64,
    pub co_authored_papers: i64,
}
