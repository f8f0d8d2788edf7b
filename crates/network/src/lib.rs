//! PaperGraph Network Builders
//!
//! The core transformation pipeline: each builder loads its source table
//! from disk, cleans the rows, derives nodes, aggregates edges, and folds
//! the result into the payload shape the transport layer returns. Every
//! request recomputes from the table; no graph state is persisted or
//! cached.

pub mod citation;
pub mod collaboration;
pub mod errors;
pub mod payload;
pub mod position;
pub mod synthetic;
pub mod types;

// Re-export the operations the transport layer consumes
pub use errors::GraphError;
pub use payload::{citation_network, collaboration_network, enhanced_citation_network};
