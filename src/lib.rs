//! # mirtarget - miRNA gene target lookup
//!
//! A small web form over a relational database of miRNA → gene targeting
//! scores. Given a gene name and a maximum score, it lists the miRNAs that
//! target the gene at or below that score, strongest (most negative) first.
//!
//! mirtarget provides:
//! - A read-only SQLite store over the `gene`, `mirna` and `target` tables
//! - A query engine that distinguishes matches, zero matches and unknown genes
//! - An HTML renderer driven by an enumerated result panel
//! - An axum server wiring the three together per request

pub mod target;
pub mod request;
pub mod storage;
pub mod query;
pub mod render;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use target::TargetHit;
pub use request::{LookupRequest, SearchParams};
pub use storage::{SqliteStore, TargetRepository};
pub use query::{LookupOutcome, QueryEngine};
pub use render::{Renderer, ResultPanel};

/// Result type alias for mirtarget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mirtarget operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Invalid score threshold: {0:?}")]
    InvalidScore(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Lookup task failed: {0}")]
    Task(String),
}
