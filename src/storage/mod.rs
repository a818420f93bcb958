//! Storage Layer - read-only access to the target database
//!
//! The system of record is a SQLite file with tables:
//! - gene(id, name)
//! - mirna(id, name)
//! - target(mirna_id, gene_id, score)

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStore, DbStats};

use crate::Result;
use crate::target::TargetHit;

/// The two queries a lookup needs.
///
/// A repository value stands for one open connection; dropping it closes
/// the connection.
pub trait TargetRepository {
    /// miRNAs targeting `gene_name` with a non-null score `<= max_score`,
    /// ascending by score.
    fn find_targets(&self, gene_name: &str, max_score: f64) -> Result<Vec<TargetHit>>;

    /// Whether `gene_name` is present in the gene table.
    fn gene_exists(&self, gene_name: &str) -> Result<bool>;
}
