//! Target hits - one row of the miRNA → gene join
//!
//! Scores follow the usual targeting convention: more negative means a
//! stronger predicted interaction, so result sets are ordered ascending.

use serde::{Deserialize, Serialize};

/// A miRNA that targets the queried gene, with its targeting score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetHit {
    /// `mirna.id`
    pub mirna_id: i64,
    /// `mirna.name`
    pub mirna_name: String,
    /// `target.score` (never null here; null scores are filtered out in SQL)
    pub score: f64,
}

impl TargetHit {
    pub fn new(mirna_id: i64, mirna_name: impl Into<String>, score: f64) -> Self {
        Self {
            mirna_id,
            mirna_name: mirna_name.into(),
            score,
        }
    }

    /// Whether this hit satisfies a `score <= threshold` bound
    pub fn within(&self, threshold: f64) -> bool {
        self.score <= threshold
    }
}

impl std::fmt::Display for TargetHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) score={}", self.mirna_name, self.mirna_id, self.score)
    }
}
