//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use serde::Serialize;
use crate::Result;
use crate::target::TargetHit;
use super::{TargetRepository, schema};

const FIND_TARGETS_SQL: &str = r#"
SELECT mirna.id, mirna.name, target.score
FROM mirna
JOIN target ON mirna.id = target.mirna_id
JOIN gene ON target.gene_id = gene.id
WHERE gene.name = ?1
  AND target.score IS NOT NULL
  AND target.score <= ?2
ORDER BY target.score ASC, mirna.id ASC
"#;

/// Read-only SQLite connection to the target database
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open an existing database file read-only
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        tracing::debug!("Opened {}", path.display());
        Ok(Self { conn })
    }

    /// Open an empty in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Wrap an already open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    // ========== Lookup Operations ==========

    /// miRNAs targeting a gene at or below a score, strongest first
    pub fn find_targets(&self, gene_name: &str, max_score: f64) -> Result<Vec<TargetHit>> {
        let mut stmt = self.conn.prepare(FIND_TARGETS_SQL)?;

        let hits = stmt
            .query_map(params![gene_name, max_score], |row| self.row_to_hit(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(hits)
    }

    /// Check whether a gene name exists at all
    pub fn gene_exists(&self, gene_name: &str) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM gene WHERE name = ?1 LIMIT 1", [gene_name], |row| row.get(0))
            .optional()?;
        Ok(found.is_some())
    }

    /// Helper to convert a row to a TargetHit
    fn row_to_hit(&self, row: &rusqlite::Row) -> rusqlite::Result<TargetHit> {
        Ok(TargetHit {
            mirna_id: row.get(0)?,
            mirna_name: row.get(1)?,
            score: row.get(2)?,
        })
    }

    // ========== Health Operations ==========

    /// Expected tables that are absent from the database
    pub fn missing_tables(&self) -> Result<Vec<&'static str>> {
        let mut missing = Vec::new();
        for table in schema::REQUIRED_TABLES {
            let found: Option<String> = self
                .conn
                .query_row(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .optional()?;
            if found.is_none() {
                missing.push(*table);
            }
        }
        Ok(missing)
    }

    fn count(&self, sql: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            genes: self.count("SELECT COUNT(*) FROM gene")?,
            mirnas: self.count("SELECT COUNT(*) FROM mirna")?,
            targets: self.count("SELECT COUNT(*) FROM target")?,
            scored_targets: self.count("SELECT COUNT(*) FROM target WHERE score IS NOT NULL")?,
        })
    }
}

impl TargetRepository for SqliteStore {
    fn find_targets(&self, gene_name: &str, max_score: f64) -> Result<Vec<TargetHit>> {
        SqliteStore::find_targets(self, gene_name, max_score)
    }

    fn gene_exists(&self, gene_name: &str) -> Result<bool> {
        SqliteStore::gene_exists(self, gene_name)
    }
}

/// Database statistics
#[derive(Debug, Clone, Serialize)]
pub struct DbStats {
    pub genes: usize,
    pub mirnas: usize,
    pub targets: usize,
    pub scored_targets: usize,
}
