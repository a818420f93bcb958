//! Database schema definitions
//!
//! The database is owned by whoever loads the target predictions; the
//! server only reads it. These statements document the expected layout and
//! are used to verify it and to build test databases.

/// SQL to create the gene table
pub const CREATE_GENE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS gene (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
)
"#;

/// SQL to create the mirna table
pub const CREATE_MIRNA_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS mirna (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
)
"#;

/// SQL to create the target table
/// One row per (miRNA, gene) prediction; score may be NULL
pub const CREATE_TARGET_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS target (
    mirna_id INTEGER NOT NULL REFERENCES mirna(id),
    gene_id INTEGER NOT NULL REFERENCES gene(id),
    score REAL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_target_gene ON target(gene_id)",
    "CREATE INDEX IF NOT EXISTS idx_target_mirna ON target(mirna_id)",
];

/// Tables a lookup reads from
pub const REQUIRED_TABLES: &[&str] = &["gene", "mirna", "target"];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_GENE_TABLE, CREATE_MIRNA_TABLE, CREATE_TARGET_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
