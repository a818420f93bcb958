//! Query engine implementation
//!
//! Runs one lookup against one connection:
//! - the main join for qualifying target edges
//! - on zero rows, an existence check on the gene name
//!
//! The engine owns its repository and is consumed by `lookup`, so the
//! connection is released when the lookup returns, on every path.

use crate::Result;
use crate::request::LookupRequest;
use crate::storage::TargetRepository;
use crate::target::TargetHit;

/// What a lookup found. Query failures are the `Err` side of `Result`.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// One or more qualifying edges, ascending by score
    Matches(Vec<TargetHit>),
    /// The gene exists but no edge is at or below the threshold
    NoMatches,
    /// The gene name is not in the database
    GeneMissing,
}

impl LookupOutcome {
    pub fn hit_count(&self) -> usize {
        match self {
            LookupOutcome::Matches(hits) => hits.len(),
            _ => 0,
        }
    }
}

/// Query engine over a single scoped connection
pub struct QueryEngine<R: TargetRepository> {
    repo: R,
}

impl<R: TargetRepository> QueryEngine<R> {
    /// Create a new query engine that takes ownership of the connection
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up the miRNAs targeting `request.gene_name` at or below
    /// `request.max_score`.
    pub fn lookup(self, request: &LookupRequest) -> Result<LookupOutcome> {
        let threshold = request.threshold()?;

        tracing::debug!("Querying targets of {} (score <= {})", request.gene_name, threshold);
        let hits = self.repo.find_targets(&request.gene_name, threshold)?;
        debug_assert!(hits.iter().all(|hit| hit.within(threshold)));
        if !hits.is_empty() {
            return Ok(LookupOutcome::Matches(hits));
        }

        tracing::debug!("No targets for {}, checking gene table", request.gene_name);
        if self.repo.gene_exists(&request.gene_name)? {
            Ok(LookupOutcome::NoMatches)
        } else {
            Ok(LookupOutcome::GeneMissing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use rusqlite::Connection;
    use crate::Error;
    use crate::storage::{SqliteStore, fixtures};

    fn seeded_engine() -> QueryEngine<SqliteStore> {
        let conn = Connection::open_in_memory().unwrap();
        fixtures::seed(&conn).unwrap();
        QueryEngine::new(SqliteStore::from_connection(conn))
    }

    /// Repository where one of the two queries fails; records whether it
    /// was dropped
    struct FailingRepo {
        fail_existence_check: bool,
        closed: Rc<Cell<bool>>,
        existence_checked: Rc<Cell<bool>>,
    }

    impl FailingRepo {
        fn new(fail_existence_check: bool) -> (Self, Rc<Cell<bool>>, Rc<Cell<bool>>) {
            let closed = Rc::new(Cell::new(false));
            let existence_checked = Rc::new(Cell::new(false));
            let repo = Self {
                fail_existence_check,
                closed: closed.clone(),
                existence_checked: existence_checked.clone(),
            };
            (repo, closed, existence_checked)
        }
    }

    impl TargetRepository for FailingRepo {
        fn find_targets(&self, _gene_name: &str, _max_score: f64) -> Result<Vec<TargetHit>> {
            if self.fail_existence_check {
                Ok(Vec::new())
            } else {
                Err(Error::Storage(rusqlite::Error::InvalidQuery))
            }
        }

        fn gene_exists(&self, _gene_name: &str) -> Result<bool> {
            self.existence_checked.set(true);
            if self.fail_existence_check {
                Err(Error::Storage(rusqlite::Error::InvalidQuery))
            } else {
                Ok(true)
            }
        }
    }

    impl Drop for FailingRepo {
        fn drop(&mut self) {
            self.closed.set(true);
        }
    }

    #[test]
    fn test_matches_are_exactly_the_qualifying_edges() {
        let outcome = seeded_engine()
            .lookup(&LookupRequest::new("A1CF", "-0.3"))
            .unwrap();

        assert_eq!(
            outcome,
            LookupOutcome::Matches(vec![
                TargetHit::new(11, "hsa-let-7a-5p", -0.6),
                TargetHit::new(12, "hsa-miR-155-5p", -0.35),
            ])
        );
        assert_eq!(outcome.hit_count(), 2);
    }

    #[test]
    fn test_existing_gene_without_qualifying_edges() {
        // TP53 has a single edge at -0.05
        let outcome = seeded_engine().lookup(&LookupRequest::new("TP53", "-0.1")).unwrap();
        assert_eq!(outcome, LookupOutcome::NoMatches);

        // BRCA2 has no edges at all
        let outcome = seeded_engine().lookup(&LookupRequest::new("BRCA2", "-0.7")).unwrap();
        assert_eq!(outcome, LookupOutcome::NoMatches);
    }

    #[test]
    fn test_missing_gene_regardless_of_threshold() {
        for score in ["-0.1", "-0.4", "-0.7", "5"] {
            let outcome = seeded_engine().lookup(&LookupRequest::new("NOPE1", score)).unwrap();
            assert_eq!(outcome, LookupOutcome::GeneMissing);
        }
    }

    #[test]
    fn test_non_numeric_threshold_is_rejected() {
        let err = seeded_engine()
            .lookup(&LookupRequest::new("A1CF", "-0.x"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidScore(_)));
    }

    #[test]
    fn test_query_failure_releases_connection() {
        let (repo, closed, existence_checked) = FailingRepo::new(false);

        let result = QueryEngine::new(repo).lookup(&LookupRequest::new("A1CF", "-0.3"));

        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(!existence_checked.get());
        assert!(closed.get());
    }

    #[test]
    fn test_existence_check_failure_releases_connection() {
        let (repo, closed, existence_checked) = FailingRepo::new(true);

        let result = QueryEngine::new(repo).lookup(&LookupRequest::new("A1CF", "-0.3"));

        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(existence_checked.get());
        assert!(closed.get());
    }

    #[test]
    fn test_missing_tables_surface_as_storage_error() {
        let engine = QueryEngine::new(SqliteStore::open_in_memory().unwrap());
        let result = engine.lookup(&LookupRequest::new("A1CF", "-0.3"));
        assert!(matches!(result, Err(Error::Storage(_))));
    }
}
