//! Request reading - the two form fields of a lookup

use serde::Deserialize;
use crate::{Error, Result};

/// Raw query-string parameters of the search form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub gene_name: Option<String>,
    pub max_score: Option<String>,
}

/// A submitted lookup: both fields present and non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub gene_name: String,
    pub max_score: String,
}

impl LookupRequest {
    pub fn new(gene_name: impl Into<String>, max_score: impl Into<String>) -> Self {
        Self {
            gene_name: gene_name.into(),
            max_score: max_score.into(),
        }
    }

    /// Build a request from form parameters.
    ///
    /// Returns `None` when either field is missing or empty, which means the
    /// form has not been submitted yet. The gene name is passed through as
    /// typed; `max_score` is only checked later, when it is bound.
    pub fn from_params(params: SearchParams) -> Option<Self> {
        let gene_name = params.gene_name.filter(|s| !s.is_empty())?;
        let max_score = params.max_score.filter(|s| !s.is_empty())?;
        Some(Self { gene_name, max_score })
    }

    /// Parse `max_score` into the numeric threshold bound into the query.
    ///
    /// Any finite number is accepted, not just the values offered by the form.
    pub fn threshold(&self) -> Result<f64> {
        self.max_score
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::InvalidScore(self.max_score.clone()))
    }
}
