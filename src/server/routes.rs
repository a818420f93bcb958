use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Html,
};
use crate::server::AppState;
use crate::query::{LookupOutcome, QueryEngine};
use crate::render::{PageView, ResultPanel};
use crate::request::{LookupRequest, SearchParams};
use crate::storage::SqliteStore;
use crate::Error;
use std::sync::Arc;

/// GET <mount path> - the search form, plus results when both fields are set
///
/// A query string that does not deserialize is treated like no submission.
pub async fn search(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Html<String>, (StatusCode, String)> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable query string: {}", rejection);
            SearchParams::default()
        }
    };

    let panel = match LookupRequest::from_params(params) {
        Some(request) => lookup_panel(&state, request).await,
        None => ResultPanel::Empty,
    };

    let view = PageView::new(state.title.as_str(), state.path.as_str(), panel);
    state.renderer.render_page(&view).map(Html).map_err(|e| {
        tracing::error!("Failed to render page: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to render page: {}", e))
    })
}

/// Run one lookup on its own connection, off the async workers
async fn lookup_panel(state: &AppState, request: LookupRequest) -> ResultPanel {
    let database = state.database_path.clone();
    let task_request = request.clone();

    let result = tokio::task::spawn_blocking(move || -> crate::Result<LookupOutcome> {
        let store = SqliteStore::open(&database)?;
        QueryEngine::new(store).lookup(&task_request)
    })
    .await
    .unwrap_or_else(|e| Err(Error::Task(e.to_string())));

    match &result {
        Ok(outcome @ LookupOutcome::Matches(_)) => tracing::info!(
            "{} miRNAs target {} at <= {}",
            outcome.hit_count(),
            request.gene_name,
            request.max_score
        ),
        Ok(LookupOutcome::NoMatches) => {
            tracing::info!("No miRNAs target {} at <= {}", request.gene_name, request.max_score)
        }
        Ok(LookupOutcome::GeneMissing) => tracing::info!("Unknown gene {}", request.gene_name),
        Err(e) => tracing::warn!("Lookup for {} failed: {}", request.gene_name, e),
    }

    ResultPanel::from_lookup(&request, result)
}
