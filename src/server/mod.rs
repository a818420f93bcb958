use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use crate::config::ServeSettings;
use crate::render::Renderer;

pub mod routes;

/// Server state, fixed at startup and shared read-only by every request
pub struct AppState {
    pub database_path: PathBuf,
    pub renderer: Renderer,
    pub title: String,
    /// Mount path of the search page, also used as the form action
    pub path: String,
}

impl AppState {
    pub fn new(settings: &ServeSettings) -> crate::Result<Self> {
        Ok(Self {
            database_path: settings.database.clone(),
            renderer: Renderer::new()?,
            title: settings.title.clone(),
            path: settings.path.clone(),
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(&state.path, get(routes::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(settings: ServeSettings) -> anyhow::Result<()> {
    if !settings.database.exists() {
        tracing::warn!(
            "Database {} does not exist; lookups will report an error",
            settings.database.display()
        );
    }

    let state = Arc::new(AppState::new(&settings)?);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Starting server on {}", addr);
    println!("🌍 Server running at http://{}{}", addr, settings.path);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
