use crate::airtable::AirtableClient;
use crate::config::Config;
use crate::error::DashboardError;
use crate::metrics;
use crate::render::Renderer;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use log::{debug, info};
use serde_json::json;
use std::sync::Arc;

pub struct AppState {
    airtable: AirtableClient,
    renderer: Renderer,
}

impl AppState {
    pub fn new(cfg: &Config) -> Result<Self> {
        let airtable = AirtableClient::new(cfg).context("failed to build Airtable client")?;
        let renderer = Renderer::new(cfg.assets.clone());
        Ok(Self { airtable, renderer })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state)
}

/// Fetch the latest record, derive metrics, render the panel. Stateless;
/// every refresh of the e-ink display lands here.
async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, DashboardError> {
    let record = state.airtable.latest_record().await?;
    let formatted = metrics::format(&record);
    debug!(
        "[dashboard] rendered record updated at {:?}",
        formatted.updated
    );
    Ok(Html(state.renderer.render(&formatted)))
}

async fn healthz_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn serve(cfg: &Config) -> Result<()> {
    let state = Arc::new(AppState::new(cfg)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.listen)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen))?;
    info!(
        "[server] serving dashboard for {}/{} on http://{}",
        cfg.base_id, cfg.table, cfg.listen
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("[server] shutdown signal received");
    }
}
