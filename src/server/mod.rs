//! Web server for uploading and analyzing news datasets.
//!
//! Serves an upload page, the `/analyze_dataset` endpoint and a JSON report
//! over the most recently saved results.

mod assets;
mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::services::{AnalysisContext, AnalysisService};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub service: AnalysisService,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: &Settings, context: Arc<AnalysisContext>) -> Self {
        Self {
            service: AnalysisService::new(context),
            settings: Arc::new(settings.clone()),
        }
    }
}

/// Start the web server.
pub async fn serve(
    settings: &Settings,
    context: Arc<AnalysisContext>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    settings.ensure_directories()?;
    let state = AppState::new(settings, context);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
