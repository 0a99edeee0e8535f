//! HTTP endpoint serving the dashboard.
//!
//! A single `GET /` route. The dashboard is computed once before the server
//! starts and shared read-only between requests, so handlers never lock.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use log::{debug, error, info};

use crate::output::{render_dashboard, Dashboard, DashboardView};
use crate::utils::error::{RenderError, ServeError};

/// Turns the view-model into a page
pub type RenderFn = fn(&DashboardView) -> Result<String, RenderError>;

/// Shared server state.
struct AppState {
    dashboard: Arc<Dashboard>,
    render: RenderFn,
}

/// Render the page for one request
///
/// Render failures are logged and answered with a 500; the server keeps
/// serving.
async fn handle_index(State(state): State<Arc<AppState>>) -> Response {
    debug!("Rendering dashboard...");
    let view = DashboardView::from_dashboard(&state.dashboard);

    match (state.render)(&view) {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            error!("Error rendering dashboard: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render dashboard").into_response()
        }
    }
}

/// Build the axum router.
pub fn build_router(dashboard: Arc<Dashboard>) -> Router {
    build_router_with(dashboard, render_dashboard)
}

/// Build the axum router with a custom page renderer.
pub fn build_router_with(dashboard: Arc<Dashboard>, render: RenderFn) -> Router {
    let state = Arc::new(AppState { dashboard, render });

    Router::new()
        .route("/", get(handle_index))
        .with_state(state)
}

/// Serve the dashboard until the process is stopped.
///
/// # Errors
/// * `ServeError::Bind` - the listen address is invalid or in use
/// * `ServeError::Io` - the accept loop failed
pub async fn run_server(dashboard: Dashboard, host: &str, port: u16) -> Result<(), ServeError> {
    let app = build_router(Arc::new(dashboard));
    let addr = format!("{host}:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Server started. Go to http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
