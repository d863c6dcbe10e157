//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server hosts the admin client as a single-page app: `/pkg` serves the
//! compiled bundle and every other unmatched path falls back to `index.html`,
//! which carries the `#app` anchor the client mounts into. Health checks are
//! the only dynamic routes.


use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let site_root = state.site_root.as_ref().clone();
    let spa = ServeDir::new(&site_root).fallback(ServeFile::new(site_root.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(spa)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Ready once the database answers.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
