//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use roverhome_app::ports::{HostnameSource, NetworkProbe};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the status page at `/`, the JSON API under `/api`, static
/// assets under `/assets`, and a health check. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<P, H>(state: AppState<P, H>) -> Router
where
    P: NetworkProbe + Send + Sync + 'static,
    H: HostnameSource + Send + Sync + 'static,
{
    let assets = ServeDir::new(&state.page.assets_dir);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::pages::routes())
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
