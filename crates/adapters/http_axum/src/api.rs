//! JSON API handlers.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;

use roverhome_app::ports::{HostnameSource, NetworkProbe};
use roverhome_domain::status::NetworkStatus;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<P, H>() -> Router<AppState<P, H>>
where
    P: NetworkProbe + Send + Sync + 'static,
    H: HostnameSource + Send + Sync + 'static,
{
    Router::new().route("/status", get(status::<P, H>))
}

/// `GET /api/status` — the current [`NetworkStatus`] snapshot as JSON.
///
/// Collection is best-effort, so this endpoint never fails; failed
/// probes surface as `null` fields.
pub async fn status<P, H>(State(state): State<AppState<P, H>>) -> Json<NetworkStatus>
where
    P: NetworkProbe + Send + Sync + 'static,
    H: HostnameSource + Send + Sync + 'static,
{
    Json(state.status_service.current_status().await)
}
