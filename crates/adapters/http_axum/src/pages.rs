//! Server-side rendered HTML pages (no JavaScript).

pub mod home;

use axum::Router;
use axum::routing::get;

use roverhome_app::ports::{HostnameSource, NetworkProbe};

use crate::state::AppState;

/// Build the page sub-router.
pub fn routes<P, H>() -> Router<AppState<P, H>>
where
    P: NetworkProbe + Send + Sync + 'static,
    H: HostnameSource + Send + Sync + 'static,
{
    Router::new().route("/", get(home::index::<P, H>))
}
