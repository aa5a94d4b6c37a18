//! Shared application state for axum handlers.

use std::sync::Arc;

use roverhome_app::ports::{HostnameSource, NetworkProbe};
use roverhome_app::services::status_service::StatusService;

use crate::config::PageConfig;

/// Application state shared across all axum handlers.
///
/// Generic over the probe and hostname-source types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<P, H> {
    /// Status collection service.
    pub status_service: Arc<StatusService<P, H>>,
    /// Page rendering settings.
    pub page: Arc<PageConfig>,
}

impl<P, H> Clone for AppState<P, H> {
    fn clone(&self) -> Self {
        Self {
            status_service: Arc::clone(&self.status_service),
            page: Arc::clone(&self.page),
        }
    }
}

impl<P, H> AppState<P, H>
where
    P: NetworkProbe + Send + Sync + 'static,
    H: HostnameSource + Send + Sync + 'static,
{
    /// Create a new application state from the service and page settings.
    pub fn new(status_service: StatusService<P, H>, page: PageConfig) -> Self {
        Self {
            status_service: Arc::new(status_service),
            page: Arc::new(page),
        }
    }
}
