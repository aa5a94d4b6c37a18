//! Hostname port — reading the display hostname.

use std::future::Future;

use roverhome_domain::error::RoverHomeError;

/// Supplies the human-readable hostname shown on the page.
///
/// Distinct from OS-level hostname resolution — the kit keeps the display
/// name in a plain file that instructors edit.
pub trait HostnameSource {
    /// Return the display hostname verbatim.
    fn display_hostname(&self) -> impl Future<Output = Result<String, RoverHomeError>> + Send;
}

impl<T: HostnameSource + Send + Sync> HostnameSource for std::sync::Arc<T> {
    fn display_hostname(&self) -> impl Future<Output = Result<String, RoverHomeError>> + Send {
        (**self).display_hostname()
    }
}
