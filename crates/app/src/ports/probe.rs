//! Network probe port — querying the OS for an interface's IPv4 address.

use std::future::Future;
use std::net::Ipv4Addr;

use roverhome_domain::error::RoverHomeError;
use roverhome_domain::interface::InterfaceName;

/// Queries the operating system for the IPv4 address of a named interface.
pub trait NetworkProbe {
    /// Return the first IPv4 address assigned to `interface`.
    ///
    /// `Ok(None)` means the interface does not exist or carries no IPv4
    /// address — absence is not a failure.
    fn ipv4_address(
        &self,
        interface: &InterfaceName,
    ) -> impl Future<Output = Result<Option<Ipv4Addr>, RoverHomeError>> + Send;
}

impl<T: NetworkProbe + Send + Sync> NetworkProbe for std::sync::Arc<T> {
    fn ipv4_address(
        &self,
        interface: &InterfaceName,
    ) -> impl Future<Output = Result<Option<Ipv4Addr>, RoverHomeError>> + Send {
        (**self).ipv4_address(interface)
    }
}
