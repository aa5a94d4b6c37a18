//! Network status snapshot — the request-scoped facts the page shows.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// Point-in-time network facts for this host.
///
/// Every field is best-effort: an absent address means the interface had
/// no IPv4 address (or the probe failed), an empty hostname means the
/// backing file was missing or empty. The snapshot is recomputed for
/// every request and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatus {
    /// Display hostname, verbatim file contents.
    pub hostname: String,
    /// IPv4 address of the wired interface, if any.
    pub ethernet: Option<Ipv4Addr>,
    /// IPv4 address of the wireless interface, if any.
    pub wifi: Option<Ipv4Addr>,
}

impl NetworkStatus {
    /// Whether any interface currently has an address.
    #[must_use]
    pub fn has_addresses(&self) -> bool {
        self.ethernet.is_some() || self.wifi.is_some()
    }
}
