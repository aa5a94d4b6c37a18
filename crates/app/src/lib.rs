//! # roverhome-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `NetworkProbe` — query the OS for an interface's IPv4 address
//!   - `HostnameSource` — read the display hostname
//! - Provide the **`StatusService`** use-case: assemble a
//!   [`NetworkStatus`](roverhome_domain::status::NetworkStatus) snapshot
//!   best-effort, degrading probe failures to absent fields
//!
//! ## Dependency rule
//! Depends on `roverhome-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
