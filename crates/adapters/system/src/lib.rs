//! # roverhome-adapter-system
//!
//! Driven adapter that collects host facts from the operating system:
//! interface addresses by shelling out to `ip`, and the display hostname
//! from a local file.
//!
//! ## Responsibilities
//! - Implement [`NetworkProbe`](roverhome_app::ports::NetworkProbe) over
//!   `ip -4 -o addr show`
//! - Implement [`HostnameSource`](roverhome_app::ports::HostnameSource)
//!   over a plain file read
//!
//! ## Dependency rule
//! Depends on `roverhome-app` (port traits) and `roverhome-domain` only.

mod hostname;
mod probe;

pub use hostname::FileHostnameSource;
pub use probe::{IpCommandProbe, first_inet_address};
