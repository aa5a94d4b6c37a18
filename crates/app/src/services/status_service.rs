//! Status service — assembles the network facts shown on the page.

use std::net::Ipv4Addr;

use roverhome_domain::interface::{InterfaceKind, InterfaceName};
use roverhome_domain::status::NetworkStatus;

use crate::ports::{HostnameSource, NetworkProbe};

/// Application service that assembles a [`NetworkStatus`] snapshot.
///
/// Collection is best-effort: a failing probe or hostname read is logged
/// at `warn` and degrades to an absent field, never to a request error.
/// Every call re-queries both interfaces and re-reads the hostname file —
/// nothing is cached between requests.
pub struct StatusService<P, H> {
    probe: P,
    hostname: H,
    ethernet: InterfaceName,
    wifi: InterfaceName,
}

impl<P: NetworkProbe, H: HostnameSource> StatusService<P, H> {
    /// Create a new service over the given ports and interface names.
    pub fn new(probe: P, hostname: H, ethernet: InterfaceName, wifi: InterfaceName) -> Self {
        Self {
            probe,
            hostname,
            ethernet,
            wifi,
        }
    }

    /// Collect the current snapshot.
    #[tracing::instrument(skip(self))]
    pub async fn current_status(&self) -> NetworkStatus {
        let ethernet = self
            .probe_interface(InterfaceKind::Ethernet, &self.ethernet)
            .await;
        let wifi = self.probe_interface(InterfaceKind::Wifi, &self.wifi).await;

        let hostname = match self.hostname.display_hostname().await {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(error = %err, "hostname read failed");
                String::new()
            }
        };

        NetworkStatus {
            hostname,
            ethernet,
            wifi,
        }
    }

    async fn probe_interface(
        &self,
        kind: InterfaceKind,
        interface: &InterfaceName,
    ) -> Option<Ipv4Addr> {
        match self.probe.ipv4_address(interface).await {
            Ok(address) => address,
            Err(err) => {
                tracing::warn!(
                    interface = %kind,
                    name = %interface,
                    error = %err,
                    "interface probe failed"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use roverhome_domain::error::{HostnameError, ProbeError, RoverHomeError};

    struct FixedProbe {
        ethernet: Option<Ipv4Addr>,
        wifi: Option<Ipv4Addr>,
    }

    impl NetworkProbe for FixedProbe {
        async fn ipv4_address(
            &self,
            interface: &InterfaceName,
        ) -> Result<Option<Ipv4Addr>, RoverHomeError> {
            Ok(match interface.as_str() {
                "eth0" => self.ethernet,
                _ => self.wifi,
            })
        }
    }

    struct FailingProbe;

    impl NetworkProbe for FailingProbe {
        async fn ipv4_address(
            &self,
            _interface: &InterfaceName,
        ) -> Result<Option<Ipv4Addr>, RoverHomeError> {
            Err(ProbeError::Spawn {
                command: "ip".to_string(),
                source: std::io::Error::other("boom"),
            }
            .into())
        }
    }

    struct RecordingProbe {
        queried: Mutex<Vec<String>>,
    }

    impl NetworkProbe for RecordingProbe {
        async fn ipv4_address(
            &self,
            interface: &InterfaceName,
        ) -> Result<Option<Ipv4Addr>, RoverHomeError> {
            self.queried
                .lock()
                .unwrap()
                .push(interface.as_str().to_string());
            Ok(None)
        }
    }

    struct FixedHostname(&'static str);

    impl HostnameSource for FixedHostname {
        async fn display_hostname(&self) -> Result<String, RoverHomeError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingHostname;

    impl HostnameSource for FailingHostname {
        async fn display_hostname(&self) -> Result<String, RoverHomeError> {
            Err(HostnameError::Read {
                path: "/etc/hostname".into(),
                source: std::io::Error::other("boom"),
            }
            .into())
        }
    }

    fn interfaces() -> (InterfaceName, InterfaceName) {
        (
            InterfaceName::new("eth0").unwrap(),
            InterfaceName::new("wlan0").unwrap(),
        )
    }

    #[tokio::test]
    async fn should_collect_both_addresses_when_present() {
        let (eth, wlan) = interfaces();
        let svc = StatusService::new(
            FixedProbe {
                ethernet: Some(Ipv4Addr::new(192, 168, 1, 7)),
                wifi: Some(Ipv4Addr::new(10, 0, 0, 7)),
            },
            FixedHostname("gopigo17"),
            eth,
            wlan,
        );

        let status = svc.current_status().await;
        assert_eq!(status.hostname, "gopigo17");
        assert_eq!(status.ethernet, Some(Ipv4Addr::new(192, 168, 1, 7)));
        assert_eq!(status.wifi, Some(Ipv4Addr::new(10, 0, 0, 7)));
    }

    #[tokio::test]
    async fn should_report_absence_when_no_interface_has_address() {
        let (eth, wlan) = interfaces();
        let svc = StatusService::new(
            FixedProbe {
                ethernet: None,
                wifi: None,
            },
            FixedHostname("gopigo17"),
            eth,
            wlan,
        );

        let status = svc.current_status().await;
        assert!(!status.has_addresses());
        assert_eq!(status.hostname, "gopigo17");
    }

    #[tokio::test]
    async fn should_degrade_to_absence_when_probe_fails() {
        let (eth, wlan) = interfaces();
        let svc = StatusService::new(FailingProbe, FixedHostname("gopigo17"), eth, wlan);

        let status = svc.current_status().await;
        assert!(status.ethernet.is_none());
        assert!(status.wifi.is_none());
        assert_eq!(status.hostname, "gopigo17");
    }

    #[tokio::test]
    async fn should_degrade_to_empty_hostname_when_read_fails() {
        let (eth, wlan) = interfaces();
        let svc = StatusService::new(
            FixedProbe {
                ethernet: Some(Ipv4Addr::new(192, 168, 1, 7)),
                wifi: None,
            },
            FailingHostname,
            eth,
            wlan,
        );

        let status = svc.current_status().await;
        assert!(status.hostname.is_empty());
        assert_eq!(status.ethernet, Some(Ipv4Addr::new(192, 168, 1, 7)));
    }

    #[tokio::test]
    async fn should_query_the_configured_interface_names() {
        let probe = RecordingProbe {
            queried: Mutex::new(Vec::new()),
        };
        let svc = StatusService::new(
            probe,
            FixedHostname("gopigo17"),
            InterfaceName::new("enp3s0").unwrap(),
            InterfaceName::new("wlp2s0").unwrap(),
        );

        svc.current_status().await;

        let queried = svc.probe.queried.lock().unwrap();
        assert_eq!(*queried, vec!["enp3s0".to_string(), "wlp2s0".to_string()]);
    }
}
