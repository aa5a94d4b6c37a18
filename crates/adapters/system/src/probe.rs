//! Interface probe backed by the `ip` command.

use std::net::Ipv4Addr;

use tokio::process::Command;

use roverhome_app::ports::NetworkProbe;
use roverhome_domain::error::{ProbeError, RoverHomeError};
use roverhome_domain::interface::InterfaceName;

/// Probes interface addresses by invoking `ip -4 -o addr show`.
///
/// A missing interface, or an interface without an IPv4 address, is
/// reported as `None`; only failing to run the command at all is an
/// error. No retries, no timeouts — the command answers from local
/// kernel state.
#[derive(Debug, Clone)]
pub struct IpCommandProbe {
    program: String,
}

impl Default for IpCommandProbe {
    fn default() -> Self {
        Self {
            program: "ip".to_string(),
        }
    }
}

impl IpCommandProbe {
    /// Use a different `ip` binary (non-standard PATH, test wrapper).
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl NetworkProbe for IpCommandProbe {
    async fn ipv4_address(
        &self,
        interface: &InterfaceName,
    ) -> Result<Option<Ipv4Addr>, RoverHomeError> {
        tracing::debug!(name = %interface, "probing interface");
        let output = Command::new(&self.program)
            .args(["-4", "-o", "addr", "show", "dev", interface.as_str()])
            .output()
            .await
            .map_err(|source| ProbeError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        // `ip` exits non-zero for unknown devices; that is absence, not failure.
        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| ProbeError::InvalidOutput {
            command: self.program.clone(),
        })?;
        Ok(first_inet_address(&stdout))
    }
}

/// Extract the first `inet` address from `ip -4 -o addr show` output.
///
/// Each line looks like
/// `2: eth0    inet 192.168.1.7/24 brd 192.168.1.255 scope global dynamic eth0`;
/// the address is the field after `inet`, ahead of the prefix length.
#[must_use]
pub fn first_inet_address(output: &str) -> Option<Ipv4Addr> {
    output.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        fields.find(|field| *field == "inet")?;
        let cidr = fields.next()?;
        let address = cidr.split('/').next()?;
        address.parse().ok()
    })
}
