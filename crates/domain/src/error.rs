//! Common error types used across the workspace.
//!
//! Each boundary defines its own typed error and converts into the
//! umbrella [`RoverHomeError`] via `#[from]`. None of these reach the
//! rendered page — the status service degrades them to absent fields.

use std::path::PathBuf;

/// Umbrella error for the roverhome workspace.
#[derive(Debug, thiserror::Error)]
pub enum RoverHomeError {
    /// Domain invariant violation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// Interface probe failure.
    #[error("interface probe error")]
    Probe(#[from] ProbeError),

    /// Hostname file failure.
    #[error("hostname source error")]
    Hostname(#[from] HostnameError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Interface names must be non-empty.
    #[error("interface name must not be empty")]
    EmptyInterfaceName,

    /// Interface names are passed to the OS as a single argument.
    #[error("interface name must not contain whitespace: {0:?}")]
    InterfaceNameWhitespace(String),
}

/// Failures while querying the OS for an interface address.
///
/// A *missing* interface is not an error — the probe reports it as an
/// absent address. These cover only failures to run the query at all.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The probe command could not be spawned.
    #[error("failed to invoke `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The probe command produced output that could not be decoded.
    #[error("`{command}` produced non-UTF-8 output")]
    InvalidOutput { command: String },
}

/// Failures while reading the display-hostname file.
#[derive(Debug, thiserror::Error)]
pub enum HostnameError {
    /// The backing file could not be read.
    #[error("failed to read hostname file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
