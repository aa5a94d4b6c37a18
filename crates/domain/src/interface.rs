//! Network interface naming — which OS interfaces the kit reports on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The two interface roles shown on the status page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    Ethernet,
    Wifi,
}

impl InterfaceKind {
    /// Conventional interface name for this role on Raspberry-Pi-class
    /// images.
    #[must_use]
    pub fn conventional_name(self) -> &'static str {
        match self {
            Self::Ethernet => "eth0",
            Self::Wifi => "wlan0",
        }
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ethernet => f.write_str("ethernet"),
            Self::Wifi => f.write_str("wifi"),
        }
    }
}

/// Validated OS interface name (e.g. `eth0`, `wlan0`).
///
/// The name is handed to the OS as a single command argument, so it must
/// be non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InterfaceName(String);

impl InterfaceName {
    /// Validate and wrap an interface name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the name is empty or contains
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyInterfaceName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ValidationError::InterfaceNameWhitespace(name));
        }
        Ok(Self(name))
    }

    /// Access the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InterfaceName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for InterfaceName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InterfaceName> for String {
    fn from(name: InterfaceName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_conventional_names() {
        assert_eq!(InterfaceName::new("eth0").unwrap().as_str(), "eth0");
        assert_eq!(InterfaceName::new("wlan0").unwrap().as_str(), "wlan0");
    }

    #[test]
    fn should_reject_empty_name() {
        assert_eq!(
            InterfaceName::new(""),
            Err(ValidationError::EmptyInterfaceName)
        );
    }

    #[test]
    fn should_reject_name_with_whitespace() {
        let result = InterfaceName::new("eth 0");
        assert!(matches!(
            result,
            Err(ValidationError::InterfaceNameWhitespace(_))
        ));
    }

    #[test]
    fn should_parse_from_str() {
        let name: InterfaceName = "wlan0".parse().unwrap();
        assert_eq!(name.to_string(), "wlan0");
    }

    #[test]
    fn should_reject_invalid_name_during_deserialization() {
        let result: Result<InterfaceName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let name = InterfaceName::new("eth0").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"eth0\"");
        let parsed: InterfaceName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn should_map_kinds_to_conventional_names() {
        assert_eq!(InterfaceKind::Ethernet.conventional_name(), "eth0");
        assert_eq!(InterfaceKind::Wifi.conventional_name(), "wlan0");
    }

    #[test]
    fn should_display_lowercase_kind() {
        assert_eq!(InterfaceKind::Ethernet.to_string(), "ethernet");
        assert_eq!(InterfaceKind::Wifi.to_string(), "wifi");
    }
}
