//! Page configuration — branding, service ports, and credentials
//! interpolated into the rendered page.

use std::path::PathBuf;

use serde::Deserialize;

/// Settings for the rendered status page.
///
/// Defaults reproduce the stock kit image: JupyterLab on 8090, the noVNC
/// desktop on 6080, the web terminal on 4200, and the factory
/// credentials. All of it is overridable from the `[page]` section of
/// the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page title and header text.
    pub title: String,
    /// Welcome paragraph shown under the header.
    pub welcome: String,
    /// Course portal URL (external site).
    pub portal_url: String,
    /// Label on the course portal button.
    pub portal_label: String,
    /// JupyterLab port on the robot.
    pub jupyter_port: u16,
    /// noVNC desktop port on the robot.
    pub vnc_port: u16,
    /// Password shown next to the VNC link.
    pub vnc_password: String,
    /// Web terminal port on the robot.
    pub terminal_port: u16,
    /// Username shown next to the terminal link.
    pub terminal_username: String,
    /// Password shown next to the terminal link.
    pub terminal_password: String,
    /// Vendor support URL (external site).
    pub support_url: String,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Rover Home".to_string(),
            welcome: "Welcome to the home page for your robot!".to_string(),
            portal_url: "https://canvas.tufts.edu/courses/".to_string(),
            portal_label: "Open Canvas".to_string(),
            jupyter_port: 8090,
            vnc_port: 6080,
            vnc_password: "robots1234".to_string(),
            terminal_port: 4200,
            terminal_username: "pi".to_string(),
            terminal_password: "robots1234".to_string(),
            support_url: "https://gopigo.io/support/".to_string(),
            assets_dir: PathBuf::from("public"),
        }
    }
}
