//! Status home page — network facts and service links.

use askama::Template;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::response::{Html, IntoResponse, Response};

use roverhome_app::ports::{HostnameSource, NetworkProbe};

use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    title: String,
    welcome: String,
    portal_url: String,
    portal_label: String,
    jupyter_url: String,
    vnc_url: String,
    vnc_password: String,
    terminal_url: String,
    terminal_username: String,
    terminal_password: String,
    support_url: String,
    hostname: String,
    wifi: Option<String>,
    ethernet: Option<String>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — the status page.
///
/// Re-collects the network facts for every request and builds the
/// same-host service links from the inbound `Host` header.
pub async fn index<P, H>(State(state): State<AppState<P, H>>, headers: HeaderMap) -> HomeTemplate
where
    P: NetworkProbe + Send + Sync + 'static,
    H: HostnameSource + Send + Sync + 'static,
{
    let status = state.status_service.current_status().await;
    let host = request_host(&headers);
    let page = &state.page;

    HomeTemplate {
        title: page.title.clone(),
        welcome: page.welcome.clone(),
        portal_url: page.portal_url.clone(),
        portal_label: page.portal_label.clone(),
        jupyter_url: format!("http://{host}:{}", page.jupyter_port),
        vnc_url: format!(
            "http://{host}:{}/vnc.html?autoconnect=true&scaleViewport=true",
            page.vnc_port
        ),
        vnc_password: page.vnc_password.clone(),
        terminal_url: format!("http://{host}:{}", page.terminal_port),
        terminal_username: page.terminal_username.clone(),
        terminal_password: page.terminal_password.clone(),
        support_url: page.support_url.clone(),
        hostname: status.hostname,
        wifi: status.wifi.map(|ip| ip.to_string()),
        ethernet: status.ethernet.map(|ip| ip.to_string()),
    }
}

/// Host portion of the request's `Host` header.
///
/// The port is stripped so each service link can carry its own port; a
/// missing or unreadable header falls back to `localhost`.
fn request_host(headers: &HeaderMap) -> String {
    headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| "localhost".to_string(), strip_port)
}

fn strip_port(host: &str) -> String {
    // IPv6 literals keep their brackets: `[::1]:8080` → `[::1]`.
    if let Some(rest) = host.strip_prefix('[') {
        match rest.split_once(']') {
            Some((address, _)) => format!("[{address}]"),
            None => host.to_string(),
        }
    } else {
        match host.split_once(':') {
            Some((name, _)) => name.to_string(),
            None => host.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn should_use_host_header_as_is_when_it_has_no_port() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("gopigo17.local"));
        assert_eq!(request_host(&headers), "gopigo17.local");
    }

    #[test]
    fn should_strip_port_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("gopigo17.local:8080"));
        assert_eq!(request_host(&headers), "gopigo17.local");
    }

    #[test]
    fn should_keep_brackets_of_ipv6_literal() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("[::1]:8080"));
        assert_eq!(request_host(&headers), "[::1]");
    }

    #[test]
    fn should_fall_back_to_localhost_without_host_header() {
        let headers = HeaderMap::new();
        assert_eq!(request_host(&headers), "localhost");
    }
}
