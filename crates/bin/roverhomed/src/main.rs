//! # roverhomed — roverhome daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env overrides)
//! - Initialise tracing
//! - Construct the system adapter (interface probe, hostname file reader)
//! - Construct the status service, injecting the adapters via port traits
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use roverhome_adapter_http_axum::state::AppState;
use roverhome_adapter_system::{FileHostnameSource, IpCommandProbe};
use roverhome_app::services::status_service::StatusService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.as_str())
        .init();

    // System adapter
    let probe = IpCommandProbe::default();
    let hostname = FileHostnameSource::new(&config.hostname.file);

    // Service
    let status_service = StatusService::new(
        probe,
        hostname,
        config.ethernet_interface()?,
        config.wifi_interface()?,
    );

    // HTTP
    let state = AppState::new(status_service, config.page.clone());
    let app = roverhome_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "roverhomed listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("ctrl-c handler should install");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("signal handler should install")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
