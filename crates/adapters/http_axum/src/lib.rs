//! # roverhome-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered status page** at `/` — complete
//!   HTML, **zero JavaScript**, with no-cache headers so every visit
//!   re-probes the host
//! - Serve a small **JSON API** (`/api/status`) for programmatic access
//! - Serve the stylesheet and images under `/assets`
//! - Map HTTP requests into application service calls (driving adapter)
//!
//! ## Dependency rule
//! Depends on `roverhome-app` (for port traits and the status service)
//! and `roverhome-domain` (for the snapshot type). Never leaks axum
//! types into the domain.

pub mod api;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
