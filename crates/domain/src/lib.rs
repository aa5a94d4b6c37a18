//! # roverhome-domain
//!
//! Pure domain model for the roverhome status page.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, validated value objects
//! - Define **interface names and kinds** (which OS interfaces the kit
//!   reports on)
//! - Define the **[`NetworkStatus`](status::NetworkStatus)** snapshot — the
//!   three request-scoped facts the page shows
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod interface;
pub mod status;
