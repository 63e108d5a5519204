//! Thin client for a GitHub-shaped organization/repository listing API.
//!
//! [`client::OrgClient`] fetches organization metadata, derives the
//! repositories URL from it, and lists public repository names with an
//! optional license-key filter. The HTTP transport is injected as a
//! [`fetch::JsonFetcher`] trait object, so tests drive the client with
//! scripted responses instead of a live API.

pub mod client;
pub mod config;
pub mod fetch;
pub mod models;
pub mod report;

pub use client::OrgClient;
pub use config::{load_config, Config};
pub use fetch::{HttpFetcher, JsonFetcher};
pub use models::{OrgListing, RepoEntry};
