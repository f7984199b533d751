//! # fieldscope-adapter-webapi-reqwest
//!
//! Source readers against an OData Web API record store.
//!
//! Two logically distinct reads, each issued independently:
//!
//! | Source | Entity set | Normalized `kind` |
//! |--------|-----------|-------------------|
//! | [`WorkflowSource`] | `workflows` | category display label |
//! | [`PluginStepSource`] | `sdkmessageprocessingsteps` | fixed `"Plugin"` |
//!
//! ## Dependency rule
//!
//! Depends on `fieldscope-app` (port traits) and `fieldscope-domain` only.

mod client;
mod config;
mod error;
mod plugin_steps;
mod workflows;

pub use client::WebApiClient;
pub use config::WebApiConfig;
pub use error::WebApiError;
pub use plugin_steps::PluginStepSource;
pub use workflows::WorkflowSource;
