//! # fieldscope — pre-save automation inspector
//!
//! Composition root that wires source adapters to the inspection core and
//! prints the resulting report.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize tracing
//! - Construct the source readers (Web API or virtual, per config)
//! - Construct the presenter over terminal surfaces and run the inspection
//! - Print the final label and, once expanded, the detail lines
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod surface;

use std::sync::Arc;

use fieldscope_adapter_virtual::{demo_plugin_steps, demo_workflows};
use fieldscope_adapter_webapi_reqwest::{PluginStepSource, WorkflowSource};
use fieldscope_app::inspector::Inspector;
use fieldscope_app::presenter::DisclosurePresenter;

use crate::config::{Config, SourceKind};
use crate::surface::TermSurface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(
            &config.logging.filter,
        )?)
        .init();

    let context = config.inspection_context()?;
    let verbosity = config.inspection.verbosity;
    tracing::debug!(
        entity_type = %context.entity_type,
        field = %context.field_logical_name,
        "starting inspection"
    );

    let presenter = DisclosurePresenter::new(TermSurface::default(), TermSurface::default());
    let inspector = Arc::new(Inspector::new(context, verbosity, presenter));

    let (workflows_done, plugin_steps_done) = match config.source {
        SourceKind::Webapi => {
            let client = config.webapi.build()?;
            inspector
                .activate(
                    WorkflowSource::new(client.clone()),
                    PluginStepSource::new(client),
                )
                .await
        }
        SourceKind::Virtual => {
            inspector
                .activate(demo_workflows(), demo_plugin_steps())
                .await
        }
    };

    workflows_done.await?;
    plugin_steps_done.await?;

    // Expand the disclosure the way an operator's click would.
    inspector.toggle().await;

    inspector
        .with_surfaces(|label, content| {
            println!("{}", label.text());
            if content.visible() {
                for line in content.text().lines() {
                    println!("{line}");
                }
            }
        })
        .await;

    inspector.teardown().await;
    Ok(())
}
