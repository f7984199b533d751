//! # fieldscope-adapter-virtual
//!
//! Simulated sources that stand in for the Web API readers during testing
//! and demonstration.
//!
//! ## Provided sources
//!
//! | Source | Behaviour |
//! |--------|-----------|
//! | [`StaticSource`] | Yields a fixed list of events |
//! | [`FailingSource`] | Always rejects with a simulated read failure |
//!
//! ## Dependency rule
//!
//! Depends on `fieldscope-app` (port traits) and `fieldscope-domain` only.

use fieldscope_app::ports::EventSource;
use fieldscope_domain::context::InspectionContext;
use fieldscope_domain::error::ReadFailure;
use fieldscope_domain::event::{AutomationEvent, PLUGIN_KIND};

/// Source that yields the same fixed batch on every fetch.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: &'static str,
    events: Vec<AutomationEvent>,
}

impl StaticSource {
    /// Create a source yielding the given events.
    #[must_use]
    pub fn new(name: &'static str, events: Vec<AutomationEvent>) -> Self {
        Self { name, events }
    }
}

impl EventSource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _ctx: &InspectionContext) -> Result<Vec<AutomationEvent>, ReadFailure> {
        Ok(self.events.clone())
    }
}

/// Source that rejects every fetch, for exercising the partial-result path.
#[derive(Debug, Clone)]
pub struct FailingSource {
    name: &'static str,
    message: String,
}

impl FailingSource {
    /// Create a source failing with the given message.
    #[must_use]
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct SimulatedFailure(String);

impl EventSource for FailingSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _ctx: &InspectionContext) -> Result<Vec<AutomationEvent>, ReadFailure> {
        Err(ReadFailure::new(SimulatedFailure(self.message.clone())))
    }
}

/// Canned declarative workflows for the demo wiring.
///
/// # Panics
///
/// Never panics: every canned event carries a non-empty kind.
#[must_use]
pub fn demo_workflows() -> StaticSource {
    let events = vec![
        AutomationEvent::builder()
            .id("19a7c5f1-6f39-4f0a-a720-6a02b4fd0001")
            .name("Notify owner on status change")
            .description("Sends an email to the record owner")
            .kind("Workflow")
            .build()
            .expect("canned event is valid"),
        AutomationEvent::builder()
            .id("19a7c5f1-6f39-4f0a-a720-6a02b4fd0002")
            .name("Qualification stage gate")
            .kind("Business Process Flow")
            .build()
            .expect("canned event is valid"),
    ];
    StaticSource::new("workflows", events)
}

/// Canned imperative processing steps for the demo wiring.
///
/// # Panics
///
/// Never panics: every canned event carries a non-empty kind.
#[must_use]
pub fn demo_plugin_steps() -> StaticSource {
    let events = vec![
        AutomationEvent::builder()
            .id("4d21e6b0-95c2-44d3-9cf4-1be09cf10001")
            .name("Ledger sync step")
            .description("Syncs the account to the ledger")
            .kind(PLUGIN_KIND)
            .build()
            .expect("canned event is valid"),
        AutomationEvent::builder()
            .id("4d21e6b0-95c2-44d3-9cf4-1be09cf10002")
            .name("Audit stamp step")
            .description("Writes an audit row for the change")
            .kind(PLUGIN_KIND)
            .build()
            .expect("canned event is valid"),
    ];
    StaticSource::new("plugin_steps", events)
}
