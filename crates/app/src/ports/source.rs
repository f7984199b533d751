//! Source port — a read-only query against a remote store of automation
//! artifacts.

use std::future::Future;

use fieldscope_domain::context::InspectionContext;
use fieldscope_domain::error::ReadFailure;
use fieldscope_domain::event::AutomationEvent;

/// One of the two remote reads the inspection issues.
///
/// Implementations query their source-specific rows, normalize each match
/// into an [`AutomationEvent`], and return the whole batch. Normalization
/// is the adapter's job; the core only ever sees the unified shape.
///
/// A failed fetch is reported as a [`ReadFailure`] and handled entirely by
/// the caller — implementations must not retry or surface errors themselves.
pub trait EventSource: Send + Sync {
    /// Short name identifying this source in logs (e.g. `"workflows"`).
    fn name(&self) -> &'static str;

    /// Fetch and normalize every artifact that reacts to the inspected field.
    fn fetch(
        &self,
        ctx: &InspectionContext,
    ) -> impl Future<Output = Result<Vec<AutomationEvent>, ReadFailure>> + Send;
}
