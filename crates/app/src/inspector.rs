//! Inspector — orchestrates the two fire-and-forget source reads.
//!
//! On activation the presenter renders its (empty) surfaces immediately,
//! then both sources are issued without waiting for each other. Each
//! completion independently runs the same append-then-reformat procedure;
//! the two tasks are joined only by their shared side effect on the
//! catalog, never by a barrier. A render after only one source has
//! completed is an expected transient state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use fieldscope_domain::context::InspectionContext;
use fieldscope_domain::error::ReadFailure;
use fieldscope_domain::event::AutomationEvent;
use fieldscope_domain::report::{Verbosity, format_report};

use crate::catalog::EventCatalog;
use crate::ports::{EventSource, Surface};
use crate::presenter::DisclosurePresenter;

/// Owner of one inspection session: the catalog, the presenter, and the
/// teardown guard.
///
/// Verbosity is supplied once at construction and does not change
/// mid-session.
#[derive(Debug)]
pub struct Inspector<S> {
    context: InspectionContext,
    verbosity: Verbosity,
    inner: Mutex<Inner<S>>,
    active: AtomicBool,
}

#[derive(Debug)]
struct Inner<S> {
    catalog: EventCatalog,
    presenter: DisclosurePresenter<S>,
}

impl<S: Surface> Inspector<S> {
    /// Create an inspector over a fresh, empty catalog.
    pub fn new(
        context: InspectionContext,
        verbosity: Verbosity,
        presenter: DisclosurePresenter<S>,
    ) -> Self {
        Self {
            context,
            verbosity,
            inner: Mutex::new(Inner {
                catalog: EventCatalog::new(),
                presenter,
            }),
            active: AtomicBool::new(true),
        }
    }

    /// The context this session inspects.
    #[must_use]
    pub fn context(&self) -> &InspectionContext {
        &self.context
    }

    /// Append a batch of normalized events and re-render the report.
    ///
    /// This is the single shared completion path for both sources. A batch
    /// arriving after [`teardown`](Self::teardown) is dropped without
    /// touching the surfaces.
    pub async fn ingest(&self, events: Vec<AutomationEvent>) {
        let mut inner = self.inner.lock().await;
        if !self.active.load(Ordering::Acquire) {
            tracing::debug!(
                count = events.len(),
                "read completed after teardown, dropping results"
            );
            return;
        }
        for event in events {
            inner.catalog.append(event);
        }
        let report = format_report(
            inner.catalog.snapshot(),
            self.verbosity,
            &self.context.field_display_name,
        );
        inner.presenter.render(&report);
    }

    /// Handle a user activation of the label surface.
    pub async fn toggle(&self) {
        let mut inner = self.inner.lock().await;
        inner.presenter.toggle();
    }

    /// End the session: in-flight completions are dropped from here on and
    /// the catalog is emptied.
    pub async fn teardown(&self) {
        self.active.store(false, Ordering::Release);
        let mut inner = self.inner.lock().await;
        inner.catalog.reset();
    }

    /// Run `f` against the label and content surfaces, in that order.
    pub async fn with_surfaces<R>(&self, f: impl FnOnce(&S, &S) -> R) -> R {
        let inner = self.inner.lock().await;
        f(
            inner.presenter.label_surface(),
            inner.presenter.content_surface(),
        )
    }

    /// The single error-handling hook for failed reads.
    ///
    /// Policy: log and discard. A failed read never surfaces to the user
    /// and never aborts the sibling source — the report silently
    /// undercounts instead.
    fn on_read_failure(&self, source: &'static str, err: &ReadFailure) {
        tracing::warn!(%err, source, "source read failed, continuing with partial results");
    }
}

impl<S: Surface + Send + 'static> Inspector<S> {
    /// Render the empty report immediately, then issue both sources as
    /// independent one-shot tasks.
    ///
    /// The returned handles let a composition root await completion; the
    /// tasks themselves never require it.
    pub async fn activate<W, P>(
        self: &Arc<Self>,
        workflows: W,
        plugin_steps: P,
    ) -> (JoinHandle<()>, JoinHandle<()>)
    where
        W: EventSource + 'static,
        P: EventSource + 'static,
    {
        {
            let mut inner = self.inner.lock().await;
            let report = format_report(
                inner.catalog.snapshot(),
                self.verbosity,
                &self.context.field_display_name,
            );
            inner.presenter.render(&report);
        }
        (self.spawn_read(workflows), self.spawn_read(plugin_steps))
    }

    fn spawn_read<R: EventSource + 'static>(self: &Arc<Self>, source: R) -> JoinHandle<()> {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            match source.fetch(&this.context).await {
                Ok(events) => this.ingest(events).await,
                Err(err) => this.on_read_failure(source.name(), &err),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        text: String,
        visible: bool,
        width: u32,
    }

    impl Surface for RecordingSurface {
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn set_width(&mut self, width: u32) {
            self.width = width;
        }

        fn width(&self) -> u32 {
            self.width
        }
    }

    /// Source that yields a fixed batch, or fails when given `None`.
    struct FakeSource {
        events: Option<Vec<AutomationEvent>>,
    }

    impl EventSource for FakeSource {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn fetch(
            &self,
            _ctx: &InspectionContext,
        ) -> Result<Vec<AutomationEvent>, ReadFailure> {
            match &self.events {
                Some(events) => Ok(events.clone()),
                None => Err(ReadFailure::new("simulated remote rejection")),
            }
        }
    }

    fn succeeding(events: Vec<AutomationEvent>) -> FakeSource {
        FakeSource {
            events: Some(events),
        }
    }

    fn failing() -> FakeSource {
        FakeSource { events: None }
    }

    fn event(kind: &str, id: &str, description: &str) -> AutomationEvent {
        AutomationEvent::builder()
            .id(id)
            .kind(kind)
            .description(description)
            .build()
            .unwrap()
    }

    fn inspector(verbosity: Verbosity) -> Arc<Inspector<RecordingSurface>> {
        let context =
            InspectionContext::new("account", "statuscode", "Status", uuid::Uuid::nil());
        let presenter =
            DisclosurePresenter::new(RecordingSurface::default(), RecordingSurface::default());
        Arc::new(Inspector::new(context, verbosity, presenter))
    }

    #[tokio::test]
    async fn should_render_empty_report_immediately_on_activation() {
        let inspector = inspector(Verbosity::Simple);
        let (a, b) = inspector
            .activate(succeeding(Vec::new()), succeeding(Vec::new()))
            .await;
        a.await.unwrap();
        b.await.unwrap();

        inspector
            .with_surfaces(|label, content| {
                assert_eq!(label.text, "No events related to Status");
                assert_eq!(content.text, "");
            })
            .await;
    }

    #[tokio::test]
    async fn should_merge_both_sources_into_one_sorted_report() {
        let inspector = inspector(Verbosity::Detailed);
        let workflows = succeeding(vec![event("Workflow", "1", "Updates account")]);
        let steps = succeeding(vec![event("Plugin", "2", "Syncs to ledger")]);

        let (a, b) = inspector.activate(workflows, steps).await;
        a.await.unwrap();
        b.await.unwrap();

        inspector
            .with_surfaces(|label, content| {
                assert_eq!(label.text, "2 events are related to Status");
                assert_eq!(
                    content.text,
                    "> [Plugin] Syncs to ledger\r\n> [Workflow] Updates account"
                );
            })
            .await;
    }

    #[tokio::test]
    async fn should_show_partial_results_when_one_source_fails() {
        let inspector = inspector(Verbosity::Simple);
        let steps = succeeding(vec![
            event("Plugin", "1", "Syncs to ledger"),
            event("Plugin", "2", "Recalculates totals"),
        ]);

        let (a, b) = inspector.activate(failing(), steps).await;
        a.await.unwrap();
        b.await.unwrap();

        inspector
            .with_surfaces(|label, content| {
                assert_eq!(label.text, "2 events are related to Status");
                assert_eq!(content.text, "> Syncs to ledger\r\n> Recalculates totals");
                assert!(!label.text.contains("fail"));
                assert!(!content.text.contains("fail"));
            })
            .await;
    }

    #[tokio::test]
    async fn should_render_transient_state_after_first_completion() {
        let inspector = inspector(Verbosity::Simple);

        inspector
            .ingest(vec![event("Workflow", "1", "Updates account")])
            .await;
        inspector
            .with_surfaces(|label, _| assert_eq!(label.text, "A event is related to Status"))
            .await;

        inspector
            .ingest(vec![event("Plugin", "2", "Syncs to ledger")])
            .await;
        inspector
            .with_surfaces(|label, _| assert_eq!(label.text, "2 events are related to Status"))
            .await;
    }

    #[tokio::test]
    async fn should_drop_completions_arriving_after_teardown() {
        let inspector = inspector(Verbosity::Simple);
        inspector.ingest(vec![event("Workflow", "1", "a")]).await;
        inspector.teardown().await;

        inspector.ingest(vec![event("Plugin", "2", "b")]).await;

        inspector
            .with_surfaces(|label, _| {
                // The last render before teardown stays in place.
                assert_eq!(label.text, "A event is related to Status");
            })
            .await;
    }

    #[tokio::test]
    async fn should_toggle_content_visibility_without_touching_text() {
        let inspector = inspector(Verbosity::Simple);
        inspector.ingest(vec![event("Workflow", "1", "a")]).await;

        inspector.toggle().await;
        inspector
            .with_surfaces(|_, content| assert!(content.visible))
            .await;

        inspector.toggle().await;
        inspector
            .with_surfaces(|label, content| {
                assert!(!content.visible);
                assert_eq!(label.text, "A event is related to Status");
                assert_eq!(content.text, "> a");
            })
            .await;
    }
}
