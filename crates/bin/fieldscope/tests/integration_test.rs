//! End-to-end smoke tests for the full fieldscope stack.
//!
//! Each test wires the real inspector, catalog, presenter, and formatter to
//! the virtual source adapters — no remote endpoint is involved.

use std::sync::Arc;

use fieldscope_adapter_virtual::{FailingSource, StaticSource, demo_plugin_steps, demo_workflows};
use fieldscope_app::inspector::Inspector;
use fieldscope_app::ports::Surface;
use fieldscope_app::presenter::DisclosurePresenter;
use fieldscope_domain::context::InspectionContext;
use fieldscope_domain::report::Verbosity;

#[derive(Debug, Default)]
struct BufferSurface {
    text: String,
    visible: bool,
    width: u32,
}

impl Surface for BufferSurface {
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

fn inspector(verbosity: Verbosity) -> Arc<Inspector<BufferSurface>> {
    let context = InspectionContext::new("account", "statuscode", "Status", uuid::Uuid::nil());
    let presenter =
        DisclosurePresenter::new(BufferSurface::default(), BufferSurface::default());
    Arc::new(Inspector::new(context, verbosity, presenter))
}

#[tokio::test]
async fn should_report_all_demo_events_end_to_end() {
    let inspector = inspector(Verbosity::Detailed);
    let (a, b) = inspector
        .activate(demo_workflows(), demo_plugin_steps())
        .await;
    a.await.unwrap();
    b.await.unwrap();

    inspector
        .with_surfaces(|label, content| {
            assert_eq!(label.text, "4 events are related to Status");
            let lines: Vec<&str> = content.text.split("\r\n").collect();
            assert_eq!(lines.len(), 4);
            // Ordinal kind order: Business Process Flow, Plugin, Plugin, Workflow.
            assert_eq!(lines[0], "> [Business Process Flow] ");
            assert_eq!(lines[1], "> [Plugin] Syncs the account to the ledger");
            assert_eq!(lines[2], "> [Plugin] Writes an audit row for the change");
            assert_eq!(lines[3], "> [Workflow] Sends an email to the record owner");
        })
        .await;
}

#[tokio::test]
async fn should_undercount_when_workflow_source_fails() {
    let inspector = inspector(Verbosity::Simple);
    let failing = FailingSource::new("workflows", "remote rejected the query");
    let (a, b) = inspector.activate(failing, demo_plugin_steps()).await;
    a.await.unwrap();
    b.await.unwrap();

    inspector
        .with_surfaces(|label, content| {
            assert_eq!(label.text, "2 events are related to Status");
            assert!(!content.text.contains("rejected"));
        })
        .await;
}

#[tokio::test]
async fn should_render_singular_label_for_one_event() {
    let inspector = inspector(Verbosity::Simple);
    let lone = StaticSource::new(
        "workflows",
        vec![
            fieldscope_domain::event::AutomationEvent::builder()
                .id("1")
                .kind("Workflow")
                .description("Updates account")
                .build()
                .unwrap(),
        ],
    );
    let (a, b) = inspector
        .activate(lone, StaticSource::new("plugin_steps", Vec::new()))
        .await;
    a.await.unwrap();
    b.await.unwrap();

    inspector
        .with_surfaces(|label, content| {
            assert_eq!(label.text, "A event is related to Status");
            assert_eq!(content.text, "> Updates account");
        })
        .await;
}

#[tokio::test]
async fn should_return_to_hidden_after_two_toggles() {
    let inspector = inspector(Verbosity::Simple);
    let (a, b) = inspector
        .activate(demo_workflows(), demo_plugin_steps())
        .await;
    a.await.unwrap();
    b.await.unwrap();

    inspector.toggle().await;
    inspector
        .with_surfaces(|_, content| assert!(content.visible))
        .await;

    inspector.toggle().await;
    inspector
        .with_surfaces(|label, content| {
            assert!(!content.visible);
            assert_eq!(label.text, "4 events are related to Status");
        })
        .await;
}
