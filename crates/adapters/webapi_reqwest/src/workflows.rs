//! Workflow source — active declarative automation artifacts.

use serde::Deserialize;

use fieldscope_app::ports::EventSource;
use fieldscope_domain::context::InspectionContext;
use fieldscope_domain::error::ReadFailure;
use fieldscope_domain::event::AutomationEvent;

use crate::client::{WebApiClient, encode_filter};

/// Reads active, non-retired declarative workflows whose trigger-attribute
/// list contains the inspected field, whose target entity matches the
/// current entity type, and whose form scoping is either unrestricted or
/// matches the current form.
#[derive(Debug, Clone)]
pub struct WorkflowSource {
    client: WebApiClient,
}

impl WorkflowSource {
    /// Create a source backed by the given client.
    #[must_use]
    pub fn new(client: WebApiClient) -> Self {
        Self { client }
    }
}

impl EventSource for WorkflowSource {
    fn name(&self) -> &'static str {
        "workflows"
    }

    async fn fetch(&self, ctx: &InspectionContext) -> Result<Vec<AutomationEvent>, ReadFailure> {
        let rows: Vec<WorkflowRow> = self
            .client
            .retrieve_multiple("workflows", &query(ctx))
            .await?;
        rows.into_iter().map(WorkflowRow::normalize).collect()
    }
}

/// Raw row shape returned by the `workflows` entity set.
#[derive(Debug, Deserialize)]
pub(crate) struct WorkflowRow {
    #[serde(rename = "workflowid", default)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) category: Option<i64>,
    #[serde(rename = "category@OData.Community.Display.V1.FormattedValue", default)]
    pub(crate) category_label: Option<String>,
}

impl WorkflowRow {
    /// The classification tag: the category's display label when the
    /// formatted-value annotation is present, otherwise the raw category
    /// number, otherwise plain `"Workflow"` — the event invariant requires
    /// a non-empty kind.
    fn kind(&self) -> String {
        if let Some(label) = self.category_label.as_deref().filter(|label| !label.is_empty()) {
            return label.to_string();
        }
        match self.category {
            Some(category) => category.to_string(),
            None => "Workflow".to_string(),
        }
    }

    fn normalize(self) -> Result<AutomationEvent, ReadFailure> {
        let kind = self.kind();
        let mut builder = AutomationEvent::builder()
            .id(self.id)
            .name(self.name)
            .kind(kind);
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        builder.build().map_err(ReadFailure::new)
    }
}

fn query(ctx: &InspectionContext) -> String {
    let filter = format!(
        "statecode eq 1 and primaryentity eq '{}' and contains(triggeronupdateattributelist, '{}') and (formid eq null or formid eq {})",
        ctx.entity_type, ctx.field_logical_name, ctx.form_id
    );
    format!(
        "$select=workflowid,name,description,category&$filter={}",
        encode_filter(&filter)
    )
}
