//! Plugin-step source — enabled imperative processing steps.

use serde::Deserialize;

use fieldscope_app::ports::EventSource;
use fieldscope_domain::context::InspectionContext;
use fieldscope_domain::error::ReadFailure;
use fieldscope_domain::event::{AutomationEvent, PLUGIN_KIND};

use crate::client::{WebApiClient, encode_filter};

/// Reads enabled, non-hidden processing steps whose filtering-attribute list
/// contains the inspected field and whose registered primary-entity filter
/// matches the current entity type.
#[derive(Debug, Clone)]
pub struct PluginStepSource {
    client: WebApiClient,
}

impl PluginStepSource {
    /// Create a source backed by the given client.
    #[must_use]
    pub fn new(client: WebApiClient) -> Self {
        Self { client }
    }
}

impl EventSource for PluginStepSource {
    fn name(&self) -> &'static str {
        "plugin_steps"
    }

    async fn fetch(&self, ctx: &InspectionContext) -> Result<Vec<AutomationEvent>, ReadFailure> {
        let rows: Vec<PluginStepRow> = self
            .client
            .retrieve_multiple("sdkmessageprocessingsteps", &query(ctx))
            .await?;
        rows.into_iter().map(PluginStepRow::normalize).collect()
    }
}

/// Raw row shape returned by the `sdkmessageprocessingsteps` entity set.
#[derive(Debug, Deserialize)]
pub(crate) struct PluginStepRow {
    #[serde(rename = "sdkmessageprocessingstepid", default)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

impl PluginStepRow {
    fn normalize(self) -> Result<AutomationEvent, ReadFailure> {
        let mut builder = AutomationEvent::builder()
            .id(self.id)
            .name(self.name)
            .kind(PLUGIN_KIND);
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        builder.build().map_err(ReadFailure::new)
    }
}

fn query(ctx: &InspectionContext) -> String {
    let filter = format!(
        "statecode eq 0 and ishidden/Value eq false and contains(filteringattributes, '{}') and sdkmessagefilterid/primaryobjecttypecode eq '{}'",
        ctx.field_logical_name, ctx.entity_type
    );
    format!(
        "$select=name,description,sdkmessageprocessingstepid&$expand=sdkmessagefilterid($select=primaryobjecttypecode)&$filter={}",
        encode_filter(&filter)
    )
}
