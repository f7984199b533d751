//! Inspection context — which field on which entity type is being inspected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The field-and-entity coordinates an inspection runs against.
///
/// Source readers filter on `entity_type` and `field_logical_name`; the
/// report label shows `field_display_name` instead (the logical name is a
/// stable internal identifier, not something an operator reads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionContext {
    /// Logical name of the entity type the edited record belongs to.
    pub entity_type: String,
    /// Stable internal identifier of the inspected field.
    pub field_logical_name: String,
    /// Human-readable label of the inspected field, used in the report.
    pub field_display_name: String,
    /// The form the record is currently edited on. Workflows scoped to a
    /// different form are filtered out.
    pub form_id: Uuid,
}

impl InspectionContext {
    /// Create a new context.
    #[must_use]
    pub fn new(
        entity_type: impl Into<String>,
        field_logical_name: impl Into<String>,
        field_display_name: impl Into<String>,
        form_id: Uuid,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            field_logical_name: field_logical_name.into(),
            field_display_name: field_display_name.into(),
            form_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_context_through_serde_json() {
        let ctx = InspectionContext::new("account", "statuscode", "Status", Uuid::new_v4());
        let json = serde_json::to_string(&ctx).unwrap();
        let parsed: InspectionContext = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entity_type, ctx.entity_type);
        assert_eq!(parsed.field_logical_name, ctx.field_logical_name);
        assert_eq!(parsed.field_display_name, ctx.field_display_name);
        assert_eq!(parsed.form_id, ctx.form_id);
    }
}
