//! Automation Event — the unified record both remote sources normalize into.
//!
//! A declarative workflow row and an imperative processing-step row have
//! source-specific shapes; once normalized they are indistinguishable except
//! for their `kind` label. Events are immutable after construction and live
//! only for the duration of one inspection session.

use serde::{Deserialize, Serialize};

use crate::error::{FieldscopeError, ValidationError};

/// The fixed classification label for imperative processing steps.
///
/// Declarative workflows carry an open set of category labels instead
/// (e.g. `"Workflow"`, `"Business Process Flow"`, `"Action"`).
pub const PLUGIN_KIND: &str = "Plugin";

/// An automation artifact configured to react to a change of the inspected
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationEvent {
    /// Opaque stable identifier of the underlying artifact.
    ///
    /// Unique within a catalog snapshot by assumption, not enforcement:
    /// duplicates arriving from re-querying are kept as-is.
    pub id: String,
    /// Display name. May be empty.
    pub name: String,
    /// Free-text explanation. Absence renders as empty, never as `"null"`.
    pub description: Option<String>,
    /// Classification tag. Never empty once the event is constructed.
    pub kind: String,
}

impl AutomationEvent {
    /// Create a builder for constructing an [`AutomationEvent`].
    #[must_use]
    pub fn builder() -> AutomationEventBuilder {
        AutomationEventBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FieldscopeError::Validation`] when `kind` is empty
    /// ([`ValidationError::EmptyKind`]).
    pub fn validate(&self) -> Result<(), FieldscopeError> {
        if self.kind.is_empty() {
            return Err(ValidationError::EmptyKind.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`AutomationEvent`].
#[derive(Debug, Default)]
pub struct AutomationEventBuilder {
    id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    kind: Option<String>,
}

impl AutomationEventBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Consume the builder, validate, and return an [`AutomationEvent`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldscopeError::Validation`] if `kind` is missing or empty.
    pub fn build(self) -> Result<AutomationEvent, FieldscopeError> {
        let event = AutomationEvent {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
            kind: self.kind.unwrap_or_default(),
        };
        event.validate()?;
        Ok(event)
    }
}
