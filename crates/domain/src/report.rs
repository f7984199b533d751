//! Report formatting — the pure merge-sort-format half of the pipeline.
//!
//! Given the catalog's current events and a verbosity, produce a short
//! summary label and a multi-line detail string. Formatting never fails:
//! missing optional fields render as empty strings, never as placeholders.

use serde::{Deserialize, Serialize};

use crate::event::AutomationEvent;

/// Lines in the detail content are joined with CRLF, matching the host
/// surface the report was designed for.
const LINE_SEPARATOR: &str = "\r\n";

/// Rendering mode: whether each line carries the artifact's classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// `"> <description>"` per line.
    #[default]
    Simple,
    /// `"> [<kind>] <description>"` per line.
    Detailed,
}

impl Verbosity {
    /// Interpret a raw host-configuration value: `"0"` selects
    /// [`Verbosity::Simple`], anything else [`Verbosity::Detailed`].
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw == "0" {
            Self::Simple
        } else {
            Self::Detailed
        }
    }
}

/// Accepts the spelled-out names alongside the raw content-level values
/// (`"0"` is simple, anything else detailed) that host manifests carry.
impl<'de> Deserialize<'de> for Verbosity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "simple" => Self::Simple,
            "detailed" => Self::Detailed,
            raw => Self::from_raw(raw),
        })
    }
}

/// The formatter's output: a summary label and the detail content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// One-line summary, shown on the collapsed affordance.
    pub label: String,
    /// One line per event, revealed on expansion.
    pub content: String,
}

/// Format the given events into a [`Report`].
///
/// The input sequence is left untouched; a copy is sorted by `kind` using
/// ordinal (byte-wise) comparison, ascending. Ties keep their relative
/// catalog order — `sort_by` is stable, which is what makes repeated runs
/// over an unchanged catalog byte-identical.
#[must_use]
pub fn format_report(
    events: &[AutomationEvent],
    verbosity: Verbosity,
    field_display_name: &str,
) -> Report {
    let mut sorted: Vec<&AutomationEvent> = events.iter().collect();
    sorted.sort_by(|a, b| a.kind.cmp(&b.kind));

    let label = match sorted.len() {
        0 => format!("No events related to {field_display_name}"),
        // Wording kept verbatim from the original surface, grammar and all.
        1 => format!("A event is related to {field_display_name}"),
        n => format!("{n} events are related to {field_display_name}"),
    };

    let content = sorted
        .iter()
        .map(|event| {
            let description = event.description.as_deref().unwrap_or_default();
            match verbosity {
                Verbosity::Simple => format!("> {description}"),
                Verbosity::Detailed => format!("> [{}] {description}", event.kind),
            }
        })
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR);

    Report { label, content }
}
