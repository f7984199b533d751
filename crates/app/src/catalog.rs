//! Event catalog — the accumulating per-session list of automation events.
//!
//! The catalog is deliberately a thin owned-state object with a single
//! `append` entry point rather than a bare collection touched from multiple
//! call sites, so every mutation is auditable. It cannot fail: it is pure
//! in-memory bookkeeping.

use fieldscope_domain::event::AutomationEvent;

/// Append-only accumulator for normalized [`AutomationEvent`]s.
///
/// Iteration order is insertion order — the arrival order of whichever
/// source completed first — not display order; sorting is the formatter's
/// concern. No uniqueness is enforced: duplicate ids from re-querying are
/// kept as-is.
#[derive(Debug, Default)]
pub struct EventCatalog {
    events: Vec<AutomationEvent>,
}

impl EventCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event at the end.
    pub fn append(&mut self, event: AutomationEvent) {
        self.events.push(event);
    }

    /// Number of accumulated events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The current ordered sequence of events, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[AutomationEvent] {
        &self.events
    }

    /// Empty the catalog. Called on teardown; the catalog is never reused
    /// as a cache across activations.
    pub fn reset(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, id: &str) -> AutomationEvent {
        AutomationEvent::builder().id(id).kind(kind).build().unwrap()
    }

    #[test]
    fn should_start_empty() {
        let catalog = EventCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.snapshot().is_empty());
    }

    #[test]
    fn should_preserve_insertion_order() {
        let mut catalog = EventCatalog::new();
        catalog.append(event("Workflow", "1"));
        catalog.append(event("Plugin", "2"));
        catalog.append(event("Action", "3"));

        let ids: Vec<&str> = catalog.snapshot().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn should_keep_duplicate_ids() {
        let mut catalog = EventCatalog::new();
        catalog.append(event("Workflow", "1"));
        catalog.append(event("Plugin", "1"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn should_be_empty_after_reset() {
        let mut catalog = EventCatalog::new();
        catalog.append(event("Workflow", "1"));
        catalog.reset();
        assert!(catalog.is_empty());
    }
}
