//! Disclosure presenter — the two-state toggle that reveals the report.
//!
//! The presenter owns a label surface and a content surface. Formatter
//! output replaces both surfaces' text on every run regardless of state;
//! only user activation changes visibility.

use fieldscope_domain::report::Report;

use crate::ports::Surface;

/// Visibility state of the content surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureState {
    /// Initial state: only the label is visible.
    Collapsed,
    /// The content surface is revealed, sized to the label's width.
    Expanded,
}

/// Two-state machine driving the label and content surfaces.
///
/// There is no terminal state; the machine persists for the component's
/// lifetime and is discarded at teardown.
#[derive(Debug)]
pub struct DisclosurePresenter<S> {
    label: S,
    content: S,
    state: DisclosureState,
}

impl<S: Surface> DisclosurePresenter<S> {
    /// Create a collapsed presenter over the given surfaces. The content
    /// surface starts hidden.
    pub fn new(label: S, mut content: S) -> Self {
        content.set_visible(false);
        Self {
            label,
            content,
            state: DisclosureState::Collapsed,
        }
    }

    /// Current visibility state.
    #[must_use]
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// Replace both surfaces' text with the latest report. Visibility is
    /// untouched by data updates.
    pub fn render(&mut self, report: &Report) {
        self.label.set_text(&report.label);
        self.content.set_text(&report.content);
    }

    /// Handle a user activation of the label surface.
    pub fn toggle(&mut self) {
        match self.state {
            DisclosureState::Collapsed => {
                self.content.set_width(self.label.width());
                self.content.set_visible(true);
                self.state = DisclosureState::Expanded;
            }
            DisclosureState::Expanded => {
                self.content.set_visible(false);
                self.state = DisclosureState::Collapsed;
            }
        }
    }

    /// The label surface.
    #[must_use]
    pub fn label_surface(&self) -> &S {
        &self.label
    }

    /// The content surface.
    #[must_use]
    pub fn content_surface(&self) -> &S {
        &self.content
    }
}
