//! Terminal-backed surfaces for the presenter.

use fieldscope_app::ports::Surface;

/// In-memory surface the composition root reads back and prints.
///
/// Width is measured in characters of the longest line unless the presenter
/// has constrained it explicitly.
#[derive(Debug)]
pub struct TermSurface {
    text: String,
    visible: bool,
    width_override: Option<u32>,
}

impl Default for TermSurface {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: true,
            width_override: None,
        }
    }
}

impl TermSurface {
    /// The surface's current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the surface is currently shown.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

impl Surface for TermSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_width(&mut self, width: u32) {
        self.width_override = Some(width);
    }

    fn width(&self) -> u32 {
        self.width_override.unwrap_or_else(|| {
            self.text
                .lines()
                .map(|line| u32::try_from(line.chars().count()).unwrap_or(u32::MAX))
                .max()
                .unwrap_or(0)
        })
    }
}
