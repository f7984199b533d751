//! Surface port — the two rectangles of host UI the presenter writes into.

/// A text surface owned by the host platform.
///
/// The presenter treats surfaces as write-mostly: it replaces text on every
/// formatter run and flips visibility/width on user activation. Reading back
/// is limited to the rendered width, which sizes the content surface when it
/// is revealed.
pub trait Surface: Send {
    /// Replace the surface's text.
    fn set_text(&mut self, text: &str);

    /// Show or hide the surface.
    fn set_visible(&mut self, visible: bool);

    /// Constrain the surface to the given rendered width.
    fn set_width(&mut self, width: u32);

    /// The surface's current rendered width.
    fn width(&self) -> u32;
}
