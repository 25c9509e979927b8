use anyhow::Result;

/// Window style requested for a popup.
///
/// `Csd` asks the toolkit for a client-side decorated window that matches the
/// system tooltip look. Not every backend can provide one, so creation is
/// retried with `Plain` before giving up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PopupKind {
    Csd,
    Plain,
}

/// One on-screen popup window. Dropping the value destroys the window.
pub trait PopupSurface {
    /// Replace the text shown in the popup.
    fn set_text(&mut self, text: &str);

    /// Current top-left corner of the window in root coordinates.
    fn position(&self) -> (i32, i32);

    /// Current size of the window.
    fn size(&self) -> (i32, i32);

    /// Move the window to an absolute position.
    fn move_to(&mut self, x: i32, y: i32);

    /// Map the window and raise it above other surfaces.
    fn present(&mut self);

    /// Register a handler invoked when the window receives a button press.
    fn connect_click(&mut self, handler: Box<dyn Fn() + 'static>);
}

/// Toolkit seam of the host panel: creates popup windows and knows where a
/// new popup should appear relative to the panel's last docked item.
pub trait Shell: 'static {
    type Surface: PopupSurface + 'static;

    /// Create a borderless, always-on-top popup styled as a tooltip.
    fn create_popup(&mut self, kind: PopupKind) -> Result<Self::Surface>;

    /// Initial position for a popup of `size` next to the panel's anchor
    /// item, respecting the panel edge.
    fn anchor_position(&self, size: (i32, i32)) -> (i32, i32);
}
