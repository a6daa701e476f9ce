//! Host capabilities the dispatcher drives
//!
//! The GTK backend implements these on top of the window and the VTE
//! widget; tests use the recording backend in [`crate::dummy_backend`].

/// Clipboard operations for terminal applications
pub trait Clipboard {
    /// Copy the current selection as plain text
    fn copy_selection(&mut self);
    /// Paste the clipboard contents into the terminal
    fn paste(&mut self);
    /// Put arbitrary text on the clipboard
    fn copy_text(&mut self, text: &str);
}

/// Operations on the terminal widget itself
pub trait TerminalControl {
    /// Reset terminal state, clearing tabstops and history
    fn reset(&mut self);
    /// Write raw bytes to the child's PTY
    fn feed_child(&mut self, data: &[u8]);
    fn font_scale(&self) -> f64;
    fn set_font_scale(&mut self, scale: f64);
    fn has_selection(&self) -> bool;
    /// Hyperlink target under widget coordinates, if any
    fn hyperlink_at(&self, x: f64, y: f64) -> Option<String>;
}

/// Operations on the top-level window and application
pub trait WindowControl {
    /// Whether the window currently holds input focus
    fn is_active(&self) -> bool;
    fn set_urgent(&mut self, urgent: bool);
    /// Re-apply the translucent surface setup after a display change
    fn refresh_visual(&mut self);
    /// Leave the main loop
    fn quit(&mut self);
}

/// Everything an event handler may need
pub trait Host: Clipboard + TerminalControl + WindowControl {}

impl<T: Clipboard + TerminalControl + WindowControl + ?Sized> Host for T {}
