//! Dummy backend for testing dispatch without GTK

use crate::traits::{Clipboard, TerminalControl, WindowControl};

/// A host operation, recorded in call order
#[derive(Clone, Debug, PartialEq)]
pub enum HostOp {
    CopySelection,
    Paste,
    CopyText(String),
    Reset,
    FeedChild(Vec<u8>),
    SetFontScale(f64),
    SetUrgent(bool),
    RefreshVisual,
    Quit,
}

/// A rectangular hyperlink hit area in widget coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct LinkArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub uri: String,
}

impl LinkArea {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Dummy host that records operations for testing
#[derive(Clone, Debug)]
pub struct RecordingHost {
    pub ops: Vec<HostOp>,
    pub font_scale: f64,
    pub selection: bool,
    pub active: bool,
    pub urgent: bool,
    pub quit: bool,
    pub links: Vec<LinkArea>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        RecordingHost {
            ops: Vec::new(),
            font_scale: 1.0,
            selection: false,
            active: true,
            urgent: false,
            quit: false,
            links: Vec::new(),
        }
    }

    pub fn with_selection(mut self) -> Self {
        self.selection = true;
        self
    }

    pub fn unfocused(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn with_link(mut self, x: f64, y: f64, width: f64, height: f64, uri: &str) -> Self {
        self.links.push(LinkArea {
            x,
            y,
            width,
            height,
            uri: uri.to_string(),
        });
        self
    }

    /// Bytes written to the child so far
    pub fn fed_bytes(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                HostOp::FeedChild(data) => Some(data.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

impl Clipboard for RecordingHost {
    fn copy_selection(&mut self) {
        self.ops.push(HostOp::CopySelection);
    }

    fn paste(&mut self) {
        self.ops.push(HostOp::Paste);
    }

    fn copy_text(&mut self, text: &str) {
        self.ops.push(HostOp::CopyText(text.to_string()));
    }
}

impl TerminalControl for RecordingHost {
    fn reset(&mut self) {
        self.ops.push(HostOp::Reset);
    }

    fn feed_child(&mut self, data: &[u8]) {
        self.ops.push(HostOp::FeedChild(data.to_vec()));
    }

    fn font_scale(&self) -> f64 {
        self.font_scale
    }

    fn set_font_scale(&mut self, scale: f64) {
        self.font_scale = scale;
        self.ops.push(HostOp::SetFontScale(scale));
    }

    fn has_selection(&self) -> bool {
        self.selection
    }

    fn hyperlink_at(&self, x: f64, y: f64) -> Option<String> {
        self.links
            .iter()
            .find(|l| l.contains(x, y))
            .map(|l| l.uri.clone())
    }
}

impl WindowControl for RecordingHost {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_urgent(&mut self, urgent: bool) {
        self.urgent = urgent;
        self.ops.push(HostOp::SetUrgent(urgent));
    }

    fn refresh_visual(&mut self) {
        self.ops.push(HostOp::RefreshVisual);
    }

    fn quit(&mut self) {
        self.quit = true;
        self.ops.push(HostOp::Quit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut host = RecordingHost::new();
        host.reset();
        host.feed_child(b"\x0c");
        host.set_font_scale(2.0);
        assert_eq!(
            host.ops,
            vec![HostOp::Reset, HostOp::FeedChild(vec![0x0c]), HostOp::SetFontScale(2.0)]
        );
        assert_eq!(host.font_scale(), 2.0);
        assert_eq!(host.fed_bytes(), vec![0x0c]);
    }

    #[test]
    fn link_hit_testing() {
        let host = RecordingHost::new().with_link(10.0, 20.0, 50.0, 16.0, "https://example.com");
        assert_eq!(host.hyperlink_at(10.0, 20.0).as_deref(), Some("https://example.com"));
        assert_eq!(host.hyperlink_at(59.9, 35.9).as_deref(), Some("https://example.com"));
        assert_eq!(host.hyperlink_at(60.0, 20.0), None);
        assert_eq!(host.hyperlink_at(0.0, 0.0), None);
    }
}
