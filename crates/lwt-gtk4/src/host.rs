//! lwt-core host capabilities backed by GTK and VTE

use gtk4::prelude::*;
use tracing::debug;
use vte4::prelude::*;

use lwt_core::{Clipboard, TerminalControl, WindowControl};

use crate::window::TerminalWindow;

impl Clipboard for TerminalWindow {
    fn copy_selection(&mut self) {
        self.terminal().copy_clipboard_format(vte4::Format::Text);
    }

    fn paste(&mut self) {
        self.terminal().paste_clipboard();
    }

    fn copy_text(&mut self, text: &str) {
        self.terminal().clipboard().set_text(text);
    }
}

impl TerminalControl for TerminalWindow {
    fn reset(&mut self) {
        self.terminal().reset(true, true);
    }

    fn feed_child(&mut self, data: &[u8]) {
        self.terminal().feed_child(data);
    }

    fn font_scale(&self) -> f64 {
        self.terminal().font_scale()
    }

    fn set_font_scale(&mut self, scale: f64) {
        self.terminal().set_font_scale(scale);
    }

    fn has_selection(&self) -> bool {
        self.terminal().has_selection()
    }

    fn hyperlink_at(&self, x: f64, y: f64) -> Option<String> {
        self.terminal()
            .check_hyperlink_at(x, y)
            .map(|uri| uri.to_string())
    }
}

impl WindowControl for TerminalWindow {
    fn is_active(&self) -> bool {
        self.window().is_active()
    }

    fn set_urgent(&mut self, urgent: bool) {
        #[cfg(target_os = "linux")]
        {
            let x11 = self
                .window()
                .surface()
                .and_downcast::<gdk4_x11::X11Surface>();
            if let Some(surface) = x11 {
                surface.set_urgency_hint(urgent);
                return;
            }
        }
        debug!("urgency hint ({}) not supported on this display", urgent);
    }

    fn refresh_visual(&mut self) {
        self.update_visuals();
    }

    fn quit(&mut self) {
        match self.window().application() {
            Some(app) => app.quit(),
            None => self.window().close(),
        }
    }
}
