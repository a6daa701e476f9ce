//! Top-level window assembly and transparency

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use tracing::{debug, warn};

use lwt_core::constants::APP_NAME;
use lwt_core::{Config, TerminalError, Transparency};

use crate::terminal::new_terminal;

const TRANSPARENT_CLASS: &str = "lwt-transparent";

/// The application window and the terminal it holds
#[derive(Clone)]
pub struct TerminalWindow {
    window: ApplicationWindow,
    terminal: vte4::Terminal,
    css: CssProvider,
    transparency: Transparency,
}

impl TerminalWindow {
    /// Build the window and terminal. The window stays hidden until the
    /// shell has started.
    pub fn new(app: &Application, config: &Config) -> Self {
        let window = ApplicationWindow::builder()
            .application(app)
            .title(APP_NAME)
            .build();

        let terminal = new_terminal(config);
        window.set_child(Some(&terminal));

        let css = CssProvider::new();
        css.load_from_data(&format!(
            "window.{TRANSPARENT_CLASS} {{ background-color: transparent; }}"
        ));

        let display = WidgetExt::display(&window);
        let transparency = config.settings.transparency(display.is_composited());

        let tw = TerminalWindow {
            window,
            terminal,
            css,
            transparency,
        };
        tw.apply_transparency();
        terminal_grab_focus(&tw.terminal);
        tw
    }

    pub fn window(&self) -> &ApplicationWindow {
        &self.window
    }

    pub fn terminal(&self) -> &vte4::Terminal {
        &self.terminal
    }

    fn apply_transparency(&self) {
        match self.transparency {
            Transparency::Opaque => {}
            Transparency::Unavailable => {
                warn!("{} (e.g. xcompmgr)", TerminalError::CompositingUnavailable);
            }
            Transparency::Apply(opacity) => {
                debug!("enabling transparency at opacity {}", opacity);
                self.window.add_css_class(TRANSPARENT_CLASS);
                self.update_visuals();
                self.window.set_opacity(opacity);
            }
        }
    }

    /// Let the window's current display draw a see-through background.
    pub(crate) fn update_visuals(&self) {
        if !matches!(self.transparency, Transparency::Apply(_)) {
            return;
        }
        let display = WidgetExt::display(&self.window);
        if !display.is_composited() {
            warn!("{}; new display keeps the window opaque", TerminalError::CompositingUnavailable);
            return;
        }
        add_provider(&display, &self.css);
    }
}

fn add_provider(display: &gdk::Display, css: &CssProvider) {
    gtk4::style_context_add_provider_for_display(
        display,
        css,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn terminal_grab_focus(terminal: &vte4::Terminal) {
    terminal.set_focusable(true);
    terminal.grab_focus();
}
