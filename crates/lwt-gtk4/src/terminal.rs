//! VTE terminal widget setup

use gtk4::gdk;
use gtk4::prelude::*;
use tracing::debug;
use vte4::prelude::*;

use lwt_core::{Config, Settings, Theme};

/// Create the terminal widget with settings and theme applied.
pub fn new_terminal(config: &Config) -> vte4::Terminal {
    let terminal = vte4::Terminal::new();
    terminal.set_hexpand(true);
    terminal.set_vexpand(true);

    apply_settings(&terminal, &config.settings);
    if let Some(theme) = &config.theme {
        apply_theme(&terminal, theme);
    }
    terminal.set_allow_hyperlink(true);

    terminal
}

pub fn apply_settings(terminal: &vte4::Terminal, settings: &Settings) {
    let font = pango::FontDescription::from_string(&settings.font);
    terminal.set_font(Some(&font));
    terminal.set_scrollback_lines(settings.scrollback.as_vte_lines());
}

pub fn apply_theme(terminal: &vte4::Terminal, theme: &Theme) {
    let fg: gdk::RGBA = theme.foreground.into();
    let bg: gdk::RGBA = theme.background.into();
    let palette: Vec<gdk::RGBA> = theme.palette.iter().copied().map(Into::into).collect();
    let palette: Vec<&gdk::RGBA> = palette.iter().collect();

    debug!("applying theme with {} palette entries", palette.len());
    terminal.set_colors(Some(&fg), Some(&bg), &palette);
    terminal.set_bold_is_bright(theme.bold_is_bright);
}
