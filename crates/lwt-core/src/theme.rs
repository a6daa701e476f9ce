//! All-or-nothing color theme
//!
//! A theme is only produced when the foreground, the background and every
//! palette entry parse. Anything less is reported as
//! [`TerminalError::IncompleteTheme`] and the terminal keeps its built-in
//! colors.

use tracing::{debug, trace};

use crate::color::Color;
use crate::constants::{DEFAULT_BOLD_IS_BRIGHT, LEGACY_THEME_SECTION, PALETTE_SIZES, THEME_SECTION};
use crate::error::{TerminalError, TerminalResult};
use crate::source::ConfigSource;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
    /// 0, 8, 16, 232 or 256 entries
    pub palette: Vec<Color>,
    /// Legacy compatibility: bold also makes colors bright (ANSI 8-15 instead of 0-7)
    pub bold_is_bright: bool,
}

impl Theme {
    /// Load the theme section of `src`.
    ///
    /// Returns `Ok(None)` when there is no theme section at all.
    pub fn load(src: &impl ConfigSource) -> TerminalResult<Option<Theme>> {
        let Some(section) = theme_section(src) else {
            return Ok(None);
        };

        let size = probe_palette_size(src, section);
        debug!("theme section [{}] declares a {}-color palette", section, size);

        let mut missing = 0;
        let mut palette = Vec::with_capacity(size);
        for i in 0..size {
            match load_color(src, section, &i.to_string()) {
                Some(c) => palette.push(c),
                None => missing += 1,
            }
        }
        let foreground = load_color(src, section, "fg");
        let background = load_color(src, section, "bg");
        missing += usize::from(foreground.is_none()) + usize::from(background.is_none());

        let bold_is_bright = src
            .boolean(section, "bold_is_bright")
            .unwrap_or(DEFAULT_BOLD_IS_BRIGHT);

        match (foreground, background) {
            (Some(foreground), Some(background)) if missing == 0 => Ok(Some(Theme {
                foreground,
                background,
                palette,
                bold_is_bright,
            })),
            _ => Err(TerminalError::IncompleteTheme { missing }),
        }
    }

    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }
}

/// The section holding the theme: `[theme]`, or the older `[color]`.
pub fn theme_section(src: &impl ConfigSource) -> Option<&'static str> {
    [THEME_SECTION, LEGACY_THEME_SECTION]
        .into_iter()
        .find(|s| src.has_section(s))
}

/// Largest palette size whose marker chain is unbroken.
///
/// Each size is unlocked by the key naming the previous size: `0` gives 8,
/// `8` gives 16, `16` gives 232 and `232` gives 256. The first missing
/// marker ends the probe.
pub fn probe_palette_size(src: &impl ConfigSource, section: &str) -> usize {
    let mut size = PALETTE_SIZES[0];
    for pair in PALETTE_SIZES.windows(2) {
        if !src.has_key(section, &pair[0].to_string()) {
            break;
        }
        size = pair[1];
    }
    size
}

fn load_color(src: &impl ConfigSource, section: &str, key: &str) -> Option<Color> {
    let value = src.string(section, key)?;
    match Color::parse(&value) {
        Ok(c) => Some(c),
        Err(e) => {
            trace!("[{}] {}: {}", section, key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::key_file_from_str;

    fn palette_lines(section: &str, n: usize) -> String {
        let mut s = format!("[{section}]\nfg = #ffffff\nbg = #000000\n");
        for i in 0..n {
            s.push_str(&format!("{i} = #{:02x}{:02x}{:02x}\n", i, i, i));
        }
        s
    }

    #[test]
    fn no_section_no_theme() {
        let kf = key_file_from_str("[lwt]\nfont = Hack 9\n");
        assert_eq!(Theme::load(&kf), Ok(None));
    }

    #[test]
    fn sixteen_colors() {
        let kf = key_file_from_str(&palette_lines("theme", 16));
        let theme = Theme::load(&kf).unwrap().unwrap();
        assert_eq!(theme.palette_size(), 16);
        assert_eq!(theme.foreground, Color::rgb(1.0, 1.0, 1.0));
        assert_eq!(theme.background, Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(theme.palette[0], Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(theme.palette[15], Color::parse("#0f0f0f").unwrap());
        assert!(!theme.bold_is_bright);
    }

    #[test]
    fn probe_sizes() {
        for (n, expected) in [(0, 0), (8, 8), (16, 16), (232, 232), (256, 256)] {
            let kf = key_file_from_str(&palette_lines("theme", n));
            assert_eq!(probe_palette_size(&kf, "theme"), expected, "{n} keys");
        }
    }

    #[test]
    fn probe_stops_at_gap() {
        // "0" and "8" present, "16" absent, "232" present
        let kf = key_file_from_str("[theme]\n0 = red\n8 = red\n232 = red\n");
        assert_eq!(probe_palette_size(&kf, "theme"), 16);
    }

    #[test]
    fn missing_palette_entry_rejects_whole_theme() {
        let data = palette_lines("theme", 16).replace("5 = #050505\n", "");
        let kf = key_file_from_str(&data);
        assert_eq!(Theme::load(&kf), Err(TerminalError::IncompleteTheme { missing: 1 }));
    }

    #[test]
    fn missing_fg_and_bg_counted() {
        let kf = key_file_from_str("[theme]\nbold_is_bright = true\n");
        assert_eq!(Theme::load(&kf), Err(TerminalError::IncompleteTheme { missing: 2 }));
    }

    #[test]
    fn invalid_color_rejects_whole_theme() {
        let data = palette_lines("theme", 8).replace("bg = #000000", "bg = pitch-black");
        let kf = key_file_from_str(&data);
        assert_eq!(Theme::load(&kf), Err(TerminalError::IncompleteTheme { missing: 1 }));
    }

    #[test]
    fn fg_bg_only_is_zero_palette() {
        let kf = key_file_from_str("[theme]\nfg = white\nbg = black\nbold_is_bright = true\n");
        let theme = Theme::load(&kf).unwrap().unwrap();
        assert_eq!(theme.palette_size(), 0);
        assert!(theme.bold_is_bright);
    }

    #[test]
    fn legacy_color_section() {
        let kf = key_file_from_str(&palette_lines("color", 8));
        assert_eq!(theme_section(&kf), Some("color"));
        assert_eq!(Theme::load(&kf).unwrap().unwrap().palette_size(), 8);
    }

    #[test]
    fn theme_section_wins_over_legacy() {
        let mut data = palette_lines("theme", 16);
        data.push_str(&palette_lines("color", 8));
        let kf = key_file_from_str(&data);
        assert_eq!(Theme::load(&kf).unwrap().unwrap().palette_size(), 16);
    }

    #[test]
    fn malformed_bold_is_bright_defaults() {
        let kf = key_file_from_str("[theme]\nfg = white\nbg = black\nbold_is_bright = sometimes\n");
        assert!(!Theme::load(&kf).unwrap().unwrap().bold_is_bright);
    }
}
