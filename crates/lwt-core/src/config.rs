// src/config.rs
use std::path::Path;

use tracing::warn;

use crate::settings::{user_shell, Settings};
use crate::source::{load_key_file, ConfigSource};
use crate::theme::Theme;

/// Everything read from the config file, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub settings: Settings,
    pub theme: Option<Theme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            theme: None,
        }
    }
}

impl Config {
    /// Load from a config file on disk. A missing file gives the defaults.
    pub fn load(path: &Path) -> Self {
        Self::from_source(&load_key_file(path), &user_shell())
    }

    /// Resolve settings and theme from any key/value source.
    ///
    /// An incomplete theme is dropped with a warning.
    pub fn from_source(src: &impl ConfigSource, default_shell: &str) -> Self {
        let settings = Settings::from_source(src, default_shell);
        let theme = Theme::load(src).unwrap_or_else(|e| {
            warn!("{}; using default colors", e);
            None
        });
        Self { settings, theme }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::key_file_from_str;

    #[test]
    fn incomplete_theme_is_dropped_but_settings_survive() {
        let kf = key_file_from_str("[lwt]\nopacity = 0.5\n[theme]\nfg = white\n");
        let config = Config::from_source(&kf, "/bin/sh");
        assert_eq!(config.settings.opacity, 0.5);
        assert_eq!(config.theme, None);
    }

    #[test]
    fn loading_twice_is_identical() {
        let kf = key_file_from_str("[lwt]\nfont = Hack 9\n[theme]\nfg = white\nbg = black\n0 = red\n1 = red\n2 = red\n3 = red\n4 = red\n5 = red\n6 = red\n7 = red\n");
        let a = Config::from_source(&kf, "/bin/sh");
        let b = Config::from_source(&kf, "/bin/sh");
        assert_eq!(a, b);
        assert_eq!(a.theme.map(|t| t.palette_size()), Some(8));
    }
}
