//! Resolved runtime settings
//!
//! Each setting is looked up independently in the `[lwt]` section and
//! falls back to its built-in default when absent or malformed.

use tracing::debug;

use crate::constants::{
    DEFAULT_FONT, DEFAULT_OPACITY, DEFAULT_SCROLLBACK_LINES, DEFAULT_SELECT_TO_CLIPBOARD,
    FALLBACK_SHELL, NO_SPAWN_TIMEOUT, SETTINGS_SECTION, UNLIMITED_SCROLLBACK,
};
use crate::source::ConfigSource;

/// Scrollback history length
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scrollback {
    Unlimited,
    Lines(u64),
}

impl Scrollback {
    /// Negative config values mean unlimited.
    pub fn from_config(value: i64) -> Self {
        u64::try_from(value).map_or(Scrollback::Unlimited, Scrollback::Lines)
    }

    /// Value for `vte_terminal_set_scrollback_lines`, where -1 is unlimited.
    pub fn as_vte_lines(self) -> i64 {
        match self {
            Scrollback::Unlimited => UNLIMITED_SCROLLBACK,
            Scrollback::Lines(n) => i64::try_from(n).unwrap_or(i64::MAX),
        }
    }
}

impl Default for Scrollback {
    fn default() -> Self {
        Scrollback::Lines(DEFAULT_SCROLLBACK_LINES)
    }
}

/// How long the terminal widget may take to start the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpawnTimeout {
    #[default]
    Unbounded,
    Millis(u32),
}

impl SpawnTimeout {
    /// Negative values mean no timeout; values that do not fit a GLib
    /// timeout are rejected.
    pub fn from_config(value: i64) -> Option<Self> {
        if value < 0 {
            return Some(SpawnTimeout::Unbounded);
        }
        i32::try_from(value)
            .ok()
            .and_then(|ms| u32::try_from(ms).ok())
            .map(SpawnTimeout::Millis)
    }

    /// Timeout argument for `spawn_async`, -1 meaning none.
    pub fn as_millis_i32(self) -> i32 {
        match self {
            SpawnTimeout::Unbounded => NO_SPAWN_TIMEOUT,
            SpawnTimeout::Millis(ms) => i32::try_from(ms).unwrap_or(i32::MAX),
        }
    }
}

/// What to do about window transparency
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transparency {
    /// Opacity is 1.0; nothing to do
    Opaque,
    /// Transparency was requested but the display cannot composite
    Unavailable,
    /// Make the window translucent at this opacity
    Apply(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub font: String,
    pub shell: String,
    pub opacity: f64,
    pub scrollback: Scrollback,
    pub spawn_timeout: SpawnTimeout,
    pub select_to_clipboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_shell(&user_shell())
    }
}

impl Settings {
    /// Built-in defaults with the given default shell.
    pub fn with_shell(shell: &str) -> Self {
        Self {
            font: DEFAULT_FONT.to_string(),
            shell: shell.to_string(),
            opacity: DEFAULT_OPACITY,
            scrollback: Scrollback::default(),
            spawn_timeout: SpawnTimeout::default(),
            select_to_clipboard: DEFAULT_SELECT_TO_CLIPBOARD,
        }
    }

    /// Resolve settings from `src`, using the user's shell as the shell default.
    pub fn load(src: &impl ConfigSource) -> Self {
        Self::from_source(src, &user_shell())
    }

    /// Resolve settings from `src`. Every key defaults on its own.
    pub fn from_source(src: &impl ConfigSource, default_shell: &str) -> Self {
        let defaults = Self::with_shell(default_shell);
        let section = SETTINGS_SECTION;

        let font = non_empty(src.string(section, "font")).unwrap_or_else(|| {
            log_default("font");
            defaults.font.clone()
        });

        let shell = non_empty(src.string(section, "shell")).unwrap_or_else(|| {
            log_default("shell");
            defaults.shell.clone()
        });

        let opacity = src
            .double(section, "opacity")
            .filter(|v| v.is_finite())
            .map(|v| v.clamp(0.0, 1.0))
            .unwrap_or_else(|| {
                log_default("opacity");
                defaults.opacity
            });

        let scrollback = src
            .integer(section, "scrollback")
            .map(Scrollback::from_config)
            .unwrap_or_else(|| {
                log_default("scrollback");
                defaults.scrollback
            });

        let spawn_timeout = src
            .integer(section, "spawn_timeout")
            .and_then(SpawnTimeout::from_config)
            .unwrap_or_else(|| {
                log_default("spawn_timeout");
                defaults.spawn_timeout
            });

        let select_to_clipboard = src
            .boolean(section, "select_to_clipboard")
            .unwrap_or_else(|| {
                log_default("select_to_clipboard");
                defaults.select_to_clipboard
            });

        Self {
            font,
            shell,
            opacity,
            scrollback,
            spawn_timeout,
            select_to_clipboard,
        }
    }

    /// Decide how to handle transparency given whether the display composites.
    pub fn transparency(&self, composited: bool) -> Transparency {
        if self.opacity >= 1.0 {
            Transparency::Opaque
        } else if !composited {
            Transparency::Unavailable
        } else {
            Transparency::Apply(self.opacity)
        }
    }
}

/// Default shell: follows `$SHELL`, else `/bin/bash`.
///
/// The passwd entry is not consulted.
pub fn user_shell() -> String {
    shell_from(std::env::var("SHELL").ok())
}

/// `var` when set and non-blank, else `/bin/bash`.
pub fn shell_from(var: Option<String>) -> String {
    non_empty(var).unwrap_or_else(|| FALLBACK_SHELL.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn log_default(key: &str) {
    debug!("setting {}.{} absent or malformed; using default", SETTINGS_SECTION, key);
}
