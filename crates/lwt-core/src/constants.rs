// src/constants.rs

// Application identity
pub const APP_NAME: &str = "lwt";
pub const APP_ID: &str = "io.github.lwt";

// Config file location, relative to the user's home directory
pub const CONFIG_RELATIVE_PATH: &str = ".config/lwt/lwt.conf";

// Section names
pub const SETTINGS_SECTION: &str = "lwt";
pub const THEME_SECTION: &str = "theme";
pub const LEGACY_THEME_SECTION: &str = "color";

// Fallback options if not present in config file
pub const DEFAULT_FONT: &str = "Monospace 9";
pub const FALLBACK_SHELL: &str = "/bin/bash";
pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DEFAULT_SCROLLBACK_LINES: u64 = 1_000_000;
pub const DEFAULT_SELECT_TO_CLIPBOARD: bool = false;
pub const DEFAULT_BOLD_IS_BRIGHT: bool = false;

// VTE / GLib sentinels
pub const UNLIMITED_SCROLLBACK: i64 = -1;
pub const NO_SPAWN_TIMEOUT: i32 = -1;

// Palette sizes VTE accepts. Zero keeps the built-in palette.
pub const PALETTE_SIZES: [usize; 5] = [0, 8, 16, 232, 256];

// Input
pub const FONT_SCALE_STEP: f64 = 1.1;
pub const FORM_FEED: u8 = 0x0c;
pub const SECONDARY_BUTTON: u32 = 3;
