//! lwt - a lightweight GTK4 terminal
//!
//! This crate ties together:
//! - configuration and theme loading with per-key defaults
//! - a toolkit-agnostic shortcut and event dispatch table
//! - the GTK4/VTE window, transparency and shell spawn

pub mod logging;

// Re-export main types for convenience
pub use lwt_core::{
    Color, Config, Dispatcher, Event, EventResult, KeyPress, Modifiers, Settings,
    SpawnCommand, TerminalError, TerminalResult, Theme,
};
pub use lwt_core::{constants, dummy_backend, keymap, settings, source};
pub use lwt_gtk4::{run, TerminalWindow};
