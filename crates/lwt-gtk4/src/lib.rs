//! lwt GTK4 - GTK4 and VTE backend for lwt-core
//!
//! Builds the window around a `vte4::Terminal`, implements the lwt-core
//! host traits on it, wires toolkit signals into the core dispatcher and
//! starts the shell.

mod app;
mod host;
mod input;
mod spawn;
mod terminal;
mod window;

pub use app::run;
pub use input::{key_press, modifiers_from_gdk};
pub use window::TerminalWindow;

// Re-export lwt-core types for convenience
pub use lwt_core::*;
