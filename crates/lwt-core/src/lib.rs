//! lwt core - GTK-agnostic model of the lwt terminal front-end
//!
//! Everything the terminal window needs before it exists lives here:
//! resolving settings and the color theme from the configuration file,
//! the key binding table, event dispatch over abstract host capabilities,
//! and building the shell command line. The GTK4 backend only translates
//! toolkit events into [`Event`]s and implements the [`Host`] traits.

pub mod color;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod dummy_backend;
pub mod error;
pub mod keymap;
pub mod settings;
pub mod source;
pub mod spawn;
pub mod theme;
pub mod traits;

// Re-export main types
pub use color::Color;
pub use config::Config;
pub use dispatch::{Dispatcher, Event, EventResult};
pub use error::{TerminalError, TerminalResult};
pub use keymap::{Action, KeyBinding, KeyPress, Keymap, ModifierMatch, Modifiers};
pub use settings::{Scrollback, Settings, SpawnTimeout, Transparency};
pub use source::ConfigSource;
pub use spawn::SpawnCommand;
pub use theme::Theme;

pub use traits::*;
