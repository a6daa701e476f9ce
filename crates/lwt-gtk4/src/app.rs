//! Application entry: one window, one terminal, one shell

use std::cell::Cell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gio, Application};
use tracing::debug;

use lwt_core::constants::{APP_ID, APP_NAME};
use lwt_core::{Config, Dispatcher, SpawnCommand};

use crate::input::connect_handlers;
use crate::spawn::spawn_shell;
use crate::window::TerminalWindow;

/// Run the terminal until the window closes or the shell exits.
///
/// Blocks the calling thread in the GTK main loop. Returns failure when
/// the shell could not be started.
pub fn run(config: Config, command: SpawnCommand) -> glib::ExitCode {
    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let spawn_failed = Rc::new(Cell::new(false));
    let failed = Rc::clone(&spawn_failed);
    app.connect_activate(move |app| {
        build_ui(app, &config, &command, Rc::clone(&failed));
    });

    // Our own arguments belong to the shell, not to GTK
    let code = app.run_with_args(&[APP_NAME]);
    if spawn_failed.get() {
        glib::ExitCode::FAILURE
    } else {
        code
    }
}

fn build_ui(app: &Application, config: &Config, command: &SpawnCommand, failed: Rc<Cell<bool>>) {
    debug!("building window: {:?}", config.settings);
    let tw = TerminalWindow::new(app, config);
    let dispatcher = Rc::new(Dispatcher::new(&config.settings));
    connect_handlers(&tw, dispatcher);
    spawn_shell(&tw, command, failed);
}
