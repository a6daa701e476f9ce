//! Shell spawn inside the terminal widget

use std::cell::Cell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::gio;
use tracing::{error, info};
use vte4::prelude::*;

use lwt_core::{SpawnCommand, TerminalError};

use crate::window::TerminalWindow;

/// Start the shell asynchronously.
///
/// The window is presented once the shell is running. A spawn failure is
/// fatal: it is logged, `failed` is set and the application quits.
pub fn spawn_shell(tw: &TerminalWindow, command: &SpawnCommand, failed: Rc<Cell<bool>>) {
    let argv = command.argv_refs();
    let program = command.program().to_string();
    let window = tw.window().clone();

    info!("spawning {:?} (timeout {} ms)", command.argv, command.timeout_ms());
    tw.terminal().spawn_async(
        vte4::PtyFlags::DEFAULT,
        None,
        &argv,
        &[],
        glib::SpawnFlags::SEARCH_PATH,
        || {},
        command.timeout_ms(),
        None::<&gio::Cancellable>,
        move |result| match result {
            Ok(pid) => {
                info!("shell {} started (pid {:?})", program, pid);
                window.present();
            }
            Err(e) => {
                let err = TerminalError::ProcessSpawnFailed {
                    program,
                    message: e.to_string(),
                };
                error!("{}", err);
                failed.set(true);
                match window.application() {
                    Some(app) => app.quit(),
                    None => window.close(),
                }
            }
        },
    );
}
