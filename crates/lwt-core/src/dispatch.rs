//! Event dispatch
//!
//! Toolkit signals are turned into [`Event`]s by the backend and routed
//! here. Handlers are stateless: the outcome depends only on the event,
//! the keymap, the settings captured at startup and what the host reports.

use tracing::{debug, trace};

use crate::constants::{FONT_SCALE_STEP, FORM_FEED, SECONDARY_BUTTON};
use crate::keymap::{Action, KeyPress, Keymap};
use crate::settings::Settings;
use crate::traits::Host;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    KeyPress(KeyPress),
    ButtonPress { button: u32, x: f64, y: f64 },
    SelectionChanged,
    Bell,
    FocusIn,
    ScreenChanged,
    ChildExited { status: i32 },
    CloseRequested,
}

/// Whether an event was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop propagation
    Handled,
    /// Event was ignored; let the toolkit continue
    Ignored,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self == EventResult::Handled
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dispatcher {
    keymap: Keymap,
    select_to_clipboard: bool,
}

impl Dispatcher {
    pub fn new(settings: &Settings) -> Self {
        Self::with_keymap(Keymap::default(), settings)
    }

    pub fn with_keymap(keymap: Keymap, settings: &Settings) -> Self {
        Self {
            keymap,
            select_to_clipboard: settings.select_to_clipboard,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn dispatch<H: Host + ?Sized>(&self, event: &Event, host: &mut H) -> EventResult {
        trace!("dispatching {:?}", event);
        match *event {
            Event::KeyPress(ref press) => match self.keymap.lookup(press) {
                Some(action) => {
                    debug!("{:?} -> {:?}", press, action);
                    perform(action, host);
                    EventResult::Handled
                }
                None => EventResult::Ignored,
            },
            Event::ButtonPress { button, x, y } => {
                if button != SECONDARY_BUTTON {
                    return EventResult::Ignored;
                }
                match host.hyperlink_at(x, y) {
                    Some(uri) => {
                        debug!("copying hyperlink {}", uri);
                        host.copy_text(&uri);
                        EventResult::Handled
                    }
                    None => EventResult::Ignored,
                }
            }
            Event::SelectionChanged => {
                let copy = self.select_to_clipboard && host.has_selection();
                if copy {
                    host.copy_selection();
                }
                copy.into()
            }
            Event::Bell => {
                let unfocused = !host.is_active();
                if unfocused {
                    host.set_urgent(true);
                }
                unfocused.into()
            }
            Event::FocusIn => {
                host.set_urgent(false);
                EventResult::Handled
            }
            Event::ScreenChanged => {
                host.refresh_visual();
                EventResult::Handled
            }
            Event::ChildExited { status } => {
                debug!("shell exited with status {}", status);
                host.quit();
                EventResult::Handled
            }
            Event::CloseRequested => {
                host.quit();
                EventResult::Handled
            }
        }
    }
}

fn perform<H: Host + ?Sized>(action: Action, host: &mut H) {
    match action {
        Action::CopySelection => host.copy_selection(),
        Action::PasteClipboard => host.paste(),
        Action::ClearShell => {
            host.reset();
            host.feed_child(&[FORM_FEED]);
        }
        Action::ZoomIn => {
            let scale = host.font_scale() * FONT_SCALE_STEP;
            host.set_font_scale(scale);
        }
        Action::ZoomOut => {
            let scale = host.font_scale() / FONT_SCALE_STEP;
            host.set_font_scale(scale);
        }
    }
}
