//! Signal wiring: GTK events in, lwt-core events out

use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{gdk, EventControllerKey, EventSequenceState, GestureClick, PropagationPhase};
use vte4::prelude::*;

use lwt_core::{Dispatcher, Event, EventResult, KeyPress, Modifiers};

use crate::window::TerminalWindow;

/// Reduce GDK modifier state to the modifiers shortcuts care about.
///
/// Mirrors GTK's default accelerator mask: lock keys are dropped.
pub fn modifiers_from_gdk(state: gdk::ModifierType) -> Modifiers {
    let table = [
        (gdk::ModifierType::SHIFT_MASK, Modifiers::SHIFT),
        (gdk::ModifierType::CONTROL_MASK, Modifiers::CONTROL),
        (gdk::ModifierType::ALT_MASK, Modifiers::ALT),
        (gdk::ModifierType::SUPER_MASK, Modifiers::SUPER),
        (gdk::ModifierType::HYPER_MASK, Modifiers::HYPER),
        (gdk::ModifierType::META_MASK, Modifiers::META),
    ];
    table
        .into_iter()
        .filter(|(g, _)| state.contains(*g))
        .fold(Modifiers::empty(), |acc, (_, m)| acc | m)
}

/// Keys without a printable character never match a shortcut.
pub fn key_press(keyval: gdk::Key, state: gdk::ModifierType) -> Option<KeyPress> {
    keyval
        .to_unicode()
        .map(|ch| KeyPress::new(ch, modifiers_from_gdk(state)))
}

fn propagation(result: EventResult) -> glib::Propagation {
    match result {
        EventResult::Handled => glib::Propagation::Stop,
        EventResult::Ignored => glib::Propagation::Proceed,
    }
}

/// Connect every window and terminal signal to `dispatcher`.
pub fn connect_handlers(tw: &TerminalWindow, dispatcher: Rc<Dispatcher>) {
    setup_keyboard(tw, Rc::clone(&dispatcher));
    setup_mouse(tw, Rc::clone(&dispatcher));
    setup_terminal_signals(tw, Rc::clone(&dispatcher));
    setup_window_signals(tw, dispatcher);
}

fn setup_keyboard(tw: &TerminalWindow, dispatcher: Rc<Dispatcher>) {
    // capture phase: shortcuts run before the terminal sees the key
    let keys = EventControllerKey::new();
    keys.set_propagation_phase(PropagationPhase::Capture);

    let host = tw.clone();
    keys.connect_key_pressed(move |_, keyval, _keycode, state| {
        let Some(press) = key_press(keyval, state) else {
            return glib::Propagation::Proceed;
        };
        propagation(dispatcher.dispatch(&Event::KeyPress(press), &mut host.clone()))
    });

    tw.window().add_controller(keys);
}

fn setup_mouse(tw: &TerminalWindow, dispatcher: Rc<Dispatcher>) {
    let click = GestureClick::new();
    click.set_button(gdk::BUTTON_SECONDARY);
    click.set_propagation_phase(PropagationPhase::Capture);

    let host = tw.clone();
    click.connect_pressed(move |gesture, _n_press, x, y| {
        let event = Event::ButtonPress {
            button: gesture.current_button(),
            x,
            y,
        };
        if dispatcher.dispatch(&event, &mut host.clone()).is_handled() {
            gesture.set_state(EventSequenceState::Claimed);
        }
    });

    tw.terminal().add_controller(click);
}

fn setup_terminal_signals(tw: &TerminalWindow, dispatcher: Rc<Dispatcher>) {
    let terminal = tw.terminal();

    let (d, host) = (Rc::clone(&dispatcher), tw.clone());
    terminal.connect_selection_changed(move |_| {
        d.dispatch(&Event::SelectionChanged, &mut host.clone());
    });

    let (d, host) = (Rc::clone(&dispatcher), tw.clone());
    terminal.connect_bell(move |_| {
        d.dispatch(&Event::Bell, &mut host.clone());
    });

    let host = tw.clone();
    terminal.connect_child_exited(move |_, status| {
        dispatcher.dispatch(&Event::ChildExited { status }, &mut host.clone());
    });
}

fn setup_window_signals(tw: &TerminalWindow, dispatcher: Rc<Dispatcher>) {
    let window = tw.window();

    let (d, host) = (Rc::clone(&dispatcher), tw.clone());
    window.connect_is_active_notify(move |w| {
        if w.is_active() {
            d.dispatch(&Event::FocusIn, &mut host.clone());
        }
    });

    let (d, host) = (Rc::clone(&dispatcher), tw.clone());
    window.connect_notify_local(Some("display"), move |_, _| {
        d.dispatch(&Event::ScreenChanged, &mut host.clone());
    });

    let host = tw.clone();
    window.connect_close_request(move |_| {
        dispatcher.dispatch(&Event::CloseRequested, &mut host.clone());
        glib::Propagation::Proceed
    });
}
