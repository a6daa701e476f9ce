//! Keyboard shortcut table
//!
//! Bindings are plain data: a modifier condition, the keys that trigger it
//! and the resulting [`Action`]. Lookup is first match in table order, so
//! exact Ctrl+Shift bindings are listed before the looser Ctrl ones.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys that take part in shortcut matching.
    ///
    /// Lock keys (Caps, Num) are deliberately absent so they never change
    /// the meaning of a shortcut.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT   = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT     = 1 << 2;
        const SUPER   = 1 << 3;
        const HYPER   = 1 << 4;
        const META    = 1 << 5;
    }
}

/// Something a shortcut asks the host to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Copy the selection to the clipboard as plain text
    CopySelection,
    /// Paste the clipboard into the terminal
    PasteClipboard,
    /// Reset the terminal and send a form feed to the shell
    ClearShell,
    /// Grow the font scale by one step
    ZoomIn,
    /// Shrink the font scale by one step
    ZoomOut,
}

/// How a binding's modifiers compare to the pressed ones
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifierMatch {
    /// Pressed modifiers equal these exactly
    Exact(Modifiers),
    /// Pressed modifiers include at least these
    Includes(Modifiers),
}

impl ModifierMatch {
    pub fn matches(self, pressed: Modifiers) -> bool {
        match self {
            ModifierMatch::Exact(m) => pressed == m,
            ModifierMatch::Includes(m) => pressed.contains(m),
        }
    }
}

/// A key press reduced to the character it produces and its modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: char, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: ModifierMatch,
    pub keys: &'static [char],
    pub action: Action,
}

impl KeyBinding {
    pub const fn new(modifiers: ModifierMatch, keys: &'static [char], action: Action) -> Self {
        Self { modifiers, keys, action }
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        self.modifiers.matches(press.modifiers) && self.keys.contains(&press.key)
    }
}

const CTRL_SHIFT: Modifiers = Modifiers::CONTROL.union(Modifiers::SHIFT);

const DEFAULT_BINDINGS: [KeyBinding; 5] = [
    KeyBinding::new(ModifierMatch::Exact(CTRL_SHIFT), &['C', 'c'], Action::CopySelection),
    KeyBinding::new(ModifierMatch::Exact(CTRL_SHIFT), &['V', 'v'], Action::PasteClipboard),
    KeyBinding::new(ModifierMatch::Exact(CTRL_SHIFT), &['L', 'l'], Action::ClearShell),
    KeyBinding::new(ModifierMatch::Includes(Modifiers::CONTROL), &['+'], Action::ZoomIn),
    KeyBinding::new(ModifierMatch::Includes(Modifiers::CONTROL), &['-'], Action::ZoomOut),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: DEFAULT_BINDINGS.to_vec(),
        }
    }
}

impl Keymap {
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    pub fn lookup(&self, press: &KeyPress) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.matches(press))
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: char, modifiers: Modifiers) -> KeyPress {
        KeyPress::new(key, modifiers)
    }

    #[test]
    fn ctrl_shift_shortcuts_either_case() {
        let km = Keymap::default();
        for (keys, action) in [
            (['C', 'c'], Action::CopySelection),
            (['V', 'v'], Action::PasteClipboard),
            (['L', 'l'], Action::ClearShell),
        ] {
            for k in keys {
                assert_eq!(km.lookup(&press(k, CTRL_SHIFT)), Some(action), "{k}");
            }
        }
    }

    #[test]
    fn ctrl_shift_requires_exact_mask() {
        let km = Keymap::default();
        assert_eq!(km.lookup(&press('c', Modifiers::CONTROL)), None);
        assert_eq!(km.lookup(&press('C', Modifiers::SHIFT)), None);
        assert_eq!(km.lookup(&press('c', CTRL_SHIFT | Modifiers::ALT)), None);
    }

    #[test]
    fn zoom_accepts_extra_modifiers() {
        let km = Keymap::default();
        assert_eq!(km.lookup(&press('+', Modifiers::CONTROL)), Some(Action::ZoomIn));
        // '+' usually needs Shift on the keyboard
        assert_eq!(km.lookup(&press('+', CTRL_SHIFT)), Some(Action::ZoomIn));
        assert_eq!(km.lookup(&press('-', Modifiers::CONTROL)), Some(Action::ZoomOut));
        assert_eq!(km.lookup(&press('+', Modifiers::empty())), None);
    }

    #[test]
    fn plain_keys_are_not_bound() {
        let km = Keymap::default();
        assert_eq!(km.lookup(&press('l', Modifiers::empty())), None);
        assert_eq!(km.lookup(&press('x', CTRL_SHIFT)), None);
    }

    #[test]
    fn custom_table_first_match_wins() {
        let km = Keymap::new(vec![
            KeyBinding::new(ModifierMatch::Includes(Modifiers::ALT), &['z'], Action::ZoomOut),
            KeyBinding::new(ModifierMatch::Includes(Modifiers::empty()), &['z'], Action::ZoomIn),
        ]);
        assert_eq!(km.lookup(&press('z', Modifiers::ALT)), Some(Action::ZoomOut));
        assert_eq!(km.lookup(&press('z', Modifiers::empty())), Some(Action::ZoomIn));
        assert_eq!(km.bindings().len(), 2);
    }
}
