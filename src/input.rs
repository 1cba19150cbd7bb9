//! Keyboard-shortcut mapping table.
//!
//! The hosting shell consults the table on raw key events and invokes the
//! named controller operation itself; the controller never sees key codes.
//! Shortcuts are suppressed while an input-capturing element holds focus.

/// Named operations the shell can trigger from a shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the new-task form
    NewTask,
    /// Toggle focus mode
    ToggleFocus,
    /// Move keyboard focus to the search field
    FocusSearch,
    /// Open the shortcuts overlay
    ShowShortcuts,
    /// Close the active overlay / exit focus mode
    Escape,
}

/// A raw key event as the shell reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
}

/// One entry in the shortcut table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub key: Key,
    pub action: Action,
    /// Shown in the shortcuts overlay
    pub description: &'static str,
}

/// The shortcut table consulted by the hosting shell
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Default for Keymap {
    fn default() -> Self {
        Keymap {
            bindings: vec![
                Binding {
                    key: Key::Char('n'),
                    action: Action::NewTask,
                    description: "New task",
                },
                Binding {
                    key: Key::Char('f'),
                    action: Action::ToggleFocus,
                    description: "Focus mode",
                },
                Binding {
                    key: Key::Char('/'),
                    action: Action::FocusSearch,
                    description: "Search",
                },
                Binding {
                    key: Key::Char('?'),
                    action: Action::ShowShortcuts,
                    description: "Shortcuts",
                },
                Binding {
                    key: Key::Escape,
                    action: Action::Escape,
                    description: "Close / exit",
                },
            ],
        }
    }
}

impl Keymap {
    /// Resolve a key event to an action.
    ///
    /// Returns `None` while a text input holds focus, and for unbound keys.
    /// Character matches are case-insensitive.
    pub fn lookup(&self, key: Key, text_input_active: bool) -> Option<Action> {
        if text_input_active {
            return None;
        }
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.action)
    }

    /// All bindings, for the shortcuts overlay listing
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
