//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions for the results pane.
///
/// Provides default vim-style bindings. Keys typed into the search input
/// never reach this table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Event kind and state are ignored. A shifted symbol (`?` arrives as
    /// Shift+`?` on some terminals) falls back to its unshifted binding.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let normalized = KeyEvent::new(key.code, key.modifiers);
        self.bindings.get(&normalized).copied().or_else(|| {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                self.bindings.get(&unshifted).copied()
            } else {
                None
            }
        })
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Row cursor
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::SelectNext);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::SelectPrev);
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::SelectFirst);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::SelectFirst);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);
        keys.bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::SelectLast);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::SelectLast);

        // Rows
        keys.bind(KeyCode::Enter, KeyModifiers::NONE, KeyAction::Activate);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::Activate);
        keys.bind(KeyCode::Char('o'), KeyModifiers::NONE, KeyAction::OpenRepository);

        // Focus
        keys.bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::FocusSearch);
        keys.bind(KeyCode::Char('i'), KeyModifiers::NONE, KeyAction::FocusSearch);
        keys.bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::FocusSearch);

        // Application controls
        keys.bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Refresh);
        keys.bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);

        keys
    }
}
