use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::app::Action;

/// A key combination
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Context for keybindings
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Global,
    Home,
}

/// Keybinding configuration
pub struct KeyBindings {
    bindings: HashMap<KeyContext, HashMap<KeyBinding, Action>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        // Global bindings
        let mut global = HashMap::new();
        global.insert(KeyBinding::new(KeyCode::Char('?')), Action::ToggleHelp);
        global.insert(KeyBinding::new(KeyCode::Esc), Action::Back);
        global.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        global.insert(KeyBinding::new(KeyCode::Char('q')), Action::Quit);
        bindings.insert(KeyContext::Global, global);

        // Home screen bindings - less-like navigation of the activity log
        let mut home = HashMap::new();
        home.insert(KeyBinding::new(KeyCode::Char('j')), Action::ScrollDown(1));
        home.insert(KeyBinding::new(KeyCode::Down), Action::ScrollDown(1));
        home.insert(KeyBinding::new(KeyCode::Char('k')), Action::ScrollUp(1));
        home.insert(KeyBinding::new(KeyCode::Up), Action::ScrollUp(1));
        home.insert(KeyBinding::ctrl(KeyCode::Char('f')), Action::PageDown);
        home.insert(KeyBinding::ctrl(KeyCode::Char('b')), Action::PageUp);
        home.insert(KeyBinding::ctrl(KeyCode::Char('d')), Action::PageDown);
        home.insert(KeyBinding::ctrl(KeyCode::Char('u')), Action::PageUp);
        home.insert(KeyBinding::new(KeyCode::PageDown), Action::PageDown);
        home.insert(KeyBinding::new(KeyCode::PageUp), Action::PageUp);
        home.insert(KeyBinding::new(KeyCode::Char('g')), Action::ScrollToTop);
        home.insert(KeyBinding::shift(KeyCode::Char('G')), Action::ScrollToBottom);
        home.insert(KeyBinding::new(KeyCode::Home), Action::ScrollToTop);
        home.insert(KeyBinding::new(KeyCode::End), Action::ScrollToBottom);
        bindings.insert(KeyContext::Home, home);

        Self { bindings }
    }

    /// Look up action for key event in given context
    pub fn get_action(&self, context: KeyContext, key: &KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(key);

        // First check context-specific bindings
        if let Some(context_bindings) = self.bindings.get(&context) {
            if let Some(action) = context_bindings.get(&binding) {
                return Some(action.clone());
            }
        }

        // Fall back to global bindings
        self.bindings
            .get(&KeyContext::Global)?
            .get(&binding)
            .cloned()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_binding_wins_over_global() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        let action = bindings.get_action(KeyContext::Home, &key);
        assert!(matches!(action, Some(Action::ScrollDown(1))));
    }

    #[test]
    fn test_global_fallback() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let action = bindings.get_action(KeyContext::Home, &key);
        assert!(matches!(action, Some(Action::Quit)));
    }

    #[test]
    fn test_unbound_key() {
        let bindings = KeyBindings::new();
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert!(bindings.get_action(KeyContext::Home, &key).is_none());
    }
}
