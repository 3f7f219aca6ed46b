// SPDX-License-Identifier: MPL-2.0
//! Global keyboard shortcuts.
//!
//! This is the only place keys are bound to actions. The footer lists the
//! same table through [`BINDINGS`].

use iced::keyboard::{self, Key, Modifiers};

/// An action reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePreview,
    CycleColor,
    CycleTheme,
}

impl Action {
    /// Footer label key for this action.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Action::TogglePreview => "footer-keymap-toggle",
            Action::CycleColor => "footer-keymap-color",
            Action::CycleTheme => "footer-keymap-theme",
        }
    }
}

/// An Alt+letter shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Lowercase ASCII letter.
    pub letter: char,
    pub action: Action,
}

impl Binding {
    /// Label shown in the footer, e.g. `Alt+Q`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Alt+{}", self.letter.to_ascii_uppercase())
    }
}

/// Every binding, in footer order. Routing reads the same table.
pub const BINDINGS: [Binding; 3] = [
    Binding {
        letter: 'q',
        action: Action::TogglePreview,
    },
    Binding {
        letter: 'w',
        action: Action::CycleColor,
    },
    Binding {
        letter: 't',
        action: Action::CycleTheme,
    },
];

/// Resolves a key press to an action. Letters match in either case.
#[must_use]
pub fn action_for(key: &Key, modifiers: Modifiers) -> Option<Action> {
    if !modifiers.alt() || modifiers.control() || modifiers.logo() {
        return None;
    }

    let Key::Character(c) = key else {
        return None;
    };

    let mut chars = c.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let letter = letter.to_ascii_lowercase();

    BINDINGS
        .iter()
        .find(|binding| binding.letter == letter)
        .map(|binding| binding.action)
}

/// Resolves a keyboard event, ignoring releases.
#[must_use]
pub fn action_for_event(event: &keyboard::Event) -> Option<Action> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => action_for(key, *modifiers),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn every_footer_label_routes_to_its_action() {
        for binding in BINDINGS {
            let label = binding.label();
            let letter = label.strip_prefix("Alt+").expect("alt label");
            assert_eq!(action_for(&key(letter), Modifiers::ALT), Some(binding.action));
        }
    }

    #[test]
    fn labels_are_upper_case() {
        assert_eq!(BINDINGS[0].label(), "Alt+Q");
    }

    #[test]
    fn alt_letters_map_to_actions() {
        assert_eq!(
            action_for(&key("q"), Modifiers::ALT),
            Some(Action::TogglePreview)
        );
        assert_eq!(action_for(&key("w"), Modifiers::ALT), Some(Action::CycleColor));
        assert_eq!(action_for(&key("t"), Modifiers::ALT), Some(Action::CycleTheme));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            action_for(&key("Q"), Modifiers::ALT | Modifiers::SHIFT),
            Some(Action::TogglePreview)
        );
        assert_eq!(action_for(&key("T"), Modifiers::ALT), Some(Action::CycleTheme));
    }

    #[test]
    fn letters_without_alt_are_ignored() {
        assert_eq!(action_for(&key("q"), Modifiers::empty()), None);
        assert_eq!(action_for(&key("w"), Modifiers::SHIFT), None);
    }

    #[test]
    fn other_chords_are_ignored() {
        assert_eq!(action_for(&key("q"), Modifiers::ALT | Modifiers::CTRL), None);
        assert_eq!(action_for(&key("x"), Modifiers::ALT), None);
        assert_eq!(
            action_for(&Key::Named(keyboard::key::Named::Enter), Modifiers::ALT),
            None
        );
    }

    #[test]
    fn bindings_cover_each_action_once() {
        let actions: Vec<Action> = BINDINGS.iter().map(|binding| binding.action).collect();
        assert_eq!(
            actions,
            vec![Action::TogglePreview, Action::CycleColor, Action::CycleTheme]
        );
    }
}
