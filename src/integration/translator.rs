//! Key event to message translation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::msg::{form::FormMsg, system::SystemMsg, theme::ThemeMsg, Msg};
use crate::infrastructure::config::{KeyAction, KeyBindings};

/// Bound keys win; unbound printable keys edit the focused field, so the
/// defaults only bind keys typing never produces on its own.
pub fn translate_key(key: KeyEvent, bindings: &KeyBindings) -> Option<Msg> {
    if let Some(action) = bindings.get(&vec![key]) {
        return Some(action_to_msg(*action));
    }

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Msg::Form(FormMsg::Input(c)))
        }
        KeyCode::Backspace => Some(Msg::Form(FormMsg::Backspace)),
        _ => None,
    }
}

pub fn action_to_msg(action: KeyAction) -> Msg {
    match action {
        KeyAction::Quit => Msg::System(SystemMsg::Quit),
        KeyAction::Suspend => Msg::System(SystemMsg::Suspend),
        KeyAction::ToggleDarkMode => Msg::Theme(ThemeMsg::Toggle),
        KeyAction::ToggleRevealPassword => Msg::Form(FormMsg::ToggleVisibility),
        KeyAction::NextField => Msg::Form(FormMsg::FocusNext),
        KeyAction::PrevField => Msg::Form(FormMsg::FocusPrev),
        KeyAction::Submit => Msg::Form(FormMsg::Submit),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::infrastructure::config::Config;

    use super::*;

    fn default_bindings() -> KeyBindings {
        Config::new().expect("defaults must load").keybindings
    }

    #[test]
    fn test_bound_key_becomes_action_message() {
        let bindings = default_bindings();
        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);

        assert_eq!(
            translate_key(key, &bindings),
            Some(Msg::Theme(ThemeMsg::Toggle))
        );
    }

    #[test]
    fn test_printable_key_edits_field() {
        let bindings = default_bindings();

        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            translate_key(key, &bindings),
            Some(Msg::Form(FormMsg::Input('a')))
        );

        // Shifted characters still type.
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            translate_key(key, &bindings),
            Some(Msg::Form(FormMsg::Input('A')))
        );
    }

    #[test]
    fn test_unbound_control_key_is_ignored() {
        let bindings = default_bindings();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);

        assert_eq!(translate_key(key, &bindings), None);
    }

    #[test]
    fn test_backspace_without_binding_deletes() {
        let bindings = default_bindings();
        let key = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);

        assert_eq!(
            translate_key(key, &bindings),
            Some(Msg::Form(FormMsg::Backspace))
        );
    }
}
