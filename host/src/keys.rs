use shared::Led;

/// With `ISIG` cleared, Ctrl-C arrives as a plain byte.
const CTRL_C: u8 = 0x03;

/// What a keypress means to the interactive tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Toggle(Led),
    Quit,
}

#[must_use]
pub fn action_for_key(byte: u8) -> Option<Action> {
    match byte {
        b'1'..=b'4' => Led::try_from(byte - b'1').ok().map(Action::Toggle),
        b'q' | CTRL_C => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use shared::Led;

    use super::{Action, action_for_key};

    #[test]
    fn test_digit_keys_toggle_in_panel_order() {
        assert_eq!(action_for_key(b'1'), Some(Action::Toggle(Led::Led1)));
        assert_eq!(action_for_key(b'2'), Some(Action::Toggle(Led::Led2)));
        assert_eq!(action_for_key(b'3'), Some(Action::Toggle(Led::Led3)));
        assert_eq!(action_for_key(b'4'), Some(Action::Toggle(Led::Led4)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(b'q'), Some(Action::Quit));
        assert_eq!(action_for_key(0x03), Some(Action::Quit));
    }

    #[test]
    fn test_other_keys_ignored() {
        for byte in [b'0', b'5', b'Q', b' ', b'\n', 0xFF] {
            assert_eq!(action_for_key(byte), None);
        }
    }
}
