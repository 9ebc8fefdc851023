use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::lesson::{Command, Section};

/// Translates a key press into a lesson command.
///
/// `F1`..`F12` jump directly to the section at that position in `sections`.
/// In a quiz, `1`..`9` choose an answer of the focused question by position.
pub fn command_for_key(key: &KeyEvent, sections: &[Section], active: Section) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if ctrl => Command::Quit,
        KeyCode::Char('r') if ctrl => Command::FillExample,
        KeyCode::Char('u') if ctrl => Command::ClearField,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch @ '1'..='9') if active.is_quiz() => {
            Command::Choose(ch as usize - '1' as usize)
        }
        KeyCode::Char(ch) => Command::Insert(ch),
        KeyCode::Backspace => Command::Backspace,
        KeyCode::Enter => Command::Submit,
        KeyCode::Tab | KeyCode::Down => Command::NextField,
        KeyCode::BackTab | KeyCode::Up => Command::PrevField,
        KeyCode::PageDown => Command::NextSection,
        KeyCode::PageUp => Command::PrevSection,
        KeyCode::Right if ctrl => Command::NextSection,
        KeyCode::Left if ctrl => Command::PrevSection,
        KeyCode::F(n) => {
            let section = sections.get(usize::from(n).checked_sub(1)?)?;
            Command::ShowSection(*section)
        }
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [Section; 5] = [
        Section::Histogram,
        Section::Center,
        Section::Spread,
        Section::ZScore,
        Section::Quiz(0),
    ];

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn on_form(key: &KeyEvent) -> Option<Command> {
        command_for_key(key, &SECTIONS, Section::Histogram)
    }

    #[test]
    fn test_typing() {
        assert_eq!(
            on_form(&key(KeyCode::Char('7'))),
            Some(Command::Insert('7'))
        );
        assert_eq!(
            on_form(&key(KeyCode::Char(','))),
            Some(Command::Insert(','))
        );
        assert_eq!(on_form(&key(KeyCode::Backspace)), Some(Command::Backspace));
    }

    #[test]
    fn test_quiz_digits_choose() {
        assert_eq!(
            command_for_key(&key(KeyCode::Char('2')), &SECTIONS, Section::Quiz(0)),
            Some(Command::Choose(1))
        );
        assert_eq!(
            command_for_key(&key(KeyCode::Char('0')), &SECTIONS, Section::Quiz(0)),
            Some(Command::Insert('0'))
        );
        assert_eq!(
            command_for_key(&key(KeyCode::Char('b')), &SECTIONS, Section::Quiz(0)),
            Some(Command::Insert('b'))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(on_form(&ctrl(KeyCode::Char('c'))), Some(Command::Quit));
        assert_eq!(
            on_form(&ctrl(KeyCode::Char('r'))),
            Some(Command::FillExample)
        );
        assert_eq!(on_form(&ctrl(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_section_keys() {
        assert_eq!(
            on_form(&key(KeyCode::F(5))),
            Some(Command::ShowSection(Section::Quiz(0)))
        );
        assert_eq!(on_form(&key(KeyCode::F(6))), None);
        assert_eq!(on_form(&key(KeyCode::F(0))), None);
        assert_eq!(on_form(&key(KeyCode::PageDown)), Some(Command::NextSection));
        assert_eq!(on_form(&ctrl(KeyCode::Left)), Some(Command::PrevSection));
        assert_eq!(on_form(&key(KeyCode::Left)), None);
    }
}
