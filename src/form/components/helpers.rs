use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a key press to `buffer`, where `cursor` is a char offset.
/// Returns `true` when the buffer contents changed.
pub(crate) fn handle_text_edit(buffer: &mut String, cursor: &mut usize, key: &KeyEvent) -> bool {
    let len = buffer.chars().count();
    *cursor = (*cursor).min(len);
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let changed = !buffer.is_empty();
            buffer.clear();
            *cursor = 0;
            changed
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            let at = byte_offset(buffer, *cursor);
            buffer.insert(at, ch);
            *cursor += 1;
            true
        }
        KeyCode::Backspace => {
            if *cursor == 0 {
                return false;
            }
            let at = byte_offset(buffer, *cursor - 1);
            buffer.remove(at);
            *cursor -= 1;
            true
        }
        KeyCode::Delete => {
            if *cursor >= len {
                return false;
            }
            let at = byte_offset(buffer, *cursor);
            buffer.remove(at);
            true
        }
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            false
        }
        KeyCode::Right => {
            *cursor = (*cursor + 1).min(len);
            false
        }
        KeyCode::Home => {
            *cursor = 0;
            false
        }
        KeyCode::End => {
            *cursor = len;
            false
        }
        _ => false,
    }
}

fn byte_offset(buffer: &str, chars: usize) -> usize {
    buffer
        .char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(buffer.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn inserts_at_cursor_and_handles_multibyte() {
        let mut buffer = String::from("héllo");
        let mut cursor = 2;
        assert!(handle_text_edit(&mut buffer, &mut cursor, &key(KeyCode::Char('X'))));
        assert_eq!(buffer, "héXllo");
        assert_eq!(cursor, 3);
        assert!(handle_text_edit(&mut buffer, &mut cursor, &key(KeyCode::Backspace)));
        assert!(handle_text_edit(&mut buffer, &mut cursor, &key(KeyCode::Backspace)));
        assert_eq!(buffer, "hllo");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn cursor_moves_do_not_report_changes() {
        let mut buffer = String::from("abc");
        let mut cursor = 3;
        assert!(!handle_text_edit(&mut buffer, &mut cursor, &key(KeyCode::Home)));
        assert_eq!(cursor, 0);
        assert!(!handle_text_edit(&mut buffer, &mut cursor, &key(KeyCode::Backspace)));
        assert!(handle_text_edit(&mut buffer, &mut cursor, &key(KeyCode::Delete)));
        assert_eq!(buffer, "bc");
    }

    #[test]
    fn control_chords_are_not_inserted() {
        let mut buffer = String::from("abc");
        let mut cursor = 3;
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!handle_text_edit(&mut buffer, &mut cursor, &save));
        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(handle_text_edit(&mut buffer, &mut cursor, &clear));
        assert!(buffer.is_empty());
        assert_eq!(cursor, 0);
    }
}
