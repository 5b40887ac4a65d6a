mod common;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::{MemoryStore, group};
use repogroups::domain::Repository;
use repogroups::form::{FieldView, FocusMode, UiEvent};
use repogroups::{ConfigureGroup, MessageKind, Transition};

const REPOSITORY_TAB: usize = 7;

fn press(code: KeyCode) -> UiEvent {
    UiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> UiEvent {
    UiEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn editor(repositories: &[&str]) -> ConfigureGroup {
    ConfigureGroup::new(group("platform", repositories), Duration::from_millis(500))
}

fn send(editor: &mut ConfigureGroup, store: &mut MemoryStore, events: &[UiEvent]) {
    for event in events {
        editor.handle_event(event, store);
    }
}

#[test]
fn starts_on_first_tab_with_first_field_focused() {
    let editor = editor(&[]);
    assert_eq!(editor.active_tab(), 0);
    assert_eq!(editor.focused_index(), 0);
    assert_eq!(editor.mode(), FocusMode::Navigation);
    assert_eq!(editor.focused_count(0), 1);
    assert!(editor.blink_deadline().is_some(), "text field focus schedules a blink");
}

#[test]
fn advance_then_retreat_restores_focus() {
    let mut editor = editor(&[]);
    let count = editor.component_count(0);
    for _ in 0..count {
        editor.advance_focus();
        assert!(editor.focused_count(0) <= 1);
    }
    assert_eq!(editor.focused_index(), 0, "advance wraps around");
    editor.advance_focus();
    editor.retreat_focus();
    assert_eq!(editor.focused_index(), 0);
    editor.retreat_focus();
    assert_eq!(editor.focused_index(), count - 1);
    assert_eq!(editor.focused_count(0), 1);
}

#[test]
fn switch_tab_wraps_around() {
    let mut editor = editor(&["api"]);
    let tabs = editor.tab_count();
    for _ in 0..tabs {
        editor.switch_tab(1);
        assert_eq!(editor.focused_index(), 0);
    }
    assert_eq!(editor.active_tab(), 0);
    editor.switch_tab(-1);
    assert_eq!(editor.active_tab(), tabs - 1);
    for tab in 0..tabs {
        assert!(editor.focused_count(tab) <= 1);
    }
}

#[test]
fn empty_tabs_show_placeholder_and_ignore_focus_moves() {
    let mut editor = editor(&[]);
    editor.switch_tab(3);
    assert_eq!(editor.component_count(3), 0);
    editor.advance_focus();
    editor.retreat_focus();
    assert_eq!(editor.focused_index(), 0);
    let view = editor.view();
    assert_eq!(
        view.body.placeholder,
        Some("Not supported yet or no fields available in this tab.")
    );
}

#[test]
fn editing_text_writes_into_group_and_done_returns_to_navigation() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&[]);
    send(
        &mut editor,
        &mut store,
        &[
            press(KeyCode::Enter),
            press(KeyCode::Char('p')),
            press(KeyCode::Char('u')),
            press(KeyCode::Char('b')),
        ],
    );
    assert_eq!(editor.mode(), FocusMode::Editing);
    assert_eq!(editor.group().manifest.spec.visibility, "pub");
    send(&mut editor, &mut store, &[press(KeyCode::Enter)]);
    assert_eq!(editor.mode(), FocusMode::Navigation);
    assert_eq!(editor.focused_count(0), 0, "done blurs the field");
    send(&mut editor, &mut store, &[press(KeyCode::Char('j'))]);
    assert_eq!(editor.focused_index(), 1);
    assert_eq!(editor.focused_count(0), 1);
}

#[test]
fn arrows_move_focus_while_editing() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&[]);
    send(&mut editor, &mut store, &[press(KeyCode::Char('i')), press(KeyCode::Down)]);
    assert_eq!(editor.mode(), FocusMode::Editing);
    assert_eq!(editor.focused_index(), 1);
    send(&mut editor, &mut store, &[press(KeyCode::Esc)]);
    assert_eq!(editor.mode(), FocusMode::Navigation);
}

#[test]
fn checkbox_tab_toggles_through_keyboard() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&[]);
    send(
        &mut editor,
        &mut store,
        &[press(KeyCode::Char('l')), press(KeyCode::Enter), press(KeyCode::Char(' '))],
    );
    assert_eq!(editor.active_tab(), 1);
    assert_eq!(editor.group().manifest.spec.has_issues, Some(true));
}

#[test]
fn save_reports_success_and_failure() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&[]);
    send(&mut editor, &mut store, &[ctrl('s')]);
    let message = editor.message().expect("save message");
    assert_eq!(message.kind, MessageKind::Info);
    assert_eq!(message.text, "Group 'platform' saved successfully.");
    assert_eq!(store.saved.len(), 1);

    send(&mut editor, &mut store, &[press(KeyCode::Char('j'))]);
    assert!(editor.message().is_none(), "messages clear on the next key");

    store.fail_saves = true;
    send(&mut editor, &mut store, &[ctrl('s')]);
    let message = editor.message().expect("failure message");
    assert_eq!(message.kind, MessageKind::Error);
    assert!(message.text.starts_with("Error saving group 'platform':"));
    assert_eq!(editor.active_tab(), 0);
}

#[test]
fn escape_and_q_leave_the_editor() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&[]);
    assert_eq!(editor.handle_event(&press(KeyCode::Esc), &mut store), Transition::Menu);
    assert_eq!(editor.handle_event(&press(KeyCode::Char('q')), &mut store), Transition::Quit);
}

#[test]
fn repository_tab_forces_navigation() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&["api"]);
    send(&mut editor, &mut store, &[press(KeyCode::Char('h'))]);
    assert_eq!(editor.active_tab(), REPOSITORY_TAB);
    assert_eq!(editor.mode(), FocusMode::Navigation);
    assert!(editor.view().status.starts_with("[REPO Mode]"));
}

#[test]
fn modal_edits_are_visible_in_the_list() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&["api", "web"]);
    editor.switch_tab(-1);
    send(&mut editor, &mut store, &[press(KeyCode::Down), press(KeyCode::Enter)]);
    assert!(editor.modal_open());
    assert!(editor.view().status.starts_with("[REPO Edit]"));

    send(
        &mut editor,
        &mut store,
        &[
            press(KeyCode::Char('-')),
            press(KeyCode::Char('2')),
            press(KeyCode::Down),
            press(KeyCode::Down),
            press(KeyCode::Char(' ')),
            press(KeyCode::Enter),
        ],
    );
    assert!(!editor.modal_open());
    assert_eq!(editor.active_tab(), REPOSITORY_TAB);
    let repositories = &editor.group().manifest.spec.repositories;
    assert_eq!(repositories[1].name, "web-2");
    assert_eq!(repositories[1].archived, Some(true));
    assert_eq!(repositories[0], Repository::new("api", ""));

    let view = editor.view();
    let FieldView::Repositories { entries, selected, .. } = &view.body.fields[0] else {
        panic!("repository tab renders the list");
    };
    assert_eq!(entries, &vec!["api".to_string(), "web-2".to_string()]);
    assert_eq!(*selected, 1);
    let preview = view.body.preview.expect("focused list previews the selection");
    assert!(preview.contains(&"Archived: yes".to_string()));
}

#[test]
fn modal_escape_returns_to_group_fields() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&["api"]);
    editor.switch_tab(-1);
    send(
        &mut editor,
        &mut store,
        &[press(KeyCode::Enter), press(KeyCode::Char('x')), press(KeyCode::Esc)],
    );
    assert!(!editor.modal_open());
    assert_eq!(editor.active_tab(), 0);
    assert_eq!(editor.group().manifest.spec.repositories[0].name, "apix");
}

#[test]
fn modal_swallows_tab_switching_keys() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&["api"]);
    editor.switch_tab(-1);
    send(&mut editor, &mut store, &[press(KeyCode::Enter), press(KeyCode::Right)]);
    assert!(editor.modal_open());
    assert_eq!(editor.active_tab(), REPOSITORY_TAB);
}

#[test]
fn zero_repositories_render_placeholder_and_ignore_navigation() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&[]);
    editor.switch_tab(-1);
    send(
        &mut editor,
        &mut store,
        &[press(KeyCode::Down), press(KeyCode::Up), press(KeyCode::Enter)],
    );
    assert!(!editor.modal_open());
    assert!(editor.message().is_none());
    let view = editor.view();
    let FieldView::Repositories { entries, .. } = &view.body.fields[0] else {
        panic!("repository tab renders the list");
    };
    assert!(entries.is_empty());
    assert_eq!(view.body.preview, None);
}

#[test]
fn pending_repository_is_added_and_selected() {
    let mut editor = editor(&["api"]);
    editor.add_repository(Repository::new("svc", "Service"));
    assert_eq!(editor.active_tab(), REPOSITORY_TAB);
    assert_eq!(editor.group().manifest.spec.repositories.len(), 2);
    let message = editor.message().expect("info message");
    assert_eq!(message.kind, MessageKind::Info);
    let view = editor.view();
    let FieldView::Repositories { selected, .. } = &view.body.fields[0] else {
        panic!("repository tab renders the list");
    };
    assert_eq!(*selected, 1);
}

#[test]
fn blink_tick_rearms_on_field_tabs_only() {
    let mut store = MemoryStore::default();
    let mut editor = editor(&["api"]);
    let deadline = editor.blink_deadline().expect("armed at start");
    editor.tick(deadline, &mut store);
    let next = editor.blink_deadline().expect("re-armed after tick");
    assert!(next > deadline);

    editor.switch_tab(-1);
    editor.tick(next + Duration::from_millis(1), &mut store);
    assert_eq!(editor.blink_deadline(), None, "the list does not blink");

    editor.handle_event(&press(KeyCode::Enter), &mut store);
    assert!(editor.blink_deadline().is_some(), "modal text field blinks");
}

#[test]
fn begin_editing_draws_cursor_before_any_keystroke() {
    let mut editor = editor(&[]);
    let mut store = MemoryStore::default();
    send(&mut editor, &mut store, &[press(KeyCode::Enter)]);
    assert_eq!(editor.mode(), FocusMode::Editing);
    let view = editor.view();
    let Some(FieldView::Text { editing, cursor, .. }) = view.body.fields.first() else {
        panic!("expected the visibility text field first");
    };
    assert!(*editing);
    assert!(cursor.is_some());
}
