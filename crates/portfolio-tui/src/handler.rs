use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use portfolio_core::Section;
use ratatui::layout::Rect;

use crate::app::{App, InputMode};
use crate::tui::AppEvent;

const WHEEL_ROWS: usize = 3;

pub fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick(),
        AppEvent::ChatUpdated => app.chat_follow = true,
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Page scrolling
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_half_page_down()
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_half_page_up()
        }
        KeyCode::PageDown => app.scroll_half_page_down(),
        KeyCode::PageUp => app.scroll_half_page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),

        // Section jumps, in nav bar order
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            app.jump_to(Section::ALL[idx]);
        }

        // Chat panel
        KeyCode::Char('c') => app.toggle_chat(),
        KeyCode::Char('i') | KeyCode::Enter | KeyCode::Tab if app.chat_open => {
            app.start_editing()
        }
        KeyCode::Esc if app.chat_open => app.close_chat(),
        KeyCode::Char('J') if app.chat_open => app.chat_scroll_down(1),
        KeyCode::Char('K') if app.chat_open => app.chat_scroll_up(1),

        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.input_mode = InputMode::Normal,
        KeyCode::Enter => {
            // Rejections (blank draft, reply pending) are silent
            let _ = app.submit_draft();
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Up => app.chat_scroll_up(1),
        KeyCode::Down => app.chat_scroll_down(1),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let over_chat = app.chat_open
        && app
            .chat_area
            .is_some_and(|area| contains(area, mouse.column, mouse.row));

    match (mouse.kind, over_chat) {
        (MouseEventKind::ScrollDown, true) => app.chat_scroll_down(WHEEL_ROWS as u16),
        (MouseEventKind::ScrollUp, true) => app.chat_scroll_up(WHEEL_ROWS as u16),
        (MouseEventKind::ScrollDown, false) => app.scroll_down(WHEEL_ROWS),
        (MouseEventKind::ScrollUp, false) => app.scroll_up(WHEEL_ROWS),
        _ => {}
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use portfolio_core::{ChatSession, GeminiClient};
    use std::sync::Arc;

    fn app() -> App {
        let client = Arc::new(GeminiClient::new(None, "test-model"));
        let mut app = App::new(ChatSession::with_defaults(client));
        app.layout_page(80, 20);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_event(app, AppEvent::Key(key)).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_section, Section::Projects);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_section, Section::Home);
        assert_eq!(app.page_scroll, 0);
    }

    #[test]
    fn test_chat_toggle_and_close() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert!(app.chat_open);
        press(&mut app, KeyCode::Esc);
        assert!(!app.chat_open);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.chat_open);
    }

    #[test]
    fn test_typing_goes_to_draft_not_navigation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Editing);

        type_str(&mut app, "q1 jk");
        assert!(!app.should_quit);
        assert_eq!(app.active_section, Section::Home);
        assert_eq!(app.chat.draft(), "q1 jk");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.chat_open);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_edit_keys_ignored_while_chat_closed() {
        let mut app = app();
        for code in [KeyCode::Char('i'), KeyCode::Enter, KeyCode::Tab] {
            press(&mut app, code);
            assert!(!app.chat_open);
            assert_eq!(app.input_mode, InputMode::Normal);
        }

        // Page navigation still works afterwards
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.page_scroll, 1);
    }

    #[test]
    fn test_enter_on_blank_draft_does_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat.turns().len(), 1);
        assert!(!app.chat.is_pending());
        assert_eq!(app.chat.draft(), "   ");
    }

    #[tokio::test]
    async fn test_enter_submits_and_second_enter_is_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "hello");
        press(&mut app, KeyCode::Enter);

        assert!(app.chat.is_pending());
        assert_eq!(app.chat.turns().len(), 2);
        assert_eq!(app.chat.draft(), "");

        type_str(&mut app, "ping");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat.turns().len(), 2);
        assert_eq!(app.chat.draft(), "ping");

        app.chat.settle().await;
        assert_eq!(app.chat.turns().len(), 3);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('i'));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, AppEvent::Key(key)).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_wheel_over_chat_scrolls_chat() {
        let mut app = app();
        app.chat_open = true;
        app.chat_area = Some(Rect::new(40, 5, 30, 10));
        app.chat_scroll = 10;

        let wheel = |kind, column, row| MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        handle_event(&mut app, AppEvent::Mouse(wheel(MouseEventKind::ScrollUp, 45, 8))).unwrap();
        assert_eq!(app.chat_scroll, 7);
        assert!(!app.chat_follow);
        assert_eq!(app.page_scroll, 0);

        handle_event(&mut app, AppEvent::Mouse(wheel(MouseEventKind::ScrollDown, 2, 2))).unwrap();
        assert_eq!(app.page_scroll, 3);
        assert_eq!(app.chat_scroll, 7);
    }
}
