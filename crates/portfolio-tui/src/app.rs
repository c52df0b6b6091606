use portfolio_core::{active_section, ChatSession, Section, SubmitRejection};
use ratatui::layout::Rect;

use crate::page::Page;

/// Rows below the top of the viewport used to decide which section is "in view"
const SECTION_LOOKAHEAD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,

    // Page state
    pub page: Page,
    pub page_scroll: usize,
    pub page_height: u16,
    pub active_section: Section,

    // Chat panel state
    pub chat: ChatSession,
    pub chat_open: bool,
    pub draft_cursor: usize, // cursor position in the draft, in chars
    pub chat_scroll: u16,
    pub chat_follow: bool,
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Panel areas for mouse hit-testing (updated during render)
    pub chat_area: Option<Rect>,
}

impl App {
    pub fn new(chat: ChatSession) -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Normal,

            page: Page::default(),
            page_scroll: 0,
            page_height: 0,
            active_section: Section::default(),

            chat,
            chat_open: false,
            draft_cursor: 0,
            chat_scroll: 0,
            chat_follow: true,
            animation_frame: 0,

            chat_area: None,
        }
    }

    /// Rebuild the page layout when the terminal width changes.
    pub fn layout_page(&mut self, width: u16, height: u16) {
        if self.page.width != width || self.page.lines.is_empty() {
            // Keep the same section in view across a re-wrap
            let anchor = self.active_section;
            let offset_in_section = self.page_scroll.saturating_sub(self.page.top_of(anchor));
            self.page = Page::build(width);
            self.page_scroll = self.page.top_of(anchor) + offset_in_section;
        }
        self.page_height = height;
        self.clamp_page_scroll();
    }

    fn max_page_scroll(&self) -> usize {
        self.page.height().saturating_sub(self.page_height as usize)
    }

    fn clamp_page_scroll(&mut self) {
        self.page_scroll = self.page_scroll.min(self.max_page_scroll());
        self.update_active_section();
    }

    fn update_active_section(&mut self) {
        let hit = active_section(&self.page.spans, self.page_scroll, SECTION_LOOKAHEAD);
        if let Some(section) = hit {
            self.active_section = section;
        }
    }

    // Page scrolling
    pub fn scroll_down(&mut self, rows: usize) {
        self.page_scroll = self.page_scroll.saturating_add(rows);
        self.clamp_page_scroll();
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.page_scroll = self.page_scroll.saturating_sub(rows);
        self.clamp_page_scroll();
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroll_down((self.page_height as usize / 2).max(1));
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroll_up((self.page_height as usize / 2).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.page_scroll = 0;
        self.clamp_page_scroll();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.page_scroll = self.max_page_scroll();
        self.clamp_page_scroll();
    }

    pub fn jump_to(&mut self, section: Section) {
        self.page_scroll = self.page.top_of(section);
        self.clamp_page_scroll();
        // A short final section may not reach the lookahead line; the nav
        // should still reflect the jump.
        self.active_section = section;
    }

    // Chat panel
    pub fn toggle_chat(&mut self) {
        if self.chat_open {
            self.close_chat();
        } else {
            self.chat_open = true;
            self.chat_follow = true;
        }
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
        self.input_mode = InputMode::Normal;
    }

    pub fn start_editing(&mut self) {
        self.chat_open = true;
        self.input_mode = InputMode::Editing;
        self.draft_cursor = self.chat.draft().chars().count();
    }

    /// Send the current draft. The cursor resets only when the draft was taken.
    pub fn submit_draft(&mut self) -> Result<(), SubmitRejection> {
        match self.chat.submit_draft() {
            Ok(()) => {
                self.draft_cursor = 0;
                self.chat_follow = true;
                Ok(())
            }
            Err(rejection) => {
                tracing::debug!("submit ignored: {rejection}");
                Err(rejection)
            }
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(self.chat.draft(), self.draft_cursor);
        self.chat.draft_mut().insert(byte_pos, c);
        self.draft_cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.draft_cursor > 0 {
            self.draft_cursor -= 1;
            let byte_pos = char_to_byte_index(self.chat.draft(), self.draft_cursor);
            self.chat.draft_mut().remove(byte_pos);
        }
    }

    pub fn delete(&mut self) {
        if self.draft_cursor < self.chat.draft().chars().count() {
            let byte_pos = char_to_byte_index(self.chat.draft(), self.draft_cursor);
            self.chat.draft_mut().remove(byte_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        self.draft_cursor = self.draft_cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.draft_cursor = (self.draft_cursor + 1).min(self.chat.draft().chars().count());
    }

    pub fn cursor_home(&mut self) {
        self.draft_cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.draft_cursor = self.chat.draft().chars().count();
    }

    pub fn chat_scroll_up(&mut self, rows: u16) {
        self.chat_follow = false;
        self.chat_scroll = self.chat_scroll.saturating_sub(rows);
    }

    pub fn chat_scroll_down(&mut self, rows: u16) {
        // Clamped (and follow re-enabled at the bottom) during render
        self.chat_scroll = self.chat_scroll.saturating_add(rows);
    }

    /// Called on every tick: resolves a finished request and animates the dots
    pub fn tick(&mut self) {
        if self.chat.poll() {
            self.chat_follow = true;
        }
        if self.chat.is_pending() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        } else {
            self.animation_frame = 0;
        }
    }
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
