use portfolio_core::{ChatTurn, Section, Speaker};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::page::wrap_text;

const ACCENT: Color = Color::Indexed(99);
const CHAT_WIDTH: u16 = 52;
const CHAT_HEIGHT: u16 = 24;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: nav bar, page, footer
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    app.layout_page(body_area.width, body_area.height);

    render_header(app, frame, header_area);
    render_page(app, frame, body_area);
    render_footer(app, frame, footer_area);

    if app.chat_open {
        render_chat(app, frame, body_area);
    } else {
        app.chat_area = None;
        render_chat_button(frame, body_area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(" H ", Style::default().bg(ACCENT).fg(Color::White).bold()),
        Span::styled(" HELLY PATEL ", Style::default().fg(ACCENT).bold()),
        Span::raw("  "),
    ];

    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == app.active_section {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{}", i + 1), Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(format!(" {}  ", section.nav_title()), style));
    }

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(header, area);
}

fn render_page(app: &App, frame: &mut Frame, area: Rect) {
    let visible: Vec<Line> = app
        .page
        .lines
        .iter()
        .skip(app.page_scroll)
        .take(area.height as usize)
        .cloned()
        .collect();

    frame.render_widget(Paragraph::new(Text::from(visible)), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default().bg(Color::Blue).fg(Color::White),
        InputMode::Editing => Style::default().bg(Color::Yellow).fg(Color::Black),
    };
    let mode_text = match (app.input_mode, app.chat_open) {
        (InputMode::Editing, _) => " ASK ",
        (InputMode::Normal, true) => " CHAT ",
        (InputMode::Normal, false) => " PAGE ",
    };

    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().fg(Color::Gray);

    let hints: &[(&str, &str)] = match (app.input_mode, app.chat_open) {
        (InputMode::Editing, _) => &[
            ("Enter", "send"),
            ("←→", "move"),
            ("↑↓", "scroll chat"),
            ("Esc", "done"),
        ],
        (InputMode::Normal, true) => &[
            ("i", "type"),
            ("J/K", "scroll chat"),
            ("Esc", "close chat"),
            ("j/k", "scroll"),
            ("q", "quit"),
        ],
        (InputMode::Normal, false) => &[
            ("j/k", "scroll"),
            ("1-5", "sections"),
            ("g/G", "top/bottom"),
            ("c", "resume AI"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::styled(mode_text, mode_style), Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {key} "), key_style));
        spans.push(Span::styled(format!(" {label}  "), label_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_chat_button(frame: &mut Frame, area: Rect) {
    let label = " 💬 RESUME AI (c) ";
    let width = (label.chars().count() as u16 + 1).min(area.width);
    if area.height < 2 || width == 0 {
        return;
    }
    let button_area = Rect::new(
        area.x + area.width - width,
        area.y + area.height - 1,
        width,
        1,
    );
    let button = Paragraph::new(Span::styled(
        label,
        Style::default().bg(ACCENT).fg(Color::White).bold(),
    ));
    frame.render_widget(Clear, button_area);
    frame.render_widget(button, button_area);
}

/// Chat transcript as display lines, wrapped to `width`.
pub fn chat_lines(
    turns: &[ChatTurn],
    pending: bool,
    animation_frame: u8,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let body_width = width.saturating_sub(2).max(1);

    for turn in turns {
        let (label, label_style, text_style) = match turn.speaker() {
            Speaker::User => (
                "You",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::White),
            ),
            Speaker::Assistant => (
                "AI",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            ),
        };
        lines.push(Line::from(Span::styled(format!("{label}:"), label_style)));
        for paragraph in turn.text().lines() {
            for row in wrap_text(paragraph, body_width) {
                lines.push(Line::from(vec![Span::raw("  "), Span::styled(row, text_style)]));
            }
        }
        lines.push(Line::default());
    }

    if pending {
        lines.push(Line::from(Span::styled(
            "AI:",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        // Animated ellipsis: cycles through ".", "..", "..."
        let dots = ".".repeat((animation_frame as usize % 3) + 1);
        lines.push(Line::from(Span::styled(
            format!("  Thinking{dots}"),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

fn render_chat(app: &mut App, frame: &mut Frame, area: Rect) {
    let width = CHAT_WIDTH.min(area.width);
    let height = CHAT_HEIGHT.min(area.height);
    let panel = Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    );
    app.chat_area = Some(panel);
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(Line::from(vec![
            Span::styled(" Helly's AI Assistant ", Style::default().bold()),
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled("ONLINE ", Style::default().fg(ACCENT)),
        ]))
        .title_bottom(Line::from(Span::styled(
            format!(" {} · {} ", app.chat.client().name(), app.chat.client().model()),
            Style::default().fg(Color::DarkGray),
        )));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let [log_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(inner);

    // Transcript, following the newest turn unless the visitor scrolled up
    let lines = chat_lines(
        app.chat.turns(),
        app.chat.is_pending(),
        app.animation_frame,
        log_area.width as usize,
    );
    let max_scroll = max_chat_scroll(lines.len(), log_area.height);
    if app.chat_follow || app.chat_scroll >= max_scroll {
        app.chat_scroll = max_scroll;
        app.chat_follow = true;
    }
    frame.render_widget(
        Paragraph::new(Text::from(lines)).scroll((app.chat_scroll, 0)),
        log_area,
    );

    render_chat_input(app, frame, input_area);
}

/// Largest scroll offset that still fills the viewport. Saturates at `u16::MAX`.
fn max_chat_scroll(line_count: usize, viewport_height: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(viewport_height)
}

fn render_chat_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let send_style = if app.chat.can_submit() {
        Style::default().fg(ACCENT).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Yellow } else { Color::DarkGray }))
        .title_bottom(Line::from(Span::styled(" ➤ Enter ", send_style)).right_aligned());

    // Horizontal scroll to keep the cursor visible
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_pos = app.draft_cursor;
    let scroll_offset = if inner_width == 0 || cursor_pos < inner_width {
        0
    } else {
        cursor_pos - inner_width + 1
    };

    let draft = app.chat.draft();
    let content = if draft.is_empty() && !editing {
        Span::styled("Ask about her skills...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(draft.chars().skip(scroll_offset).take(inner_width).collect::<String>())
    };

    frame.render_widget(Paragraph::new(content).block(input_block), area);

    if editing {
        let x = area.x + 1 + (cursor_pos - scroll_offset) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_chat_lines_label_each_speaker() {
        let turns = vec![ChatTurn::assistant("Hi!"), ChatTurn::user("What projects?")];
        let text = text_of(&chat_lines(&turns, false, 0, 40));
        assert_eq!(text, vec!["AI:", "  Hi!", "", "You:", "  What projects?", ""]);
    }

    #[test]
    fn test_thinking_indicator_only_while_pending() {
        let turns = vec![ChatTurn::user("hello")];
        let idle = text_of(&chat_lines(&turns, false, 0, 40));
        assert!(!idle.iter().any(|l| l.contains("Thinking")));

        let pending = text_of(&chat_lines(&turns, true, 2, 40));
        assert_eq!(pending.last().unwrap(), "  Thinking...");
    }

    #[test]
    fn test_max_chat_scroll_saturates_on_huge_logs() {
        assert_eq!(max_chat_scroll(5, 10), 0);
        assert_eq!(max_chat_scroll(30, 10), 20);
        assert_eq!(max_chat_scroll(70_000, 10), u16::MAX - 10);
    }

    #[test]
    fn test_long_replies_wrap() {
        let turns = vec![ChatTurn::assistant("one two three four five six seven eight")];
        let text = text_of(&chat_lines(&turns, false, 0, 12));
        assert!(text.len() > 3);
        assert!(text.iter().all(|l| l.chars().count() <= 12));
    }
}
