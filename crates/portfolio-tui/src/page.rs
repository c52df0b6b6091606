//! Lays the static portfolio content out as pre-wrapped lines.
//!
//! Wrapping is done here rather than by the Paragraph widget so the row at
//! which each section starts is known exactly; the nav bar highlight and the
//! section jump keys both depend on it.

use portfolio_core::content::{
    Experience, CERTIFICATIONS, EDUCATION, EXPERIENCES, EXPERIENCE_BLURB, FOOTER_TAGS,
    HERO_STATUS, HERO_SUBTITLE, HERO_TAGLINE, HERO_TITLE, HIGHLIGHTS, OWNER_EMAIL,
    OWNER_LOCATION, OWNER_NAME, PROJECTS, SKILLS_BLURB, SKILL_CATEGORIES,
};
use portfolio_core::{Section, SectionSpan};
use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};

const ACCENT: Color = Color::Indexed(99); // indigo
const MUTED: Color = Color::DarkGray;
const MARGIN: usize = 2;

/// Wrap text to fit within a given width on word boundaries.
/// Words longer than the width are split mid-word.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Hard-split words that can never fit
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word_len = word.len();
        if word_len == 0 {
            continue;
        }
        let word: String = word.into_iter().collect();

        if current_len == 0 {
            current_line = word;
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current_line.push(' ');
            current_line.push_str(&word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current_line, word));
            current_len = word_len;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// The laid-out page for one terminal width
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub width: u16,
    pub lines: Vec<Line<'static>>,
    pub spans: Vec<SectionSpan>,
}

impl Page {
    pub fn build(width: u16) -> Self {
        let mut b = PageBuilder::new(width);

        b.section(Section::Home, hero);
        highlights(&mut b);
        b.section(Section::Experience, experience);
        b.section(Section::Skills, skills);
        b.section(Section::Projects, projects);
        b.section(Section::Education, education);
        footer(&mut b);

        Page {
            width,
            lines: b.lines,
            spans: b.spans,
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// First row of a section
    pub fn top_of(&self, section: Section) -> usize {
        self.spans
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.top)
            .unwrap_or(0)
    }
}

struct PageBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
    spans: Vec<SectionSpan>,
}

impl PageBuilder {
    fn new(width: u16) -> Self {
        Self {
            width: (width as usize).saturating_sub(MARGIN * 2).max(10),
            lines: Vec::new(),
            spans: Vec::new(),
        }
    }

    fn section(&mut self, section: Section, body: fn(&mut PageBuilder)) {
        let top = self.lines.len();
        body(self);
        self.spans.push(SectionSpan {
            section,
            top,
            height: self.lines.len() - top,
        });
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn line(&mut self, spans: Vec<Span<'static>>) {
        let mut all = vec![Span::raw(" ".repeat(MARGIN))];
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    fn wrapped(&mut self, text: &str, style: Style, indent: usize) {
        let pad = " ".repeat(indent);
        for row in wrap_text(text, self.width.saturating_sub(indent)) {
            self.line(vec![Span::raw(pad.clone()), Span::styled(row, style)]);
        }
    }

    fn bullet(&mut self, text: &str) {
        let rows = wrap_text(text, self.width.saturating_sub(4));
        for (i, row) in rows.into_iter().enumerate() {
            let marker = if i == 0 { "  • " } else { "    " };
            self.line(vec![Span::styled(marker, Style::default().fg(ACCENT)), Span::raw(row)]);
        }
    }

    fn heading(&mut self, section: Section, blurb: Option<&str>) {
        self.blank();
        self.line(vec![Span::styled(
            section.heading().to_string(),
            Style::default().bold().fg(Color::White),
        )]);
        self.line(vec![Span::styled("━━━━━━", Style::default().fg(ACCENT))]);
        if let Some(blurb) = blurb {
            self.wrapped(blurb, Style::default().fg(MUTED), 0);
        }
        self.blank();
    }
}

fn hero(b: &mut PageBuilder) {
    b.blank();
    b.line(vec![Span::styled(
        format!("✦ {}", HERO_TAGLINE.to_uppercase()),
        Style::default().fg(ACCENT).bold(),
    )]);
    b.blank();
    b.line(vec![Span::styled(HERO_TITLE[0], Style::default().bold().fg(Color::White))]);
    b.line(vec![Span::styled(HERO_TITLE[1], Style::default().bold().fg(ACCENT))]);
    b.blank();
    b.wrapped(HERO_SUBTITLE, Style::default(), 0);
    b.blank();
    b.line(vec![
        Span::styled(" ✉ Let's Talk ", Style::default().bg(Color::White).fg(Color::Black).bold()),
        Span::raw(" "),
        Span::styled(OWNER_EMAIL, Style::default().underlined()),
    ]);
    b.blank();
    b.line(vec![
        Span::styled("⌖ ", Style::default().fg(ACCENT)),
        Span::styled(OWNER_LOCATION, Style::default().fg(MUTED)),
        Span::raw("   "),
        Span::styled("▣ ", Style::default().fg(ACCENT)),
        Span::styled(HERO_STATUS, Style::default().fg(MUTED)),
    ]);
    b.blank();
}

fn highlights(b: &mut PageBuilder) {
    b.line(vec![Span::styled("─".repeat(b.width), Style::default().fg(MUTED))]);
    for h in HIGHLIGHTS {
        b.line(vec![
            Span::styled(format!("{:<8}", h.value), Style::default().fg(ACCENT).bold()),
            Span::styled(h.label.to_uppercase(), Style::default().fg(MUTED)),
        ]);
    }
    b.line(vec![Span::styled("─".repeat(b.width), Style::default().fg(MUTED))]);
}

fn experience(b: &mut PageBuilder) {
    b.heading(Section::Experience, Some(EXPERIENCE_BLURB));
    for exp in EXPERIENCES {
        experience_card(b, exp);
    }
}

fn experience_card(b: &mut PageBuilder, exp: &Experience) {
    b.line(vec![Span::styled(
        format!(" {} ", exp.date.to_uppercase()),
        Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED),
    )]);
    b.wrapped(exp.company, Style::default().bold(), 0);
    b.wrapped(exp.role, Style::default().fg(Color::Gray), 0);
    b.line(vec![Span::styled(
        format!("⌖ {}", exp.location),
        Style::default().fg(MUTED),
    )]);
    for item in exp.description {
        b.bullet(item);
    }
    b.blank();
}

fn skills(b: &mut PageBuilder) {
    b.heading(Section::Skills, Some(SKILLS_BLURB));
    for cat in SKILL_CATEGORIES {
        b.line(vec![Span::styled(cat.category, Style::default().bold())]);
        b.wrapped(&cat.skills.join(" · "), Style::default().fg(Color::Gray), 2);
        b.blank();
    }
    b.line(vec![Span::styled("★ Certifications", Style::default().fg(ACCENT).bold())]);
    for cert in CERTIFICATIONS {
        b.bullet(cert);
    }
    b.blank();
}

fn projects(b: &mut PageBuilder) {
    b.heading(Section::Projects, None);
    for proj in PROJECTS {
        b.line(vec![
            Span::styled(proj.title, Style::default().bold()),
            Span::raw("  "),
            Span::styled(proj.date.to_uppercase(), Style::default().fg(ACCENT)),
        ]);
        b.wrapped(proj.description, Style::default().fg(Color::Gray), 0);
        let tags: Vec<String> = proj
            .technologies
            .iter()
            .map(|t| format!("[{}]", t.to_uppercase()))
            .collect();
        b.wrapped(&tags.join(" "), Style::default().fg(MUTED), 0);
        b.line(vec![Span::styled(
            format!("↗ {}", proj.image_url),
            Style::default().fg(MUTED).italic(),
        )]);
        b.blank();
    }
}

fn education(b: &mut PageBuilder) {
    b.heading(Section::Education, None);
    for edu in EDUCATION {
        b.line(vec![
            Span::styled(
                format!(" {} ", edu.date),
                Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED),
            ),
            Span::raw("  "),
            Span::styled(format!("CGPA: {}", edu.cgpa), Style::default().fg(ACCENT).bold()),
        ]);
        b.wrapped(edu.institution, Style::default().bold(), 0);
        b.wrapped(edu.degree, Style::default().fg(Color::Gray), 0);
        b.line(vec![Span::styled(
            format!("⌖ {}", edu.location),
            Style::default().fg(MUTED),
        )]);
        b.blank();
    }
}

fn footer(b: &mut PageBuilder) {
    b.line(vec![Span::styled("━".repeat(b.width), Style::default().fg(ACCENT))]);
    b.blank();
    b.line(vec![Span::styled(OWNER_NAME, Style::default().bold())]);
    b.line(vec![Span::styled(
        format!("✉ {}", OWNER_EMAIL),
        Style::default().fg(Color::Gray),
    )]);
    b.blank();
    b.wrapped(
        &format!("DESIGNED & ENGINEERED BY {OWNER_NAME}"),
        Style::default().fg(MUTED).bold(),
        0,
    );
    b.line(vec![Span::styled(
        FOOTER_TAGS.join("   ").to_uppercase(),
        Style::default().fg(MUTED),
    )]);
    b.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::active_section;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("ab 231263107037setice@gmail.com", 8);
        assert_eq!(lines[0], "ab");
        assert!(lines.iter().all(|l| l.chars().count() <= 8));
        assert_eq!(lines.concat(), "ab231263107037setice@gmail.com");
    }

    #[test]
    fn test_wrap_empty_text_is_one_line() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
        assert_eq!(wrap_text("word", 0), vec!["word".to_string()]);
    }

    #[test]
    fn test_sections_are_in_page_order() {
        let page = Page::build(80);
        let order: Vec<Section> = page.spans.iter().map(|s| s.section).collect();
        assert_eq!(order, Section::ALL.to_vec());

        assert_eq!(page.top_of(Section::Home), 0);
        for pair in page.spans.windows(2) {
            assert!(pair[0].top + pair[0].height <= pair[1].top);
            assert!(pair[0].height > 0);
        }
        let last = page.spans.last().unwrap();
        assert!(last.top + last.height < page.height(), "footer follows education");
    }

    #[test]
    fn test_jumping_to_a_section_highlights_it() {
        let page = Page::build(60);
        for section in Section::ALL {
            let top = page.top_of(section);
            assert_eq!(active_section(&page.spans, top, 0), Some(section));
        }
    }

    #[test]
    fn test_narrow_pages_are_taller() {
        assert!(Page::build(40).height() > Page::build(120).height());
    }
}
