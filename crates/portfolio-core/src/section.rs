//! In-page sections and scroll-based highlighting

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Experience,
    Skills,
    Projects,
    Education,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Education,
    ];

    /// Anchor identifier used for in-page navigation
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn nav_title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
        }
    }

    /// Heading shown at the top of the section body
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Home => "Transforming Ideas",
            Section::Experience => "Experience",
            Section::Skills => "Technical Arsenal",
            Section::Projects => "Featured Projects",
            Section::Education => "Academic Journey",
        }
    }
}

/// Where a section sits in the laid-out page, in rows (or any unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    fn contains(&self, offset: usize) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Section under the probe line `scroll_offset + lookahead`.
///
/// Spans are checked in order and the last match wins, so overlapping spans
/// resolve to the later section. Returns `None` when the probe falls in a gap
/// or past the end; callers keep whatever was highlighted before.
pub fn active_section(
    spans: &[SectionSpan],
    scroll_offset: usize,
    lookahead: usize,
) -> Option<Section> {
    let probe = scroll_offset.saturating_add(lookahead);
    spans
        .iter()
        .rev()
        .find(|span| span.contains(probe))
        .map(|span| span.section)
}
