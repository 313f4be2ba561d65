use std::{fmt, str::FromStr};

use thiserror::Error;

/// Distance below the viewport top that a section must straddle to be active.
pub const REFERENCE_LINE: f64 = 100.0;

/// One of the named content regions of the page, in navigation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    Home,
    #[default]
    About,
    Projects,
    Career,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Career,
        Section::Contact,
    ];

    /// Element id and anchor fragment of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Career => "career",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Career => "Career Journey",
            s => s.id(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("unknown section: {0}")]
    Unknown(String),
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// Vertical extent of a rendered section, in whatever coordinate space the caller measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub bottom: f64,
}

impl SectionSpan {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }

    fn shifted(&self, by: f64) -> Self {
        Self {
            top: self.top - by,
            bottom: self.bottom - by,
        }
    }
}

/// First section, in priority order, whose span straddles `line`.
/// Sections `locate` cannot find are skipped.
pub fn first_straddling<F>(line: f64, locate: F) -> Option<Section>
where
    F: Fn(Section) -> Option<SectionSpan>,
{
    Section::ALL
        .into_iter()
        .find(|section| locate(*section).is_some_and(|span| span.straddles(line)))
}

/// Tracks the active section from viewport-relative spans measured on each scroll.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Section,
    line: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

impl SectionTracker {
    pub fn new(initial: Section) -> Self {
        Self {
            active: initial,
            line: REFERENCE_LINE,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Re-evaluates the active section. Returns the new section only when it changed;
    /// when nothing straddles the reference line the previous value is kept.
    pub fn observe<F>(&mut self, locate: F) -> Option<Section>
    where
        F: Fn(Section) -> Option<SectionSpan>,
    {
        let found = first_straddling(self.line, locate);
        self.select(found)
    }

    /// Applies a lookup result from any source. `None` keeps the previous section.
    pub fn select(&mut self, found: Option<Section>) -> Option<Section> {
        let found = found?;
        if found == self.active {
            return None;
        }
        log::debug!("active section {} -> {}", self.active, found);
        self.active = found;
        Some(found)
    }
}

/// Document-space section boundaries, measured once per layout instead of on every scroll.
///
/// The page measures lazily on the first scroll after an invalidation (mount or resize),
/// then answers every scroll from the stored spans.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    spans: Vec<(Section, SectionSpan)>,
}

impl SectionLayout {
    /// Records spans measured at `scroll_y`, converting them to document space.
    /// Absent sections simply have no entry.
    pub fn measure<F>(scroll_y: f64, locate: F) -> Self
    where
        F: Fn(Section) -> Option<SectionSpan>,
    {
        let spans = Section::ALL
            .into_iter()
            .filter_map(|section| locate(section).map(|span| (section, span.shifted(-scroll_y))))
            .collect();
        Self { spans }
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans
            .iter()
            .find_map(|(s, span)| (*s == section).then_some(*span))
    }

    /// Measures if nothing is stored yet, then looks up `scroll_y`.
    /// Stays empty while no section is mounted, so the next call measures again.
    pub fn active_or_measure<F>(&mut self, scroll_y: f64, locate: F) -> Option<Section>
    where
        F: Fn(Section) -> Option<SectionSpan>,
    {
        if self.is_empty() {
            *self = Self::measure(scroll_y, locate);
        }
        self.active_at(scroll_y)
    }

    /// Drops stored spans; the next lookup re-measures.
    pub fn invalidate(&mut self) {
        self.spans.clear();
    }

    /// Section straddling the reference line when the page is scrolled to `scroll_y`.
    pub fn active_at(&self, scroll_y: f64) -> Option<Section> {
        first_straddling(REFERENCE_LINE, |section| {
            self.span(section).map(|span| span.shifted(scroll_y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_at(spans: &[(Section, f64, f64)]) -> impl Fn(Section) -> Option<SectionSpan> + '_ {
        move |section| {
            spans
                .iter()
                .find(|(s, _, _)| *s == section)
                .map(|(_, top, bottom)| SectionSpan::new(*top, *bottom))
        }
    }

    #[test]
    fn test_initial_section_is_about() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_single_straddling_section_becomes_active() {
        let mut tracker = SectionTracker::default();
        let spans = [
            (Section::Home, -1800.0, -900.0),
            (Section::About, -900.0, -200.0),
            (Section::Projects, -200.0, 400.0),
            (Section::Career, 400.0, 1200.0),
            (Section::Contact, 1200.0, 1900.0),
        ];
        assert_eq!(tracker.observe(spans_at(&spans)), Some(Section::Projects));
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn test_no_straddling_section_keeps_previous() {
        let mut tracker = SectionTracker::new(Section::Career);
        let spans = [
            (Section::Home, 150.0, 300.0),
            (Section::About, 300.0, 600.0),
            (Section::Contact, 600.0, 900.0),
        ];
        assert_eq!(tracker.observe(spans_at(&spans)), None);
        assert_eq!(tracker.active(), Section::Career);
    }

    #[test]
    fn test_overlap_resolves_in_priority_order() {
        let mut tracker = SectionTracker::new(Section::Contact);
        let spans = [
            (Section::Career, 0.0, 500.0),
            (Section::About, 50.0, 150.0),
        ];
        assert_eq!(tracker.observe(spans_at(&spans)), Some(Section::About));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(SectionSpan::new(100.0, 300.0).straddles(REFERENCE_LINE));
        assert!(SectionSpan::new(-50.0, 100.0).straddles(REFERENCE_LINE));
        assert!(!SectionSpan::new(100.5, 300.0).straddles(REFERENCE_LINE));
        assert!(!SectionSpan::new(-50.0, 99.5).straddles(REFERENCE_LINE));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.observe(|_| None), None);
        assert_eq!(tracker.active(), Section::About);

        let spans = [(Section::Contact, 0.0, 200.0)];
        assert_eq!(tracker.observe(spans_at(&spans)), Some(Section::Contact));
    }

    #[test]
    fn test_repeated_observation_is_idempotent() {
        let mut tracker = SectionTracker::default();
        let spans = [(Section::Home, 0.0, 800.0)];
        assert_eq!(tracker.observe(spans_at(&spans)), Some(Section::Home));
        for _ in 0..100 {
            assert_eq!(tracker.observe(spans_at(&spans)), None);
        }
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_active_is_always_known_section() {
        let mut tracker = SectionTracker::default();
        let heights = [700.0, 900.0, 1100.0, 1500.0, 800.0];
        for scroll in (0..6000).step_by(37) {
            let scroll = scroll as f64;
            let mut top = -scroll;
            let mut spans = Vec::new();
            for (section, height) in Section::ALL.into_iter().zip(heights) {
                spans.push((section, top, top + height));
                top += height;
            }
            tracker.observe(spans_at(&spans));
            assert!(Section::ALL.contains(&tracker.active()));
        }
    }

    #[test]
    fn test_layout_lookup_matches_tracker() {
        let heights = [700.0, 900.0, 1100.0, 1500.0, 800.0];
        let mut top = 80.0;
        let mut spans = Vec::new();
        for (section, height) in Section::ALL.into_iter().zip(heights) {
            spans.push((section, top, top + height));
            top += height;
        }
        let layout = SectionLayout::measure(0.0, spans_at(&spans));
        assert!(!layout.is_empty());

        let mut tracker = SectionTracker::default();
        for scroll in (0..5000).step_by(53) {
            let scroll = scroll as f64;
            let shifted = spans
                .iter()
                .map(|(s, t, b)| (*s, t - scroll, b - scroll))
                .collect::<Vec<_>>();
            tracker.observe(spans_at(&shifted));
            if let Some(found) = layout.active_at(scroll) {
                assert_eq!(found, tracker.active());
            }
        }
    }

    #[test]
    fn test_layout_measured_while_scrolled() {
        let spans = [(Section::Projects, -400.0, 200.0)];
        let layout = SectionLayout::measure(1000.0, spans_at(&spans));
        assert_eq!(
            layout.span(Section::Projects),
            Some(SectionSpan::new(600.0, 1200.0))
        );
        assert_eq!(layout.active_at(1000.0), Some(Section::Projects));
        assert_eq!(layout.active_at(0.0), None);
        assert_eq!(layout.span(Section::Home), None);
    }

    #[test]
    fn test_layout_measures_lazily_and_after_invalidate() {
        let mut layout = SectionLayout::default();
        assert_eq!(layout.active_or_measure(0.0, |_| None), None);
        assert!(layout.is_empty());

        let spans = [(Section::Home, 0.0, 800.0), (Section::About, 800.0, 1600.0)];
        assert_eq!(
            layout.active_or_measure(0.0, spans_at(&spans)),
            Some(Section::Home)
        );
        // stored spans answer later scrolls without measuring
        assert_eq!(layout.active_or_measure(900.0, |_| None), Some(Section::About));

        // after a resize the sections moved down by 300
        layout.invalidate();
        let moved = [(Section::Home, 300.0, 1100.0), (Section::About, 1100.0, 1900.0)];
        assert_eq!(layout.active_or_measure(0.0, spans_at(&moved)), None);
        assert_eq!(layout.active_at(300.0), Some(Section::Home));
    }

    #[test]
    fn test_select_keeps_previous_on_none() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.select(None), None);
        assert_eq!(tracker.select(Some(Section::About)), None);
        assert_eq!(tracker.select(Some(Section::Career)), Some(Section::Career));
        assert_eq!(tracker.active(), Section::Career);
    }

    #[test]
    fn test_section_ids() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.anchor().parse::<Section>(), Ok(section));
        }
        assert_eq!(Section::Career.nav_label(), "Career Journey");
        assert_eq!(Section::Projects.nav_label(), "projects");
        assert_eq!(
            "blog".parse::<Section>(),
            Err(SectionError::Unknown("blog".to_string()))
        );
    }
}
