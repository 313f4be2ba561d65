use std::time::Duration;

use crate::{
    loading::LoadingGate,
    section::{Section, SectionLayout, SectionSpan, SectionTracker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn page_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => {
                "min-h-screen transition-colors duration-300 bg-gradient-to-br from-black via-black/90 to-green-950/30"
            }
            ThemeMode::Light => {
                "min-h-screen transition-colors duration-300 bg-gradient-to-br from-white via-gray-100 to-green-100"
            }
        }
    }

    pub fn heading_text(self) -> &'static str {
        match self {
            ThemeMode::Dark => "text-white",
            ThemeMode::Light => "text-black",
        }
    }

    pub fn muted_text(self) -> &'static str {
        match self {
            ThemeMode::Dark => "text-zinc-400",
            ThemeMode::Light => "text-gray-600",
        }
    }

    pub fn strong_text(self) -> &'static str {
        match self {
            ThemeMode::Dark => "text-zinc-300",
            ThemeMode::Light => "text-gray-700",
        }
    }

    pub fn stat_text(self) -> &'static str {
        match self {
            ThemeMode::Dark => "text-green-500",
            ThemeMode::Light => "text-green-600",
        }
    }

    /// Icon for the toggle button: the mode a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}

/// All UI state of the page, owned by one rendering context.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    tracker: SectionTracker,
    layout: SectionLayout,
    theme: ThemeMode,
    menu_open: bool,
    loading: LoadingGate,
}

impl UiState {
    /// State as it is at mount: about section, dark theme, menu closed, loading.
    pub fn mounted() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.tracker.active() == section
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Main content is rendered only once the loading mask is gone.
    pub fn content_visible(&self) -> bool {
        !self.loading.is_loading()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scroll handling through the stored section layout, measured on demand.
    pub fn on_scroll_at<F>(&mut self, scroll_y: f64, locate: F) -> Option<Section>
    where
        F: Fn(Section) -> Option<SectionSpan>,
    {
        let found = self.layout.active_or_measure(scroll_y, locate);
        self.tracker.select(found)
    }

    /// Section geometry changed (resize); the next scroll re-measures.
    pub fn invalidate_layout(&mut self) {
        self.layout.invalidate();
    }

    pub fn advance(&mut self, by: Duration) -> bool {
        self.loading.advance(by)
    }

    pub fn finish_loading(&mut self) -> bool {
        self.loading.finish()
    }
}
