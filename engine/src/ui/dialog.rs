//! Modal message dialogs.

use toss_types::InputError;

pub const INPUT_ERROR_TITLE: &str = "Input Error";
pub const HISTORY_TITLE: &str = "Session Summary";
pub const NO_HISTORY_MESSAGE: &str = "No history available yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Error,
    Info,
}

/// Rows moved per page key beyond what the viewport shows.
const PAGE_OVERLAP: usize = 1;

/// Scroll movements for a dialog whose body does not fit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogScroll {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// A blocking message box, dismissed with Enter or Esc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    kind: DialogKind,
    title: &'static str,
    lines: Vec<String>,
    /// First visible body line.
    scroll: usize,
    /// Body rows the renderer can show. Starts at the full body height.
    viewport: usize,
}

impl Dialog {
    #[must_use]
    pub fn new(kind: DialogKind, title: &'static str, lines: Vec<String>) -> Self {
        let viewport = lines.len();
        Self {
            kind,
            title,
            lines,
            scroll: 0,
            viewport,
        }
    }

    #[must_use]
    pub fn input_error(err: InputError) -> Self {
        Self::new(DialogKind::Error, INPUT_ERROR_TITLE, vec![err.to_string()])
    }

    /// History listing, or the empty-state message.
    #[must_use]
    pub fn history(listing: Vec<String>) -> Self {
        let lines = if listing.is_empty() {
            vec![NO_HISTORY_MESSAGE.to_string()]
        } else {
            listing
        };
        Self::new(DialogKind::Info, HISTORY_TITLE, lines)
    }

    #[must_use]
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// First visible body line.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub fn scroll_max(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport)
    }

    /// Body lines currently in view.
    #[must_use]
    pub fn visible_lines(&self) -> &[String] {
        let end = (self.scroll + self.viewport).min(self.lines.len());
        &self.lines[self.scroll..end]
    }

    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.scroll_max() > 0
    }

    /// Record how many body rows fit; keeps the offset in range.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows.max(1);
        self.scroll = self.scroll.min(self.scroll_max());
    }

    pub fn scroll(&mut self, movement: DialogScroll) {
        let page = self.viewport.saturating_sub(PAGE_OVERLAP).max(1);
        let target = match movement {
            DialogScroll::LineUp => self.scroll.saturating_sub(1),
            DialogScroll::LineDown => self.scroll.saturating_add(1),
            DialogScroll::PageUp => self.scroll.saturating_sub(page),
            DialogScroll::PageDown => self.scroll.saturating_add(page),
            DialogScroll::Top => 0,
            DialogScroll::Bottom => usize::MAX,
        };
        self.scroll = target.min(self.scroll_max());
    }

    /// Lines joined with newlines.
    #[must_use]
    pub fn message(&self) -> String {
        self.lines.join("\n")
    }
}
