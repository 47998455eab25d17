//! Flip-count text field and keyboard focus.

/// Controls reachable with Tab / Shift+Tab, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Toss,
    History,
    Exit,
}

impl Focus {
    pub const ALL: [Self; 4] = [Self::Input, Self::Toss, Self::History, Self::Exit];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Input => Self::Toss,
            Self::Toss => Self::History,
            Self::History => Self::Exit,
            Self::Exit => Self::Input,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Input => Self::Exit,
            Self::Toss => Self::Input,
            Self::History => Self::Toss,
            Self::Exit => Self::History,
        }
    }

    /// Button caption; the text field has none.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "",
            Self::Toss => "Toss Coins",
            Self::History => "Show History",
            Self::Exit => "Exit",
        }
    }
}

/// Single-line text buffer with a char-indexed cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputField {
    text: String,
    cursor: usize,
}

impl InputField {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.cursor = 0;
        self.enter_text(text);
    }

    pub fn enter_char(&mut self, new_char: char) {
        if new_char.is_control() {
            return;
        }
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor_right();
    }

    /// Insert pasted text. Line breaks and other control characters are dropped.
    pub fn enter_text(&mut self, text: &str) {
        for c in text.chars() {
            self.enter_char(c);
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.cursor.saturating_add(1).min(self.char_count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
