use std::time::{Duration, Instant};

/// A navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Controller", href: "/controller" },
    NavItem { label: "Model", href: "/model" },
    NavItem { label: "Migration", href: "/migration" },
    NavItem { label: "View", href: "/view" },
    NavItem { label: "Routing", href: "/routing" },
    NavItem { label: "Validation", href: "/validation" },
    NavItem { label: "Error Handling", href: "/error" },
];

/// A timed loading window, used for the startup overlay and page transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingWindow {
    pub started: Instant,
    pub until: Instant,
}

impl LoadingWindow {
    pub fn new(now: Instant, length: Duration) -> Self {
        Self {
            started: now,
            until: now + length,
        }
    }

    pub fn is_over(&self, now: Instant) -> bool {
        now >= self.until
    }

    /// Fraction of the window elapsed, 0.0..=1.0.
    pub fn progress(&self, now: Instant) -> f64 {
        let total = self.until.saturating_duration_since(self.started);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0)
    }
}

/// A page transition in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLoad {
    pub target: String,
    pub window: LoadingWindow,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
