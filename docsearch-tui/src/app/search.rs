use super::{App, TextInput};
use docsearch::{SessionKey, SessionPhase};

impl App {
    pub fn focus_search(&mut self) {
        self.search_focused = true;
        self.session.focus();
    }

    /// Leave the search box, closing the dropdown like a click elsewhere would.
    pub fn blur_search(&mut self) {
        self.search_focused = false;
        self.session.click_outside();
        self.sync_search_input();
    }

    pub fn search_insert(&mut self, c: char) {
        self.search_input.insert(c);
        self.session.input(&self.search_input.value);
    }

    pub fn search_backspace(&mut self) {
        self.search_input.backspace();
        self.session.input(&self.search_input.value);
    }

    pub fn search_clear(&mut self) {
        self.session.clear();
        self.search_input.clear();
    }

    /// Forward a navigation key to the session.
    pub fn search_key(&mut self, key: SessionKey) -> bool {
        let changed = self.session.key(key);
        self.sync_search_input();
        changed
    }

    /// Re-run a recent search while the history list is showing.
    pub fn pick_history(&mut self, index: usize) -> bool {
        if self.session.phase() != SessionPhase::History || index >= self.session.history_preview().len() {
            return false;
        }
        let picked = self.session.click_history(index);
        self.sync_search_input();
        picked
    }

    /// The session clears its query on commit and close; mirror that in the input.
    fn sync_search_input(&mut self) {
        if self.search_input.value != self.session.query() {
            self.search_input = TextInput::from_str(self.session.query());
        }
    }
}
