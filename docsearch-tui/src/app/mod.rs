use crate::config::AppConfig;
use docsearch::{Document, DocumentSource, HistoryStore, SearchSession, TokioScheduler};
use std::time::{Duration, Instant};

mod navigation;
mod search;
mod state;
pub use navigation::RouteNavigator;
pub use state::{LoadingWindow, NavItem, PageLoad, TextInput, NAV_ITEMS};

/// The search session as wired into the terminal app.
pub type AppSession =
    SearchSession<dyn DocumentSource, Box<dyn HistoryStore>, RouteNavigator, TokioScheduler>;

pub struct App {
    pub running: bool,
    pub title: String,
    pub footer: Option<String>,
    pub status_message: Option<String>,

    // Search box
    pub session: AppSession,
    pub search_input: TextInput,
    pub search_focused: bool,

    // Pages and routing
    pub pages: Vec<Document>,
    pub route: String,
    pub nav_index: usize,
    pub page_load: Option<PageLoad>,
    navigation_time: Duration,

    // Startup overlay
    pub initial_load: Option<LoadingWindow>,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(cfg: &AppConfig, session: AppSession, pages: Vec<Document>, now: Instant) -> Self {
        Self {
            running: true,
            title: cfg.title.clone(),
            footer: cfg.footer.clone(),
            status_message: None,
            session,
            search_input: TextInput::new(),
            search_focused: false,
            pages,
            route: NAV_ITEMS[0].href.to_string(),
            nav_index: 0,
            page_load: None,
            navigation_time: cfg.navigation(),
            initial_load: Some(LoadingWindow::new(now, cfg.initial_load())),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_initial_loading(&self) -> bool {
        self.initial_load.is_some()
    }

    pub fn is_page_loading(&self) -> bool {
        self.page_load.is_some()
    }

    /// Advance spinners and close loading windows whose time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.is_initial_loading() || self.is_page_loading() || self.session.is_loading() {
            self.throbber_state.calc_next();
        }

        if self.initial_load.is_some_and(|w| w.is_over(now)) {
            self.initial_load = None;
        }

        if let Some(load) = self.page_load.take_if(|load| load.window.is_over(now)) {
            self.finish_navigation(load.target);
        }
    }

    /// The page for the current route, if the site has one.
    pub fn current_page(&self) -> Option<&Document> {
        self.pages.iter().find(|page| page.url == self.route)
    }
}
