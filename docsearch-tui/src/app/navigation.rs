use super::{App, LoadingWindow, NavItem, PageLoad, NAV_ITEMS};
use docsearch::Navigator;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// Navigator handing route changes to the event loop.
#[derive(Debug, Clone)]
pub struct RouteNavigator {
    tx: UnboundedSender<String>,
}

impl RouteNavigator {
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for RouteNavigator {
    fn push(&self, path: &str) {
        // Receiver gone means the app is shutting down.
        let _ = self.tx.send(path.to_string());
    }
}

impl App {
    /// Start moving to `path`. The page is swapped in once the loading window ends.
    pub fn begin_navigation(&mut self, path: &str, now: Instant) {
        if path == self.route && self.page_load.is_none() {
            debug!(path, "Already on route");
            return;
        }
        info!(from = %self.route, to = path, "Navigating");

        let window = LoadingWindow::new(now, self.navigation_time);
        if window.is_over(now) {
            self.finish_navigation(path.to_string());
        } else {
            self.page_load = Some(PageLoad {
                target: path.to_string(),
                window,
            });
        }
    }

    pub(super) fn finish_navigation(&mut self, target: String) {
        if let Some(index) = NAV_ITEMS.iter().position(|item| item.href == target) {
            self.nav_index = index;
        }
        if !self.pages.iter().any(|page| page.url == target) {
            debug!(route = %target, "No page for route");
        }
        self.route = target;
    }

    pub fn focused_nav_item(&self) -> NavItem {
        NAV_ITEMS[self.nav_index % NAV_ITEMS.len()]
    }

    pub fn nav_next(&mut self) {
        self.nav_index = (self.nav_index + 1) % NAV_ITEMS.len();
    }

    pub fn nav_prev(&mut self) {
        self.nav_index = (self.nav_index + NAV_ITEMS.len() - 1) % NAV_ITEMS.len();
    }
}
