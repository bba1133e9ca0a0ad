//! Test doubles and fixtures shared by the unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::{DebounceToken, DocumentSource, Navigator, Result, Scheduler, SearchError};
use crate::types::{Document, PageNode, PageTree};

/// Scheduler that only records calls; tests decide when a token "fires".
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    scheduled: Vec<(Duration, DebounceToken)>,
    cancelled: Vec<DebounceToken>,
    fired: Vec<DebounceToken>,
}

impl ManualScheduler {
    pub fn scheduled(&self) -> Vec<(Duration, DebounceToken)> {
        self.state.lock().unwrap().scheduled.clone()
    }

    pub fn cancelled(&self) -> Vec<DebounceToken> {
        self.state.lock().unwrap().cancelled.clone()
    }

    pub fn last_token(&self) -> Option<DebounceToken> {
        self.state.lock().unwrap().scheduled.last().map(|(_, t)| *t)
    }

    /// Fires the most recent timer if it is still live and returns its token.
    pub fn fire(&self) -> Option<DebounceToken> {
        let mut state = self.state.lock().unwrap();
        let token = state.scheduled.last().map(|(_, t)| *t)?;
        if state.cancelled.contains(&token) || state.fired.contains(&token) {
            return None;
        }
        state.fired.push(token);
        Some(token)
    }

    /// Tokens scheduled that have neither been cancelled nor fired.
    pub fn live(&self) -> Vec<DebounceToken> {
        let state = self.state.lock().unwrap();
        state
            .scheduled
            .iter()
            .map(|(_, t)| *t)
            .filter(|t| !state.cancelled.contains(t) && !state.fired.contains(t))
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, token: DebounceToken) {
        self.state.lock().unwrap().scheduled.push((delay, token));
    }

    fn cancel(&self, token: DebounceToken) {
        self.state.lock().unwrap().cancelled.push(token);
    }
}

/// Navigator that remembers every pushed path.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Source whose listing always fails.
pub struct FailingSource;

#[async_trait]
impl DocumentSource for FailingSource {
    async fn list(&self) -> Result<Vec<Document>> {
        Err(SearchError::Source("index unavailable".to_string()))
    }
}

/// Two-page site: Home at `/`, User Guide at `/guide`.
pub fn home_and_guide() -> PageTree {
    PageTree::new()
        .with_entry("Home", PageNode::page("Home", "/", "Welcome"))
        .with_entry(
            "Guide",
            PageNode::page("User Guide", "/guide", "How to use controllers"),
        )
}
