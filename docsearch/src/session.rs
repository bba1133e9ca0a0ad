//! Search session state machine.
//!
//! The session owns everything the search box shows: query text, ranked results,
//! the dropdown's open state, the keyboard selection and recent queries. Hosts feed
//! it input, key and click events, and hand back debounce tokens when they fire.
//!
//! # Debounce handshake
//!
//! Every keystroke that leaves a searchable query cancels the previous timer and
//! schedules a fresh [`DebounceToken`]. Only the live token is honoured:
//!
//! 1. [`SearchSession::debounce_elapsed`] turns the live token into a [`SearchRequest`]
//!    and marks the session loading.
//! 2. [`SearchRequest::run`] lists documents and ranks them. It borrows nothing from
//!    the session, so hosts may run it on another task.
//! 3. [`SearchSession::apply`] installs the outcome, unless a newer keystroke has
//!    superseded it in the meantime.
//!
//! [`SearchSession::run_pending`] performs all three steps in place.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::history::RecentSearches;
use super::scorer::rank;
use super::traits::{DebounceToken, DocumentSource, HistoryStore, Navigator, Result, Scheduler};
use super::types::ScoredResult;

/// Keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Up,
    Down,
    Enter,
    Escape,
}

/// What the search box is currently showing, derived from session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Empty query, nothing shown
    Idle,
    /// Query too short, or waiting for the debounce to elapse
    Typing,
    /// Scoring in flight
    Searching,
    /// Ranked results shown
    Results,
    /// A search ran and matched nothing
    NoMatch,
    /// Empty query with the recent-searches list open
    History,
}

/// A scoring run detached from the session.
pub struct SearchRequest<S: ?Sized> {
    token: DebounceToken,
    query: String,
    source: Arc<S>,
    limit: usize,
    excerpt_chars: usize,
}

impl<S> SearchRequest<S>
where
    S: DocumentSource + ?Sized,
{
    pub fn token(&self) -> DebounceToken {
        self.token
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// List documents from the source and rank them against the query.
    pub async fn run(self) -> SearchOutcome {
        let result = self
            .source
            .list()
            .await
            .map(|documents| rank(&self.query, documents, self.limit, self.excerpt_chars));
        SearchOutcome {
            token: self.token,
            result,
        }
    }
}

/// Result of a [`SearchRequest`], to be handed back to [`SearchSession::apply`].
#[derive(Debug)]
pub struct SearchOutcome {
    pub token: DebounceToken,
    pub result: Result<Vec<ScoredResult>>,
}

/// Search box state machine.
///
/// # Type Parameters
///
/// * `S` - DocumentSource the documents are listed from
/// * `H` - HistoryStore recent queries are persisted to
/// * `N` - Navigator committed results are opened with
/// * `T` - Scheduler debounce timers run on
///
/// # Examples
///
/// ```ignore
/// let mut session = SearchSession::mount(source, store, navigator, scheduler, SearchConfig::default());
/// session.input("contro");
/// // ...once the scheduler reports the token:
/// session.run_pending(token).await;
/// session.key(SessionKey::Down);
/// session.key(SessionKey::Enter);
/// ```
pub struct SearchSession<S, H, N, T>
where
    S: DocumentSource + ?Sized,
    H: HistoryStore,
    N: Navigator,
    T: Scheduler,
{
    source: Arc<S>,
    store: H,
    navigator: N,
    scheduler: T,
    config: SearchConfig,

    query: String,
    results: Vec<ScoredResult>,
    is_loading: bool,
    is_open: bool,
    selected: Option<usize>,
    history: RecentSearches,

    next_token: u64,
    pending_timer: Option<DebounceToken>,
    in_flight: Option<DebounceToken>,
    // A search has completed for the current query text
    settled: bool,
}

impl<S, H, N, T> SearchSession<S, H, N, T>
where
    S: DocumentSource + ?Sized,
    H: HistoryStore,
    N: Navigator,
    T: Scheduler,
{
    /// Create a closed, empty session and load recent queries from `store`.
    ///
    /// An unreadable store starts the session with no history.
    pub fn mount(source: Arc<S>, store: H, navigator: N, scheduler: T, config: SearchConfig) -> Self {
        let history = match store.load() {
            Ok(entries) => RecentSearches::from_entries(entries, config.history_limit),
            Err(e) => {
                warn!(error = %e, "Failed to load search history, starting empty");
                RecentSearches::new(config.history_limit)
            }
        };

        Self {
            source,
            store,
            navigator,
            scheduler,
            config,
            query: String::new(),
            results: Vec::new(),
            is_loading: false,
            is_open: false,
            selected: None,
            history,
            next_token: 0,
            pending_timer: None,
            in_flight: None,
            settled: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[ScoredResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Highlighted result, `None` when nothing is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_result(&self) -> Option<&ScoredResult> {
        self.selected.and_then(|i| self.results.get(i))
    }

    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// The recent queries offered in the history view.
    pub fn history_preview(&self) -> &[String] {
        let entries = self.history.entries();
        &entries[..entries.len().min(self.config.history_preview)]
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            return SessionPhase::Searching;
        }
        let len = self.query_len();
        if len == 0 {
            return if self.is_open && !self.history.is_empty() {
                SessionPhase::History
            } else {
                SessionPhase::Idle
            };
        }
        if len < self.config.min_query_len {
            SessionPhase::Typing
        } else if !self.results.is_empty() {
            SessionPhase::Results
        } else if self.settled {
            SessionPhase::NoMatch
        } else {
            SessionPhase::Typing
        }
    }

    /// Replace the query text, as on every keystroke.
    ///
    /// A searchable query opens the dropdown and restarts the debounce timer. Anything
    /// shorter closes it, drops results and cancels whatever was pending.
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        self.selected = None;
        self.settled = false;
        self.cancel_pending();

        if self.query_len() >= self.config.min_query_len {
            self.is_open = true;
            self.schedule_search();
        } else {
            self.is_open = false;
            self.results.clear();
        }
    }

    /// The input gained focus.
    pub fn focus(&mut self) {
        let len = self.query_len();
        if len >= self.config.min_query_len || (len == 0 && !self.history.is_empty()) {
            self.is_open = true;
        }
    }

    /// Handle a key. Returns true when the key changed something.
    ///
    /// Arrows and Enter only act while the dropdown is open.
    pub fn key(&mut self, key: SessionKey) -> bool {
        match key {
            SessionKey::Escape => {
                let had_state = self.is_open || !self.query.is_empty();
                self.close();
                had_state
            }
            _ if !self.is_open => false,
            SessionKey::Down => {
                let next = match self.selected {
                    None if !self.results.is_empty() => Some(0),
                    Some(i) if i + 1 < self.results.len() => Some(i + 1),
                    other => other,
                };
                self.move_selection(next)
            }
            SessionKey::Up => {
                let next = match self.selected {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
                self.move_selection(next)
            }
            SessionKey::Enter => match self.selected {
                Some(index) => self.commit(index),
                None => false,
            },
        }
    }

    /// A result row was clicked.
    pub fn click_result(&mut self, index: usize) -> bool {
        self.is_open && self.commit(index)
    }

    /// A recent-search row was clicked: search for it again, without navigating.
    pub fn click_history(&mut self, index: usize) -> bool {
        match self.history.get(index).map(str::to_string) {
            Some(query) => {
                self.input(&query);
                true
            }
            None => false,
        }
    }

    /// A click landed outside the input and the dropdown.
    pub fn click_outside(&mut self) {
        self.close();
    }

    /// Close the dropdown and forget the query. Recent queries are kept.
    pub fn close(&mut self) {
        self.cancel_pending();
        self.is_open = false;
        self.query.clear();
        self.results.clear();
        self.selected = None;
        self.settled = false;
    }

    /// The clear button: same as [`close`](Self::close).
    pub fn clear(&mut self) {
        debug!("Search cleared");
        self.close();
    }

    /// Cancel outstanding work before the widget goes away.
    pub fn teardown(&mut self) {
        self.cancel_pending();
    }

    /// A debounce timer fired. Returns the search to run if `token` is still live.
    pub fn debounce_elapsed(&mut self, token: DebounceToken) -> Option<SearchRequest<S>> {
        if self.pending_timer != Some(token) {
            debug!(%token, "Ignoring superseded debounce");
            return None;
        }
        self.pending_timer = None;

        self.in_flight = Some(token);
        self.is_loading = true;
        debug!(%token, query = %self.query, "Search started");

        Some(SearchRequest {
            token,
            query: self.query.clone(),
            source: Arc::clone(&self.source),
            limit: self.config.max_results,
            excerpt_chars: self.config.excerpt_chars,
        })
    }

    /// Install a finished search. Returns false when the outcome was stale and dropped.
    ///
    /// A failed search shows as no match; the error is logged, never returned.
    pub fn apply(&mut self, outcome: SearchOutcome) -> bool {
        if self.in_flight != Some(outcome.token) {
            debug!(token = %outcome.token, "Discarding stale search outcome");
            return false;
        }
        self.in_flight = None;
        self.is_loading = false;
        self.selected = None;
        self.settled = true;

        match outcome.result {
            Ok(results) => {
                debug!(token = %outcome.token, count = results.len(), "Search finished");
                self.results = results;
            }
            Err(e) => {
                warn!(token = %outcome.token, error = %e, "Search failed");
                self.results.clear();
            }
        }
        true
    }

    /// Run the search for `token` to completion in place.
    pub async fn run_pending(&mut self, token: DebounceToken) -> bool {
        match self.debounce_elapsed(token) {
            Some(request) => {
                let outcome = request.run().await;
                self.apply(outcome)
            }
            None => false,
        }
    }

    fn commit(&mut self, index: usize) -> bool {
        let Some(url) = self.results.get(index).map(|r| r.document.url.clone()) else {
            return false;
        };

        if self.history.record(&self.query) {
            if let Err(e) = self.store.save(self.history.entries()) {
                warn!(error = %e, "Failed to save search history");
            }
        }

        info!(query = %self.query, url = %url, "Search result opened");
        self.navigator.push(&url);
        self.close();
        true
    }

    fn move_selection(&mut self, next: Option<usize>) -> bool {
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    fn schedule_search(&mut self) {
        self.next_token += 1;
        let token = DebounceToken(self.next_token);
        self.pending_timer = Some(token);
        self.scheduler.schedule(self.config.debounce(), token);
    }

    /// Cancel the pending timer and orphan any in-flight search.
    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending_timer.take() {
            self.scheduler.cancel(token);
        }
        self.in_flight = None;
        self.is_loading = false;
    }

    fn query_len(&self) -> usize {
        self.query.trim().chars().count()
    }
}

impl<S, H, N, T> Drop for SearchSession<S, H, N, T>
where
    S: DocumentSource + ?Sized,
    H: HistoryStore,
    N: Navigator,
    T: Scheduler,
{
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MockDocumentSource, PageTreeSource};
    use crate::store::MemoryHistoryStore;
    use crate::testing::{home_and_guide, FailingSource, ManualScheduler, RecordingNavigator};
    use crate::traits::SearchError;
    use crate::types::{Document, PageNode, PageTree};
    use crate::walker::walk;
    use proptest::prelude::*;
    use std::time::Duration;

    struct Harness<S: DocumentSource + ?Sized> {
        session: SearchSession<S, MemoryHistoryStore, RecordingNavigator, ManualScheduler>,
        scheduler: ManualScheduler,
        navigator: RecordingNavigator,
        store: MemoryHistoryStore,
    }

    fn harness_with<S: DocumentSource + ?Sized>(source: Arc<S>, store: MemoryHistoryStore) -> Harness<S> {
        let scheduler = ManualScheduler::default();
        let navigator = RecordingNavigator::default();
        let session = SearchSession::mount(
            source,
            store.clone(),
            navigator.clone(),
            scheduler.clone(),
            SearchConfig::default(),
        );
        Harness {
            session,
            scheduler,
            navigator,
            store,
        }
    }

    fn site() -> Harness<PageTreeSource> {
        harness_with(
            Arc::new(PageTreeSource::new(home_and_guide(), 64)),
            MemoryHistoryStore::new(),
        )
    }

    fn counted_site() -> (Harness<MockDocumentSource>, MockDocumentSource) {
        let source = MockDocumentSource::new(walk(&home_and_guide(), 64).unwrap());
        (
            harness_with(Arc::new(source.clone()), MemoryHistoryStore::new()),
            source,
        )
    }

    async fn search<S: DocumentSource + ?Sized>(h: &mut Harness<S>, query: &str) {
        h.session.input(query);
        let token = h.scheduler.fire().expect("search should be scheduled");
        assert!(h.session.run_pending(token).await);
    }

    fn urls(results: &[ScoredResult]) -> Vec<&str> {
        results.iter().map(|r| r.document.url.as_str()).collect()
    }

    #[test]
    fn starts_idle_and_closed() {
        let h = site();
        assert_eq!(h.session.phase(), SessionPhase::Idle);
        assert!(!h.session.is_open());
        assert_eq!(h.session.selected_index(), None);
    }

    #[test]
    fn short_query_stays_closed_without_scheduling() {
        let mut h = site();
        h.session.input("c");

        assert!(!h.session.is_open());
        assert!(h.session.results().is_empty());
        assert!(h.scheduler.scheduled().is_empty());
        assert_eq!(h.session.phase(), SessionPhase::Typing);

        h.session.input(" c  ");
        assert!(!h.session.is_open());
    }

    #[test]
    fn searchable_query_opens_and_schedules_debounce() {
        let mut h = site();
        h.session.input("co");

        assert!(h.session.is_open());
        assert_eq!(
            h.scheduler.scheduled(),
            vec![(Duration::from_millis(300), DebounceToken(1))]
        );
        assert_eq!(h.session.phase(), SessionPhase::Typing);
    }

    #[tokio::test]
    async fn content_match_surfaces_guide_only() {
        let mut h = site();
        search(&mut h, "contro").await;

        let results = h.session.results();
        assert_eq!(urls(results), vec!["/guide"]);
        assert_eq!(results[0].score, 5);
        assert_eq!(h.session.phase(), SessionPhase::Results);
        assert!(!h.session.is_loading());
    }

    #[tokio::test]
    async fn title_prefix_match_surfaces_home_only() {
        let mut h = site();
        search(&mut h, "Home").await;

        assert_eq!(urls(h.session.results()), vec!["/"]);
        assert_eq!(h.session.results()[0].score, 15);
    }

    #[tokio::test]
    async fn no_match_is_reported() {
        let mut h = site();
        search(&mut h, "zebra").await;

        assert!(h.session.results().is_empty());
        assert!(h.session.is_open());
        assert_eq!(h.session.phase(), SessionPhase::NoMatch);
    }

    #[tokio::test]
    async fn rapid_keystrokes_score_once_for_final_text() {
        let (mut h, source) = counted_site();
        for text in ["co", "con", "cont", "contro"] {
            h.session.input(text);
        }

        assert_eq!(h.scheduler.live(), vec![DebounceToken(4)]);
        assert_eq!(
            h.scheduler.cancelled(),
            vec![DebounceToken(1), DebounceToken(2), DebounceToken(3)]
        );

        // A superseded timer that fires anyway is ignored.
        assert!(!h.session.run_pending(DebounceToken(2)).await);
        assert_eq!(source.call_count(), 0);

        assert!(h.session.run_pending(DebounceToken(4)).await);
        assert_eq!(source.call_count(), 1);
        assert_eq!(urls(h.session.results()), vec!["/guide"]);
    }

    #[tokio::test]
    async fn fired_timer_leaves_only_the_next_one_pending() {
        let mut h = site();
        search(&mut h, "aa").await;
        assert!(h.scheduler.live().is_empty());

        h.session.input("aa");

        assert_eq!(h.scheduler.live(), vec![DebounceToken(2)]);
        assert_eq!(h.scheduler.fire(), Some(DebounceToken(2)));
        assert_eq!(h.scheduler.fire(), None);
        assert!(h.scheduler.live().is_empty());
    }

    #[tokio::test]
    async fn shortening_query_cancels_pending_search() {
        let mut h = site();
        search(&mut h, "home").await;
        h.session.input("contro");
        let pending = h.scheduler.last_token().unwrap();

        h.session.input("c");

        assert!(h.scheduler.cancelled().contains(&pending));
        assert!(h.session.results().is_empty());
        assert!(!h.session.is_open());
        assert!(h.session.debounce_elapsed(pending).is_none());
        assert!(h.session.results().is_empty());
    }

    #[tokio::test]
    async fn in_flight_result_is_dropped_after_new_keystroke() {
        let mut h = site();
        h.session.input("home");
        let first = h
            .session
            .debounce_elapsed(h.scheduler.last_token().unwrap())
            .unwrap();
        assert!(h.session.is_loading());
        assert_eq!(h.session.phase(), SessionPhase::Searching);

        h.session.input("guide");
        assert!(!h.session.is_loading());

        let stale = first.run().await;
        assert!(!h.session.apply(stale));
        assert!(h.session.results().is_empty());

        let token = h.scheduler.last_token().unwrap();
        assert!(h.session.run_pending(token).await);
        assert_eq!(urls(h.session.results()), vec!["/guide"]);
    }

    #[tokio::test]
    async fn arrows_clamp_selection() {
        let tree = PageTree::new()
            .with_entry("A", PageNode::page("Model A", "/a", ""))
            .with_entry("B", PageNode::page("Model B", "/b", ""));
        let mut h = harness_with(
            Arc::new(PageTreeSource::new(tree, 64)),
            MemoryHistoryStore::new(),
        );
        search(&mut h, "model").await;

        for _ in 0..5 {
            h.session.key(SessionKey::Down);
        }
        assert_eq!(h.session.selected_index(), Some(1));

        assert!(h.session.key(SessionKey::Up));
        assert_eq!(h.session.selected_index(), Some(0));
        assert!(h.session.key(SessionKey::Up));
        assert_eq!(h.session.selected_index(), None);
        assert!(!h.session.key(SessionKey::Up));
        assert_eq!(h.session.selected_index(), None);
    }

    #[test]
    fn arrows_ignored_while_closed() {
        let mut h = site();
        assert!(!h.session.key(SessionKey::Down));
        assert!(!h.session.key(SessionKey::Enter));
        assert_eq!(h.session.selected_index(), None);
    }

    #[tokio::test]
    async fn enter_commits_selected_result() {
        let mut h = site();
        search(&mut h, "contro").await;
        h.session.key(SessionKey::Down);

        assert!(h.session.key(SessionKey::Enter));

        assert_eq!(h.navigator.paths(), vec!["/guide"]);
        assert_eq!(h.session.history()[0], "contro");
        assert_eq!(h.store.raw().as_deref(), Some(r#"["contro"]"#));
        assert!(!h.session.is_open());
        assert_eq!(h.session.query(), "");
        assert_eq!(h.session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn enter_without_selection_does_nothing() {
        let mut h = site();
        search(&mut h, "contro").await;

        assert!(!h.session.key(SessionKey::Enter));
        assert!(h.navigator.paths().is_empty());
        assert!(h.session.is_open());
    }

    #[tokio::test]
    async fn click_result_commits() {
        let mut h = site();
        search(&mut h, "home").await;

        assert!(h.session.click_result(0));
        assert_eq!(h.navigator.paths(), vec!["/"]);
        assert!(!h.session.click_result(0));
    }

    #[tokio::test]
    async fn escape_closes_but_keeps_history() {
        let store = MemoryHistoryStore::with_raw(r#"["model"]"#);
        let mut h = harness_with(Arc::new(PageTreeSource::new(home_and_guide(), 64)), store);
        search(&mut h, "home").await;
        h.session.key(SessionKey::Down);

        assert!(h.session.key(SessionKey::Escape));

        assert!(!h.session.is_open());
        assert_eq!(h.session.query(), "");
        assert_eq!(h.session.selected_index(), None);
        assert!(h.session.results().is_empty());
        assert_eq!(h.session.history(), ["model"]);
    }

    #[test]
    fn closing_cancels_pending_timer() {
        let mut h = site();
        h.session.input("home");
        h.session.click_outside();

        assert_eq!(h.scheduler.cancelled(), vec![DebounceToken(1)]);
        assert!(h.session.debounce_elapsed(DebounceToken(1)).is_none());
    }

    #[test]
    fn drop_cancels_pending_timer() {
        let h = site();
        let scheduler = h.scheduler.clone();
        let mut session = h.session;
        session.input("home");
        drop(session);

        assert_eq!(scheduler.cancelled(), vec![DebounceToken(1)]);
    }

    #[test]
    fn focus_opens_history_for_empty_query() {
        let store = MemoryHistoryStore::with_raw(r#"["view","model"]"#);
        let mut h = harness_with(Arc::new(PageTreeSource::new(home_and_guide(), 64)), store);

        h.session.focus();

        assert!(h.session.is_open());
        assert_eq!(h.session.phase(), SessionPhase::History);
        assert_eq!(h.session.history_preview(), ["view", "model"]);
    }

    #[test]
    fn focus_without_history_stays_closed() {
        let mut h = site();
        h.session.focus();
        assert!(!h.session.is_open());
        assert_eq!(h.session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn history_preview_shows_five() {
        let raw = serde_json::to_string(&(0..8).map(|i| format!("q{}", i)).collect::<Vec<_>>()).unwrap();
        let h = harness_with(
            Arc::new(PageTreeSource::new(home_and_guide(), 64)),
            MemoryHistoryStore::with_raw(raw),
        );
        assert_eq!(h.session.history().len(), 8);
        assert_eq!(h.session.history_preview().len(), 5);
    }

    #[tokio::test]
    async fn clicking_history_searches_without_navigating() {
        let store = MemoryHistoryStore::with_raw(r#"["guide"]"#);
        let mut h = harness_with(Arc::new(PageTreeSource::new(home_and_guide(), 64)), store);
        h.session.focus();

        assert!(h.session.click_history(0));
        assert_eq!(h.session.query(), "guide");
        assert!(h.session.is_open());
        assert!(h.navigator.paths().is_empty());

        let token = h.scheduler.last_token().unwrap();
        assert!(h.session.run_pending(token).await);
        assert_eq!(urls(h.session.results()), vec!["/guide"]);

        assert!(!h.session.click_history(3));
    }

    #[tokio::test]
    async fn failing_source_degrades_to_no_match() {
        let mut h = harness_with(Arc::new(FailingSource), MemoryHistoryStore::new());
        search(&mut h, "home").await;

        assert!(!h.session.is_loading());
        assert!(h.session.results().is_empty());
        assert_eq!(h.session.phase(), SessionPhase::NoMatch);
    }

    #[tokio::test]
    async fn malformed_tree_degrades_to_no_match() {
        let deep = PageNode::folder(
            "Outer",
            None,
            vec![PageNode::folder("Inner", None, vec![PageNode::page("Home", "/", "")])],
        );
        let source = PageTreeSource::new(PageTree::new().with_entry("Outer", deep), 1);
        let mut h = harness_with(Arc::new(source), MemoryHistoryStore::new());

        search(&mut h, "home").await;

        assert!(!h.session.is_loading());
        assert_eq!(h.session.phase(), SessionPhase::NoMatch);
    }

    #[test]
    fn apply_error_outcome_clears_results() {
        let mut h = site();
        h.session.input("home");
        let token = h.scheduler.last_token().unwrap();
        let _request = h.session.debounce_elapsed(token).unwrap();

        let applied = h.session.apply(SearchOutcome {
            token,
            result: Err(SearchError::Other("boom".to_string())),
        });

        assert!(applied);
        assert!(!h.session.is_loading());
        assert!(h.session.results().is_empty());
    }

    #[test]
    fn corrupt_history_starts_empty() {
        let h = harness_with(
            Arc::new(PageTreeSource::new(home_and_guide(), 64)),
            MemoryHistoryStore::with_raw("{not json"),
        );
        assert!(h.session.history().is_empty());
    }

    #[tokio::test]
    async fn history_is_capped_and_deduplicated() {
        let docs: Vec<Document> = (0..12)
            .map(|i| Document::new(format!("Topic{:02}", i), format!("/t{}", i), ""))
            .collect();
        let mut h = harness_with(
            Arc::new(MockDocumentSource::new(docs)),
            MemoryHistoryStore::new(),
        );

        for i in (0..12).chain([3, 11]) {
            search(&mut h, &format!("topic{:02}", i)).await;
            h.session.key(SessionKey::Down);
            assert!(h.session.key(SessionKey::Enter));
        }

        let history = h.session.history();
        assert_eq!(history.len(), 10);
        assert_eq!(history[0], "topic11");
        assert_eq!(history[1], "topic03");
        assert_eq!(history.iter().filter(|q| *q == "topic11").count(), 1);

        let stored: Vec<String> = serde_json::from_str(&h.store.raw().unwrap()).unwrap();
        assert_eq!(stored, history);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_drives_a_single_search() {
        use crate::scheduler::TokioScheduler;

        let source = MockDocumentSource::new(walk(&home_and_guide(), 64).unwrap());
        let (scheduler, mut fired) = TokioScheduler::new();
        let mut session = SearchSession::mount(
            Arc::new(source.clone()),
            MemoryHistoryStore::new(),
            RecordingNavigator::default(),
            scheduler,
            SearchConfig::default(),
        );

        for text in ["co", "con", "contr", "contro"] {
            session.input(text);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let token = fired.recv().await.unwrap();
        assert_eq!(token, DebounceToken(4));
        assert!(session.run_pending(token).await);
        assert_eq!(source.call_count(), 1);
        assert_eq!(urls(session.results()), vec!["/guide"]);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(fired.try_recv().is_err());
    }

    #[derive(Debug, Clone)]
    enum Event {
        Key(SessionKey),
        Input(String),
        Fire,
    }

    fn event() -> impl Strategy<Value = Event> {
        prop_oneof![
            Just(Event::Key(SessionKey::Up)),
            Just(Event::Key(SessionKey::Down)),
            Just(Event::Key(SessionKey::Enter)),
            Just(Event::Key(SessionKey::Escape)),
            "[a-z ]{0,4}".prop_map(Event::Input),
            Just(Event::Fire),
        ]
    }

    proptest! {
        #[test]
        fn state_invariants_hold_for_any_event_sequence(events in prop::collection::vec(event(), 0..80)) {
            let docs: Vec<Document> = ["alpha", "beta", "gamma", "delta", "ab", "ba"]
                .iter()
                .map(|t| Document::new(*t, format!("/{}", t), "abc"))
                .collect();
            let mut h = harness_with(Arc::new(MockDocumentSource::new(docs.clone())), MemoryHistoryStore::new());

            for event in events {
                match event {
                    Event::Key(key) => { h.session.key(key); }
                    Event::Input(text) => h.session.input(&text),
                    Event::Fire => {
                        if let Some(token) = h.scheduler.fire() {
                            if let Some(request) = h.session.debounce_elapsed(token) {
                                let result = rank(request.query(), docs.clone(), 10, 150);
                                h.session.apply(SearchOutcome { token, result: Ok(result) });
                            }
                        }
                    }
                }

                let s = &h.session;
                if let Some(i) = s.selected_index() {
                    prop_assert!(i < s.results().len());
                }
                if s.query().trim().chars().count() < 2 {
                    prop_assert!(s.results().is_empty());
                }
                if s.is_open() {
                    prop_assert!(s.query().trim().chars().count() >= 2 || !s.history().is_empty());
                }
                prop_assert!(s.results().iter().all(|r| r.score > 0));
                prop_assert!(s.history().len() <= 10);
                prop_assert!(h.scheduler.live().len() <= 1);
            }
        }
    }
}
