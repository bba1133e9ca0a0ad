use crate::app::App;
use std::time::Instant;
use tracing::debug;

use super::action_queue::{Action, ActionTx};

pub(super) fn run_action(action: Action, app: &mut App, action_tx: &ActionTx) {
    match action {
        Action::Navigate { path } => app.begin_navigation(&path, Instant::now()),
        Action::RunSearch { token } => {
            // Stale tokens yield no request.
            if let Some(request) = app.session.debounce_elapsed(token) {
                let tx = action_tx.clone();
                tokio::spawn(async move {
                    let outcome = request.run().await;
                    let _ = tx.send(Action::ApplySearch { outcome });
                });
            }
        }
        Action::ApplySearch { outcome } => {
            if !app.session.apply(outcome) {
                debug!("Search outcome arrived after the query changed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::channel;
    use super::*;
    use crate::app::test_support::test_app;
    use docsearch::SessionPhase;

    #[tokio::test]
    async fn search_runs_off_loop_and_applies() {
        let mut t = test_app();
        let (tx, mut rx) = channel();
        for c in "model".chars() {
            t.app.search_insert(c);
        }

        let token = t.fired.recv().await.unwrap();
        run_action(Action::RunSearch { token }, &mut t.app, &tx);
        assert_eq!(t.app.session.phase(), SessionPhase::Searching);

        let action = rx.recv().await.unwrap();
        run_action(action, &mut t.app, &tx);

        assert_eq!(t.app.session.phase(), SessionPhase::Results);
        assert_eq!(t.app.session.results()[0].document.url, "/model");
    }

    #[tokio::test]
    async fn outcome_for_replaced_query_is_dropped() {
        let mut t = test_app();
        let (tx, mut rx) = channel();
        for c in "model".chars() {
            t.app.search_insert(c);
        }
        let token = t.fired.recv().await.unwrap();
        run_action(Action::RunSearch { token }, &mut t.app, &tx);

        t.app.search_insert('s');
        let action = rx.recv().await.unwrap();
        run_action(action, &mut t.app, &tx);

        assert!(t.app.session.results().is_empty());
        assert_eq!(t.app.session.phase(), SessionPhase::Typing);
    }

    #[tokio::test]
    async fn navigate_starts_page_load() {
        let mut t = test_app();
        let (tx, _rx) = channel();
        run_action(
            Action::Navigate {
                path: "/routing".to_string(),
            },
            &mut t.app,
            &tx,
        );
        assert_eq!(t.app.page_load.as_ref().map(|l| l.target.as_str()), Some("/routing"));
    }
}
