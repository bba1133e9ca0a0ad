use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod search;
mod shell;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    // Nothing is interactive behind the startup overlay.
    if app.is_initial_loading() {
        return;
    }

    if app.search_focused {
        search::handle_search_key(key, app);
    } else {
        shell::handle_shell_key(key, app, action_tx);
    }
}
