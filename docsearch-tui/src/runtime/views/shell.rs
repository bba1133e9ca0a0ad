use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_shell_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Tab | KeyCode::Right => app.nav_next(),
        KeyCode::BackTab | KeyCode::Left => app.nav_prev(),
        KeyCode::Enter => {
            let path = app.focused_nav_item().href.to_string();
            enqueue_action(action_tx, Action::Navigate { path });
        }
        _ => {}
    }
}
