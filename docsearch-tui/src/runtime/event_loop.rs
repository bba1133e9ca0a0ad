use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use docsearch::DebounceToken;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Channels fed by the session's collaborators.
pub struct Inbox {
    /// Debounce tokens from the session's scheduler
    pub fired: UnboundedReceiver<DebounceToken>,
    /// Routes pushed by the session's navigator
    pub routes: UnboundedReceiver<String>,
}

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mut inbox: Inbox,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;
        app.tick(Instant::now());

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(token) = inbox.fired.try_recv() {
            let _ = action_tx.send(Action::RunSearch { token });
        }
        while let Ok(path) = inbox.routes.try_recv() {
            let _ = action_tx.send(Action::Navigate { path });
        }
        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, &action_tx);
        }

        if !app.running {
            break;
        }
    }

    app.session.teardown();
    Ok(())
}
