use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docsearch::{SessionKey, SessionPhase};

pub(super) fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('x') | KeyCode::Char('X')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.search_clear();
        }
        KeyCode::Esc => {
            app.search_key(SessionKey::Escape);
            app.search_focused = false;
        }
        KeyCode::Tab | KeyCode::BackTab => app.blur_search(),
        KeyCode::Up => {
            app.search_key(SessionKey::Up);
        }
        KeyCode::Down => {
            app.search_key(SessionKey::Down);
        }
        KeyCode::Enter => {
            if app.search_key(SessionKey::Enter) {
                app.search_focused = false;
            }
        }
        KeyCode::Char(c @ '1'..='5') if app.session.phase() == SessionPhase::History => {
            let index = c as usize - '1' as usize;
            app.pick_history(index);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_insert(c);
        }
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.home(),
        KeyCode::End => app.search_input.end(),
        _ => {}
    }
}
