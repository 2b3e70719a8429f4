//! Keyboard handling for the dashboard

use super::state::{DashboardState, Tab};
use crate::workers::Request;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Nothing,
    Quit,
    Dispatch(Request),
}

fn dispatch(request: Option<impl Into<Request>>) -> KeyOutcome {
    match request {
        Some(request) => KeyOutcome::Dispatch(request.into()),
        None => KeyOutcome::Nothing,
    }
}

pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyOutcome::Quit;
    }

    // The query box swallows every key while it has focus
    if state.editing_query {
        match key.code {
            KeyCode::Enter => {
                state.editing_query = false;
                return dispatch(state.begin_scan());
            }
            KeyCode::Esc => state.editing_query = false,
            KeyCode::Backspace => state.pop_query_char(),
            KeyCode::Char(c) => state.push_query_char(c),
            _ => {}
        }
        return KeyOutcome::Nothing;
    }

    let tab = state.active_tab();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Char('1') => return dispatch(state.select_tab(Tab::Pipeline)),
        KeyCode::Char('2') => return dispatch(state.select_tab(Tab::Intelligence)),
        KeyCode::Char('3') => return dispatch(state.select_tab(Tab::Copilot)),
        KeyCode::Tab => return dispatch(state.select_tab(tab.next())),
        KeyCode::BackTab => return dispatch(state.select_tab(tab.previous())),
        KeyCode::Char('d') => {
            state.dismiss_notice();
        }
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(1),
        KeyCode::Enter => state.select_lead_at_cursor(),
        KeyCode::Char('r') if tab == Tab::Pipeline => state.take_recommended_action(),
        KeyCode::Char('/') | KeyCode::Char('i') if tab == Tab::Intelligence => {
            if !state.intel_loading() {
                state.editing_query = true;
            }
        }
        KeyCode::Char('s') if tab == Tab::Intelligence => return dispatch(state.begin_scan()),
        KeyCode::Char('x') if tab == Tab::Intelligence => {
            if state.cancel_scan() {
                return KeyOutcome::Dispatch(Request::CancelScan);
            }
        }
        KeyCode::Char('g') if tab == Tab::Copilot => return dispatch(state.begin_pitch()),
        _ => {}
    }
    KeyOutcome::Nothing
}
