//! Keys captured while the carousel is open.
//!
//! Only Left/Right and Esc do anything; every other key is swallowed so
//! the panes underneath stay untouched.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::state::App;
use crate::carousel::{DismissReason, Step};

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let Some(session) = app.session_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left => session.step_modal(Step::Previous),
        KeyCode::Right => session.step_modal(Step::Next),
        KeyCode::Esc => session.close_modal(DismissReason::Cancel),
        _ => {}
    }
}
