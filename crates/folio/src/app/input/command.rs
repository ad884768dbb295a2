use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::commands::{complete_command_input, execute_line};

use crate::app::state::App;

pub(super) fn handle_command_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.command_active = false;
            app.command_input.clear();
        }
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.command_active = false;
            app.command_input.clear();
            execute_command(app, &input);
        }
        KeyCode::Tab => {
            if let Some(completed) = complete_command_input(&app.command_input) {
                app.command_input = completed;
            }
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.command_active = false;
            }
        }
        KeyCode::Char(ch) => {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            {
                app.command_input.push(ch);
            }
        }
        _ => {}
    }
}

pub(super) fn open_command(app: &mut App) {
    app.command_active = true;
    app.command_input.clear();
}

fn execute_command(app: &mut App, raw: &str) {
    let Some(session) = app.session_mut() else {
        return;
    };
    if let Some(verb) = raw.split_whitespace().next() {
        log::debug!("command: {}", verb.to_lowercase());
    }
    let outcome = execute_line(session, raw);
    app.output = None;
    if let Some(effect) = outcome.effect {
        app.apply_effect(effect);
    }
}
