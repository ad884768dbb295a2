use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::state::{App, LoadState};
use crate::events::AppEvent;
use crate::keymap::{matches_chord, KeyChord};

use super::command::{handle_command_input, open_command};
use super::modal::handle_modal_key;
use super::mouse::handle_mouse_event;

/// Main event dispatcher.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => {
            if key.kind != KeyEventKind::Release {
                handle_key(app, key);
            }
        }
        AppEvent::Mouse(mouse) => handle_mouse_event(app, mouse),
        AppEvent::Resize => {}
        AppEvent::DataLoaded(result) => app.finish_loading(result),
    }
}

fn chord_hit(chord: &Option<KeyChord>, key: KeyEvent) -> bool {
    chord.as_ref().is_some_and(|chord| matches_chord(key, chord))
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if chord_hit(&app.keys.exit, key) {
        app.should_quit = true;
        return;
    }
    if !matches!(app.load, LoadState::Ready(_)) {
        return;
    }
    if app.session().is_some_and(|session| session.modal().is_some()) {
        handle_modal_key(app, key);
        return;
    }
    if app.command_active {
        handle_command_input(app, key);
        return;
    }

    if chord_hit(&app.keys.command, key) {
        open_command(app);
        return;
    }

    let keys = app.keys.clone();
    let Some(session) = app.session_mut() else {
        return;
    };

    if chord_hit(&keys.toggle_focus, key) {
        session.toggle_focus();
        return;
    }

    if chord_hit(&keys.cycle_skin, key) {
        let message = match session.cycle_skin() {
            Ok(skin) => format!("skin: {}", skin.name()),
            Err(err) => {
                log::warn!("{err}");
                format!("skin: {} (not saved: {err})", session.skin().name())
            }
        };
        app.set_output(message);
        return;
    }

    if chord_hit(&keys.activate, key) {
        if let Some(effect) = session.activate_selected_entry() {
            app.apply_effect(effect);
        }
        return;
    }

    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => session.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => session.move_selection(1),
        _ => {}
    }
}
