use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::state::{rect_contains, row_at, App};
use crate::carousel::{DismissReason, Step};
use crate::session::{Effect, Pane};

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.command_active || app.session().is_none() {
        return;
    }
    if app.session().is_some_and(|session| session.modal().is_some()) {
        handle_modal_mouse(app, mouse);
        return;
    }

    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let section = row_at(&app.hits.section_rows, column, row);
            let entry = row_at(&app.hits.entry_rows, column, row);
            let in_left = rect_contains(app.hits.left_pane, column, row);
            let in_right = rect_contains(app.hits.right_pane, column, row);
            let Some(session) = app.session_mut() else {
                return;
            };
            let effect = if let Some(index) = section {
                session.click_section(index);
                None
            } else if let Some(index) = entry {
                session.click_entry(index)
            } else {
                if in_left {
                    session.set_focus(Pane::Left);
                } else if in_right {
                    session.set_focus(Pane::Right);
                }
                None
            };
            if let Some(effect) = effect {
                app.apply_effect(effect);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let delta = if mouse.kind == MouseEventKind::ScrollUp {
                -1
            } else {
                1
            };
            if let Some(session) = app.session_mut() {
                session.move_selection(delta);
            }
        }
        _ => {}
    }
}

fn handle_modal_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (column, row) = (mouse.column, mouse.row);
    let hits = &app.hits;
    let link = hits
        .popup_links
        .iter()
        .find(|(area, _, _)| rect_contains(Some(*area), column, row))
        .map(|(_, label, url)| Effect::OpenUrl {
            label: label.clone(),
            url: url.clone(),
        });
    let in_popup = rect_contains(hits.popup, column, row);
    let prev = rect_contains(hits.prev_button, column, row);
    let next = rect_contains(hits.next_button, column, row);
    let close = rect_contains(hits.close_button, column, row);

    if let Some(effect) = link {
        app.apply_effect(effect);
        return;
    }
    let Some(session) = app.session_mut() else {
        return;
    };
    if prev {
        session.step_modal(Step::Previous);
    } else if next {
        session.step_modal(Step::Next);
    } else if close {
        session.close_modal(DismissReason::CloseButton);
    } else if !in_popup {
        session.close_modal(DismissReason::Background);
    }
}
