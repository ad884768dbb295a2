use super::{Effect, NavigationState, Pane, RightPane, Session, SessionOptions};
use crate::carousel::{DismissReason, MediaKind, MediaView, Step};
use crate::catalog::Catalog;
use crate::state::load_state;
use crate::test_utils::{sample_catalog, StubProbe};
use crate::theme::Skin;
use std::path::PathBuf;
use tempfile::TempDir;

fn options(state_path: Option<PathBuf>) -> SessionOptions {
    SessionOptions {
        media_root: PathBuf::from("media"),
        root_label: "~/portfolio".to_string(),
        state_path,
        skin: Skin::Classic,
    }
}

fn session() -> Session {
    Session::with_probe(sample_catalog(), options(None), Box::new(StubProbe::default()))
}

#[test]
fn starts_on_first_section_with_left_focus() {
    let session = session();
    assert_eq!(
        session.nav(),
        NavigationState {
            focused_pane: Pane::Left,
            selected_section: Some(0),
            selected_entry: None,
        }
    );
    assert_eq!(session.left_stats().to_string(), "3 items - ~0 KB");
    assert_eq!(session.right_stats().to_string(), "1 items - 1.5 MB");
    assert_eq!(session.right_path(), "~/portfolio/games");
}

#[test]
fn empty_catalog_has_no_selection() {
    let session = Session::with_probe(
        Catalog::default(),
        options(None),
        Box::new(StubProbe::default()),
    );
    assert_eq!(session.nav().selected_section, None);
    assert_eq!(session.right_path(), "~/portfolio");
}

#[test]
fn select_section_clears_entry_for_every_valid_index() {
    let mut session = session();
    for index in 0..session.catalog().section_count() {
        session.select_section(1);
        session.select_entry(0);
        session.select_section(index);
        assert_eq!(session.nav().selected_section, Some(index));
        assert_eq!(session.nav().selected_entry, None);
        assert_eq!(session.right_pane(), &RightPane::Listing);
    }
}

#[test]
fn select_section_out_of_range_is_a_no_op() {
    let mut session = session();
    session.select_section(1);
    session.select_entry(2);
    let before = session.nav();
    session.select_section(3);
    session.select_section(usize::MAX);
    assert_eq!(session.nav(), before);
}

#[test]
fn select_entry_requires_valid_index() {
    let mut session = session();
    session.select_section(1);
    assert!(session.select_entry(3));
    assert!(!session.select_entry(4));
    assert_eq!(session.nav().selected_entry, Some(3));
    assert!(session.select_entry(1));
    assert_eq!(session.nav().selected_entry, Some(1));
}

#[test]
fn toggle_focus_alternates() {
    let mut session = session();
    let original = session.nav().focused_pane;
    for flips in 1..=5 {
        session.toggle_focus();
        let expected = if flips % 2 == 0 {
            original
        } else {
            original.toggled()
        };
        assert_eq!(session.nav().focused_pane, expected);
    }
    session.set_focus(Pane::Right);
    session.set_focus(Pane::Right);
    assert_eq!(session.nav().focused_pane, Pane::Right);
}

#[test]
fn move_selection_clamps_in_each_pane() {
    let mut session = session();
    session.move_selection(-1);
    assert_eq!(session.nav().selected_section, Some(0));
    session.move_selection(1);
    session.move_selection(5);
    assert_eq!(session.nav().selected_section, Some(2));

    session.select_section(1);
    session.set_focus(Pane::Right);
    session.move_selection(1);
    assert_eq!(session.nav().selected_entry, Some(0));
    session.move_selection(10);
    assert_eq!(session.nav().selected_entry, Some(3));
    session.move_selection(-1);
    assert_eq!(session.nav().selected_entry, Some(2));
}

#[test]
fn activation_needs_right_focus() {
    let mut session = session();
    session.select_entry(0);
    assert_eq!(session.activate_selected_entry(), None);
    assert!(session.modal().is_none());
}

#[test]
fn games_scenario_opens_and_wraps_carousel() {
    let mut session = session();
    session.select_section(0);
    session.set_focus(Pane::Right);
    assert!(session.select_entry(0));
    assert_eq!(session.activate_selected_entry(), None);

    let modal = session.modal().expect("carousel open");
    assert_eq!(modal.project_id(), "p1");
    assert_eq!(modal.current_index(), 0);
    assert!(matches!(
        modal.view(),
        MediaView::Ready { kind: MediaKind::Still, filename, .. } if filename == "s1.png"
    ));

    session.step_modal(Step::Next);
    assert!(matches!(
        session.modal().expect("open").view(),
        MediaView::Ready { kind: MediaKind::Motion, filename, .. } if filename == "s2.mp4"
    ));

    session.step_modal(Step::Next);
    assert_eq!(session.modal().expect("open").current_index(), 0);
}

#[test]
fn closing_modal_keeps_selection_and_reopen_resets_index() {
    let mut session = session();
    session.set_focus(Pane::Right);
    session.select_entry(0);
    session.activate_selected_entry();
    session.step_modal(Step::Next);

    let before = session.nav();
    session.close_modal(DismissReason::Background);
    assert!(session.modal().is_none());
    assert_eq!(session.nav(), before);

    session.step_modal(Step::Next);
    assert!(session.modal().is_none());

    session.activate_selected_entry();
    assert_eq!(session.modal().expect("reopened").current_index(), 0);
}

#[test]
fn opening_a_project_replaces_the_previous_modal() {
    let mut session = session();
    assert!(session.open_project("p1"));
    assert!(session.open_project("p2"));
    assert_eq!(session.modal().expect("open").project_id(), "p2");
}

#[test]
fn dangling_project_reference_is_a_no_op() {
    let mut session = session();
    session.select_section(1);
    session.set_focus(Pane::Right);
    session.select_entry(2);
    assert_eq!(session.activate_selected_entry(), None);
    assert!(session.modal().is_none());
}

#[test]
fn link_and_text_activation() {
    let mut session = session();
    session.select_section(1);
    session.set_focus(Pane::Right);
    session.select_entry(1);
    assert_eq!(
        session.activate_selected_entry(),
        Some(Effect::OpenUrl {
            label: "Blog".to_string(),
            url: "https://example.com/blog".to_string(),
        })
    );
    session.select_entry(0);
    assert_eq!(session.activate_selected_entry(), None);
    assert!(session.modal().is_none());
}

#[test]
fn click_section_focuses_right_and_click_entry_activates() {
    let mut session = session();
    session.click_section(1);
    assert_eq!(session.nav().focused_pane, Pane::Right);
    assert_eq!(session.nav().selected_section, Some(1));

    session.click_section(0);
    assert_eq!(session.click_entry(0), None);
    assert_eq!(session.nav().selected_entry, Some(0));
    assert!(session.modal().is_some());
}

#[test]
fn output_replaces_listing_until_relist() {
    let mut session = session();
    session.show_output(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(
        session.right_pane(),
        &RightPane::Output(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(session.right_stats().to_string(), "2 items - ~0 KB");

    session.relist();
    assert_eq!(session.right_pane(), &RightPane::Listing);
    assert_eq!(session.nav().selected_section, Some(0));
}

#[test]
fn skin_changes_are_persisted() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("state.toml");
    let mut session = Session::with_probe(
        sample_catalog(),
        options(Some(path.clone())),
        Box::new(StubProbe::default()),
    );

    session.apply_skin(Skin::Neon).expect("apply skin");
    assert_eq!(session.skin(), Skin::Neon);
    assert_eq!(load_state(&path).and_then(|s| s.skin), Some(Skin::Neon));

    let next = session.cycle_skin().expect("cycle");
    assert_eq!(next, Skin::Pastel);
    assert_eq!(load_state(&path).and_then(|s| s.skin), Some(Skin::Pastel));

    assert_eq!(session.cycle_skin().expect("cycle"), Skin::Classic);
}
