use super::{load_config_from, local_config_path};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create config dir");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn load_config_uses_defaults_when_empty() {
    let data = TempDir::new().expect("temp data");
    let config = load_config_from(None, &local_config_path(data.path()));

    assert_eq!(config.keymap.toggle_focus, "tab");
    assert_eq!(config.keymap.cycle_skin, "f9");
    assert_eq!(config.keymap.activate, "enter");
    assert_eq!(config.keymap.command, ":");
    assert_eq!(config.keymap.exit, "ctrl+c");
    assert_eq!(config.browser.root_label, "/home/.../portfolio");
    assert!(config.browser.media_dir.is_none());
    assert_eq!(config.log.level, "info");
}

#[test]
fn load_config_merges_user_and_local() {
    let home = TempDir::new().expect("temp home");
    let user_path = home.path().join("folio").join("config.toml");
    write_config(
        &user_path,
        r#"
[keymap]
toggle_focus = "ctrl+t"
cycle_skin = "f2"

[browser]
root_label = "~/work"
media_dir = "/srv/media"

[log]
level = "debug"
"#,
    );

    let data = TempDir::new().expect("temp data");
    let local_path = local_config_path(data.path());
    write_config(
        &local_path,
        r#"
[keymap]
toggleFocus = "ctrl+w"

[browser]
media_dir = "assets"
"#,
    );

    let config = load_config_from(Some(&user_path), &local_path);

    assert_eq!(config.keymap.toggle_focus, "ctrl+w");
    assert_eq!(config.keymap.cycle_skin, "f2");
    assert_eq!(config.keymap.activate, "enter");
    assert_eq!(config.browser.root_label, "~/work");
    assert_eq!(config.browser.media_dir.as_deref(), Some(Path::new("assets")));
    assert_eq!(config.log.level, "debug");
}

#[test]
fn invalid_or_blank_values_fall_back() {
    let data = TempDir::new().expect("temp data");
    let local_path = local_config_path(data.path());
    write_config(&local_path, "[keymap]\nexit = \"  \"\n");
    let config = load_config_from(None, &local_path);
    assert_eq!(config.keymap.exit, "ctrl+c");

    write_config(&local_path, "[keymap\nexit = ");
    let config = load_config_from(None, &local_path);
    assert_eq!(config.keymap.exit, "ctrl+c");
}
