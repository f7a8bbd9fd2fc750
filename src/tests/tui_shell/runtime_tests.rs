use std::fs;

use tempfile::tempdir;

use super::*;
use crate::tui::TuiRunOptions;

#[test]
fn unreadable_config_fails_before_touching_the_terminal() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, b"{not json").expect("write config");

    let err = run(TuiRunOptions {
        config_path: path,
        ..Default::default()
    })
    .expect_err("broken config");
    let msg = format!("{err:#}");
    assert!(msg.contains("parse"), "unexpected error: {msg}");
    assert!(!msg.contains("TTY"), "unexpected error: {msg}");
}
