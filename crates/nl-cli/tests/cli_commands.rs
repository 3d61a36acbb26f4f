//! Integration tests driving the `neurolink` binary through the CLI.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn neurolink(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("neurolink").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn boots_to_the_title_then_describes_the_street() {
    let dir = TempDir::new().unwrap();
    neurolink(&dir)
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NEUROLINK-7800 PERSONAL COMPUTING SYSTEM")
                .and(predicate::str::contains("INITIATING ADVENTURE SEQUENCE"))
                .and(predicate::str::contains("Outside the Shopfront"))
                .and(predicate::str::contains("You consider leaving")),
        );
}

#[test]
fn help_on_the_title_screen_does_not_start_the_game() {
    let dir = TempDir::new().unwrap();
    neurolink(&dir)
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("COMMANDS:")
                .and(predicate::str::contains("INITIATING ADVENTURE SEQUENCE").not()),
        );
}

#[test]
fn autosave_file_is_written_next_to_the_player() {
    let dir = TempDir::new().unwrap();
    neurolink(&dir).write_stdin("look\nquit\n").assert().success();
    assert!(dir.path().join("neurolink-save.json").exists());
}

#[test]
fn custom_save_path_and_fixed_seed() {
    let dir = TempDir::new().unwrap();
    neurolink(&dir)
        .args(["--save", "custom.json", "--seed", "7"])
        .write_stdin("take quarter\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You pick up the tarnished quarter."));
    assert!(dir.path().join("custom.json").exists());
    assert!(!dir.path().join("neurolink-save.json").exists());
}

#[test]
fn gibberish_never_crashes_the_session() {
    let dir = TempDir::new().unwrap();
    neurolink(&dir)
        .write_stdin("look\nfrobnicate the widget\n\n   \nquit\n")
        .assert()
        .success();
}

#[test]
fn eof_ends_the_session_cleanly() {
    let dir = TempDir::new().unwrap();
    neurolink(&dir).write_stdin("look\n").assert().success();
}

#[test]
fn a_second_run_can_load_the_first_runs_progress() {
    let dir = TempDir::new().unwrap();
    neurolink(&dir)
        .write_stdin("take quarter\nnorth\nquit\n")
        .assert()
        .success();

    neurolink(&dir)
        .write_stdin("load\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Game loaded.")
                .and(predicate::str::contains("Train Station"))
                .and(predicate::str::contains("You are carrying: tarnished quarter.")),
        );
}
