//! Integration tests for the `caverns` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn caverns() -> Command {
    Command::cargo_bin("caverns").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_opens_with_the_start_room() {
    caverns()
        .arg("play")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("entrance to a dark cave")
                .and(predicate::str::contains("a useful looking compass"))
                .and(predicate::str::contains("Thanks for playing.")),
        );
}

#[test]
fn play_processes_commands_in_order() {
    caverns()
        .arg("play")
        .write_stdin("take compass\nlist\nnorth\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Taken.")
                .and(predicate::str::contains("You are carrying:"))
                .and(predicate::str::contains("twisting tunnel"))
                .and(predicate::str::contains("4 moves played")),
        );
}

#[test]
fn play_stops_after_death() {
    caverns()
        .arg("play")
        .write_stdin("north\nnorth\nwest\nnorth\nnorth\nlook\nlook\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("smash yourself to a pulp")
                .and(predicate::str::contains("5 moves played")),
        );
}

#[test]
fn play_ends_at_eof() {
    caverns()
        .arg("play")
        .write_stdin("north\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1 move played")
                .and(predicate::str::contains("1 moves played").not()),
        );
}

#[test]
fn play_reports_unknown_commands() {
    caverns()
        .arg("play")
        .write_stdin("xyzzy\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("not implemented"));
}

#[test]
fn play_accepts_a_seed() {
    caverns()
        .args(["play", "--seed", "7", "--carry-limit", "0"])
        .write_stdin("take compass\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("carrying too many objects"));
}

// ---------------------------------------------------------------------------
// map
// ---------------------------------------------------------------------------

#[test]
fn map_prints_the_exit_table() {
    caverns()
        .arg("map")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<bridge-rope>")
                .and(predicate::str::contains("<drawbridge>"))
                .and(predicate::str::contains("treasure vault"))
                .and(predicate::str::contains("54 rooms")),
        );
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_subcommand_fails() {
    caverns().arg("fly").assert().failure();
}
