//! End-to-end tests driving the binary in script mode over stdin.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn tally(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tallybook_cli").expect("binary builds");
    cmd.env("TALLYBOOK_CLI_SCRIPT", "1")
        .env("TALLYBOOK_HOME", home);
    cmd
}

#[test]
fn add_and_totals_reports_the_balance() {
    let home = tempdir().expect("tempdir");

    tally(home.path())
        .write_stdin(
            "add 2024-01-01 Salary 1000 income Job\n\
             add 2024-01-02 Groceries 150 expense Food\n\
             totals\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:  1000.00 USD"))
        .stdout(predicate::str::contains("Expense: 150.00 USD"))
        .stdout(predicate::str::contains("Balance: 850.00 USD"));
}

#[test]
fn ledger_persists_between_runs() {
    let home = tempdir().expect("tempdir");

    tally(home.path())
        .write_stdin("add 2024-01-02 Groceries 150 expense Food\n")
        .assert()
        .success();

    tally(home.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));

    let snapshot = home.path().join("data").join("transactions.json");
    assert!(snapshot.exists());
}

#[test]
fn rejected_add_reports_and_keeps_the_shell_running() {
    let home = tempdir().expect("tempdir");

    tally(home.path())
        .write_stdin(
            "add 2024-01-01 Nothing 0 expense Food\n\
             totals\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("amount must be a positive number"))
        .stdout(predicate::str::contains("Balance: 0.00 USD"));
}

#[test]
fn chart_shows_the_expense_breakdown() {
    let home = tempdir().expect("tempdir");

    tally(home.path())
        .write_stdin(
            "add 2024-02-01 Lunch 50 expense Food\n\
             add 2024-02-02 Dinner 70 expense Food\n\
             add 2024-02-03 Rent 500 expense Rent\n\
             chart\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("120.00 USD"))
        .stdout(predicate::str::contains("500.00 USD"));
}

#[test]
fn filter_restricts_the_listing() {
    let home = tempdir().expect("tempdir");

    tally(home.path())
        .write_stdin(
            "add 2024-01-01 Salary 1000 income Job\n\
             add 2024-01-02 Groceries 150 expense Food\n\
             filter Food\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn import_of_invalid_payload_changes_nothing() {
    let home = tempdir().expect("tempdir");
    let bad = home.path().join("bad.json");
    fs::write(&bad, "not json").expect("write payload");

    tally(home.path())
        .write_stdin(format!(
            "add 2024-01-01 Salary 1000 income Job\n\
             import {}\n\
             totals\n",
            bad.display()
        ))
        .assert()
        .success()
        .stderr(predicate::str::contains("not valid JSON"))
        .stdout(predicate::str::contains("Balance: 1000.00 USD"));
}

#[test]
fn export_then_import_round_trips_across_homes() {
    let first = tempdir().expect("tempdir");
    let second = tempdir().expect("tempdir");
    let snapshot = first.path().join("out.json");

    tally(first.path())
        .write_stdin(format!(
            "add 2024-01-01 Salary 1000 income Job\n\
             add 2024-01-02 Groceries 150 expense Food\n\
             export {}\n",
            snapshot.display()
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 transactions"));

    tally(second.path())
        .write_stdin(format!("import {}\ntotals\n", snapshot.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transactions"))
        .stdout(predicate::str::contains("Balance: 850.00 USD"));
}

#[test]
fn remove_of_unknown_id_is_reported_but_not_an_error() {
    let home = tempdir().expect("tempdir");

    tally(home.path())
        .write_stdin("remove 42\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transaction with id 42"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = tempdir().expect("tempdir");

    tally(home.path())
        .write_stdin("tots\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Did you mean `totals`?"));
}
