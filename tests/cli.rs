//! End-to-end tests through the ledgerkeep binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledgerkeep(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledgerkeep").unwrap();
    cmd.env(
        "LEDGERKEEP_STORE",
        store.path().join("ledger.json").display().to_string(),
    );
    cmd
}

#[test]
fn test_add_then_list_round_trip() {
    let store = TempDir::new().unwrap();

    ledgerkeep(&store)
        .args(["user.add", r#"{"name": "Ada"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\""))
        .stdout(predicate::str::contains("Ada"));

    ledgerkeep(&store)
        .arg("user.list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("createdAt"));
}

#[test]
fn test_unknown_operation_fails_with_envelope() {
    let store = TempDir::new().unwrap();

    ledgerkeep(&store)
        .arg("user.archive")
        .assert()
        .failure()
        .stdout(predicate::str::contains("UnknownOperationError"));
}

#[test]
fn test_validation_error_exits_nonzero() {
    let store = TempDir::new().unwrap();

    ledgerkeep(&store)
        .args(["user.add", r#"{"name": ""}"#])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ValidationError"));
}

#[test]
fn test_malformed_input_json_is_rejected() {
    let store = TempDir::new().unwrap();

    ledgerkeep(&store)
        .args(["user.add", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input is not valid JSON"));
}

#[test]
fn test_balance_flow() {
    let store = TempDir::new().unwrap();

    let output = ledgerkeep(&store)
        .args(["user.add", r#"{"name": "Ada"}"#])
        .output()
        .unwrap();
    let user: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let user_id = user["result"]["id"].as_str().unwrap().to_owned();

    let output = ledgerkeep(&store)
        .args([
            "category.add",
            &format!(r#"{{"userId": "{user_id}", "name": "Groceries"}}"#),
        ])
        .output()
        .unwrap();
    let category: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let category_id = category["result"]["id"].as_str().unwrap().to_owned();

    for (kind, amount) in [("income", "100"), ("expense", "30"), ("income", "5")] {
        ledgerkeep(&store)
            .args([
                "entry.add",
                &format!(
                    r#"{{"userId": "{user_id}", "categoryId": "{category_id}", "kind": "{kind}", "amount": {amount}}}"#
                ),
            ])
            .assert()
            .success();
    }

    ledgerkeep(&store)
        .args([
            "balance.category.total",
            &format!(r#"{{"userId": "{user_id}", "categoryId": "{category_id}"}}"#),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"balance\": 75"))
        .stdout(predicate::str::contains("\"count\": 3"));
}
