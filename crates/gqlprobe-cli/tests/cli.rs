// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A gqlprobe command that ignores the user's real config.
fn gqlprobe(config_home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("gqlprobe");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env_remove("GQLPROBE_ENDPOINT__URL")
        .env_remove("GQLPROBE_ENDPOINT__TIMEOUT_SECONDS")
        .env_remove("RUST_LOG");
    cmd
}

/// An address nothing is listening on.
fn refused_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/graphql")
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gqlprobe"));
}

#[test]
fn test_help_contains_all_commands() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("ops"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_ops_list_json_output() {
    let home = TempDir::new().unwrap();
    let output = gqlprobe(home.path())
        .args(["ops", "list", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("ops list --output json should produce valid JSON");
    let ops = json.as_array().expect("ops list JSON output should be an array");
    assert!(ops.iter().any(|op| op["name"] == "create-user"));
}

#[test]
fn test_ops_show() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .args(["ops", "show", "create-user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mutation CreateUser"))
        .stdout(predicate::str::contains("role: string = user"));
}

#[test]
fn test_ops_show_unknown() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .args(["ops", "show", "no-such-op"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation"))
        .stderr(predicate::str::contains("gqlprobe ops list"));
}

#[test]
fn test_completion_bash() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gqlprobe"));
}

#[test]
fn test_query_refused_prints_error_object() {
    let home = TempDir::new().unwrap();
    let output = gqlprobe(home.path())
        .args(["query", "query { users { id } }", "-o", "json"])
        .args(["--endpoint", &refused_endpoint()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let printed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(printed["error"].is_string(), "unexpected output: {stdout}");
}

#[test]
fn test_query_rejects_blank_document() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .args(["query", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_run_missing_argument() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .args(["run", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required argument: id"));
}

#[test]
fn test_run_destructive_requires_yes_without_tty() {
    let home = TempDir::new().unwrap();
    gqlprobe(home.path())
        .args(["run", "delete-user", "-a", "id=1"])
        .args(["--endpoint", &refused_endpoint()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_invalid_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("gqlprobe");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[batch]\nconcurrency = 0\n").unwrap();

    gqlprobe(home.path())
        .args(["ops", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("batch.concurrency"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_query_prints_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_json(json!({
            "query": "query GetUser($id: Int!) { user(id: $id) { id } }",
            "variables": {"id": 5}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": {"id": 5}}})))
        .expect(1)
        .mount(&server)
        .await;
    let endpoint = format!("{}/graphql", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        let home = TempDir::new().unwrap();
        gqlprobe(home.path())
            .args(["query", "query GetUser($id: Int!) { user(id: $id) { id } }"])
            .args(["--var", "id=5", "-o", "json", "--endpoint", &endpoint])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), r#"{"data":{"user":{"id":5}}}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_run_prints_graphql_errors_and_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": null, "errors": [{"message": "User not found"}]})),
        )
        .mount(&server)
        .await;
    let endpoint = format!("{}/graphql", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        let home = TempDir::new().unwrap();
        gqlprobe(home.path())
            .args(["run", "user", "-a", "id=999", "--endpoint", &endpoint])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("User not found"));
    assert!(stdout.contains("  \"errors\""), "expected indented JSON: {stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_batch_prints_every_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(3)
        .mount(&server)
        .await;
    let endpoint = format!("{}/graphql", server.uri());

    let output = tokio::task::spawn_blocking(move || {
        let home = TempDir::new().unwrap();
        let file = home.path().join("batch.json");
        std::fs::write(
            &file,
            r#"[{"query": "query { a }"}, {"query": "query { b }"}, {"query": "query { c }"}]"#,
        )
        .unwrap();
        gqlprobe(home.path())
            .args(["batch", file.to_str().unwrap(), "-c", "2", "-o", "json"])
            .args(["--endpoint", &endpoint])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    for line in stdout.lines() {
        assert_eq!(line, r#"{"data":{"ok":true}}"#);
    }
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("3 request(s) completed"));
}
