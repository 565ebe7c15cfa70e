//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn cloudctl_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("cloudctl")
}

/// Command with a clean environment and no credentials file
fn cloudctl(home: &std::path::Path) -> Command {
    let mut cmd = Command::new(cloudctl_bin());
    cmd.env_remove("CLOUD_API_TOKEN")
        .env_remove("CLOUD_TOKEN")
        .env_remove("CLOUD_API_HOST")
        .env_remove("CLOUD_API_URL")
        .env_remove("CLOUD_PROJECT_ID")
        .env_remove("CLOUD_REGION_ID")
        .env_remove("RUST_LOG")
        .env("HOME", home);
    cmd
}

/// Command pointed at a mock server with a token
fn cloudctl_against(server: &MockServer, home: &std::path::Path) -> Command {
    let mut cmd = cloudctl(home);
    cmd.env("CLOUD_API_URL", server.uri())
        .args(["--token", "test-token", "--batch"]);
    cmd
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    cloudctl(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Explore cloud projects"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    cloudctl(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudctl"));
}

/// Test invalid output format argument
#[test]
fn test_invalid_output_format() {
    let home = tempfile::tempdir().unwrap();
    cloudctl(home.path())
        .args(["get", "project", "-o", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

/// Scoped resources need a project and region
#[test]
fn test_volume_requires_scope() {
    let home = tempfile::tempdir().unwrap();
    cloudctl(home.path())
        .args(["get", "volume"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project"));
}

/// Without any token source the command fails with guidance
#[test]
fn test_missing_token() {
    let home = tempfile::tempdir().unwrap();
    cloudctl(home.path())
        .args(["get", "project", "--host", "api.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API token found for host 'api.example.com'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_volumes_walks_all_pages() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/volumes/1/76"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "results": [{"id": "v-1", "name": "data-1", "size": 20}],
            "links": [{"rel": "next", "href": "/volumes/1/76?limit=100&offset=1"}]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/volumes/1/76"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "results": [{"id": "v-2", "name": "boot", "size": 10, "bootable": true}]
        })))
        .mount(&server)
        .await;

    let output = cloudctl_against(&server, home.path())
        .args(["get", "volumes", "-p", "1", "-r", "76", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let volumes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(volumes[0]["id"], "v-1");
    assert_eq!(volumes[1]["id"], "v-2");
    assert_eq!(volumes[1]["bootable"], true);
}

/// A listing whose next link loops back fails instead of fetching forever
#[tokio::test(flavor = "multi_thread")]
async fn test_get_volumes_repeating_next_link_fails() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/volumes/1/76"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"id": "v-1", "name": "data-1", "size": 20}],
            "links": [{"rel": "next", "href": "/volumes/1/76?limit=100"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    cloudctl_against(&server, home.path())
        .args(["get", "volumes", "-p", "1", "-r", "76", "-o", "json"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("repeats already fetched page"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_volume_waits_and_prints_ids() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;
    let body = json!({"volumes": [{"source": "new-volume", "name": "data", "size": 20}]});

    let mut body_file = tempfile::NamedTempFile::new().unwrap();
    body_file.write_all(body.to_string().as_bytes()).unwrap();

    Mock::given(method("POST"))
        .and(path("/volumes/1/76"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": ["94b6fff4"]})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tasks/94b6fff4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "94b6fff4",
            "state": "FINISHED",
            "created_resources": {"volumes": ["726ecfcc-7fd0-4e30-a86e-7892524aa483"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    cloudctl_against(&server, home.path())
        .args(["create", "volume", "-p", "1", "-r", "76", "--body"])
        .arg(body_file.path())
        .assert()
        .success()
        .stdout("726ecfcc-7fd0-4e30-a86e-7892524aa483\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_wait_task_failure_exits_nonzero() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tasks/t-err"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "ERROR",
            "error": "quota exceeded"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cloudctl_against(&server, home.path())
        .args(["wait", "task", "t-err", "--interval", "1", "--timeout", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed with state 'ERROR'"))
        .stderr(predicate::str::contains("quota exceeded"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_stack_no_wait_prints_task_id() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/stacks/1/76/st-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": ["t-del"]})))
        .expect(1)
        .mount(&server)
        .await;

    cloudctl_against(&server, home.path())
        .args(["delete", "stack", "st-1", "-p", "1", "-r", "76", "--no-wait"])
        .assert()
        .success()
        .stdout("t-del\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_project_unknown_name() {
    let home = tempfile::tempdir().unwrap();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"id": 1, "name": "default"}]
        })))
        .mount(&server)
        .await;

    cloudctl_against(&server, home.path())
        .args(["get", "project", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project 'nope' not found"));
}
