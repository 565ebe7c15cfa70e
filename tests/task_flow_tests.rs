//! End-to-end tests of the library API against a mock service

use futures::TryStreamExt;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cloudctl::{
    extract_into, CloudClient, CloudError, EmptyPagePolicy, Pager, ResourceKind, TaskTracker,
    TaskWaitOptions, TimeoutPolicy,
};

fn fast_options() -> TaskWaitOptions {
    TaskWaitOptions::default()
        .with_poll_interval(Duration::from_millis(10))
        .with_timeout(Duration::from_millis(50))
}

#[derive(Deserialize, Debug)]
struct VolumeIds {
    volumes: Vec<String>,
}

#[tokio::test]
async fn test_create_then_wait_returns_created_ids() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/volumes/1/76"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": ["94b6fff4"]})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tasks/94b6fff4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "RUNNING"})))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tasks/94b6fff4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "FINISHED",
            "created_resources": {"volumes": ["726ecfcc-7fd0-4e30-a86e-7892524aa483"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = json!({"volumes": [{"source": "new-volume", "size": 20}]});
    let url = format!("{}/volumes/1/76", server.uri());
    let created = client
        .submit_and_wait(
            Method::POST,
            &url,
            Some(&body),
            "volume creation",
            fast_options(),
            None,
        )
        .await
        .unwrap()
        .unwrap();

    let ids: VolumeIds = created.decode().unwrap();
    assert_eq!(ids.volumes, vec!["726ecfcc-7fd0-4e30-a86e-7892524aa483"]);
    assert_eq!(created.ids(ResourceKind::Volumes), ids.volumes);
}

#[tokio::test]
async fn test_lenient_timeout_polls_budget_then_returns_empty() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/tasks/slow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "NEW"})))
        .expect(5)
        .mount(&server)
        .await;

    let tracker = TaskTracker::new(&client, fast_options());
    assert_eq!(tracker.await_task("slow").await.unwrap(), None);
}

#[tokio::test]
async fn test_strict_timeout_is_an_error() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/tasks/slow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "RUNNING"})))
        .mount(&server)
        .await;

    let options = fast_options().with_timeout_policy(TimeoutPolicy::Fail);
    let result = TaskTracker::new(&client, options).await_task("slow").await;
    assert!(matches!(result, Err(CloudError::TaskTimeout { attempts: 5, .. })));
}

#[tokio::test]
async fn test_track_several_tasks_concurrently() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/tasks/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "FINISHED",
            "created_resources": {"stacks": ["st-1"]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tasks/bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "ERROR"})))
        .mount(&server)
        .await;

    let tracker = TaskTracker::new(&client, fast_options());
    let results = tracker
        .await_tasks(&["ok".to_string(), "bad".to_string()])
        .await;

    assert_eq!(results.len(), 2);
    let created = results[0].as_ref().unwrap().as_ref().unwrap();
    assert_eq!(created.ids(ResourceKind::Stacks), vec!["st-1"]);
    assert!(matches!(
        &results[1],
        Err(CloudError::TaskFailed { state, .. }) if state == "ERROR"
    ));
}

#[tokio::test]
async fn test_cancelled_wait_stops_polling() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/tasks/slow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "RUNNING"})))
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    token.cancel();

    let result = TaskTracker::new(&client, fast_options())
        .with_cancellation(token)
        .await_task("slow")
        .await;
    assert!(matches!(result, Err(CloudError::Cancelled(_))));
}

#[derive(Deserialize, Debug)]
struct Record {
    id: u64,
}

/// Pages with 2, 0 and 1 records, linked by relative next links
async fn mount_two_zero_one(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "results": [{"id": 1}, {"id": 2}],
            "links": [{"rel": "next", "href": "/records?page=2"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "results": [],
            "links": [{"rel": "next", "href": "/records?page=3"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/records"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "results": [{"id": 3}],
            "links": []
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_pager_stream_two_zero_one() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();
    mount_two_zero_one(&server).await;

    let first = format!("{}/records?page=1", server.uri());
    let pages: Vec<_> = Pager::<Record>::new(&client, first)
        .into_stream()
        .try_collect()
        .await
        .unwrap();

    let sizes: Vec<usize> = pages.iter().map(|p| p.records.len()).collect();
    assert_eq!(sizes, vec![2, 0, 1]);

    let ids: Vec<u64> = pages
        .into_iter()
        .flat_map(|p| p.records)
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_pager_stop_on_empty_page() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();
    mount_two_zero_one(&server).await;

    let first = format!("{}/records?page=1", server.uri());
    let records = Pager::<Record>::new(&client, first)
        .with_empty_page_policy(EmptyPagePolicy::Stop)
        .all_pages()
        .await
        .unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_extract_into_on_fetched_body() {
    let server = MockServer::start().await;
    let client = CloudClient::with_base_url("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "results": [{"id": 9}]
        })))
        .mount(&server)
        .await;

    let body: serde_json::Value = client
        .fetch_json(&format!("{}/records", server.uri()), "records")
        .await
        .unwrap();
    let records: Vec<Record> = extract_into(&body, "results").unwrap();
    assert_eq!(records[0].id, 9);
}
