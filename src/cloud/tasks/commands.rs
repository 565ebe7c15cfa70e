//! Task command handlers

use log::{info, warn};
use tokio::signal;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::cli::{Cli, GetTaskArgs, OutputFormat, WaitTaskArgs};
use crate::cloud::CloudClient;
use crate::error::{CloudError, Result};
use crate::output::{created_resource_rows, output_record, output_records, output_structured};
use crate::ui::{
    create_spinner, finish_spinner, finish_spinner_and_clear, task_progress, update_spinner,
};

use super::models::{CreatedResources, ResourceKind, TaskIdList};
use super::tracker::{TaskTracker, TaskWaitOptions, TimeoutPolicy};

/// How a command-level wait ended
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WaitOutcome {
    /// Task finished; the payload is absent when it created nothing
    Finished(Option<CreatedResources>),
    /// Budget ran out under the lenient timeout policy
    StillRunning,
}

/// Run the 'get task' command
pub async fn run_task_get_command(
    client: &CloudClient,
    cli: &Cli,
    args: &GetTaskArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Fetching task '{}'...", args.id), cli.batch);
    let result = client.get_task(&args.id).await;
    finish_spinner_and_clear(spinner);

    let mut task = result?;
    if task.id.is_empty() {
        task.id = args.id.clone();
    }

    output_record(&task, args.output, cli.no_header)?;
    Ok(())
}

/// Run the 'wait task' command
pub async fn run_task_wait_command(
    client: &CloudClient,
    cli: &Cli,
    args: &WaitTaskArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = args.wait.to_options();

    match wait_for_task(client, &args.id, options, cli.batch).await? {
        WaitOutcome::Finished(created) => output_created(
            &args.id,
            created.as_ref(),
            args.kind.map(ResourceKind::from),
            args.output,
            cli.no_header,
        )?,
        WaitOutcome::StillRunning => report_still_running(&args.id, &options),
    }
    Ok(())
}

/// Wait for the first task of a mutating call, or just report it
///
/// Shared by the create and delete handlers.
pub(crate) async fn wait_or_report(
    client: &CloudClient,
    cli: &Cli,
    tasks: &TaskIdList,
    context: &str,
    no_wait: bool,
    options: TaskWaitOptions,
) -> Result<Option<(String, WaitOutcome)>> {
    let task_id = tasks.first(context)?.to_string();

    if tasks.len() > 1 {
        warn!(
            "{} started {} tasks, tracking only '{}'",
            context,
            tasks.len(),
            task_id
        );
    }

    if no_wait {
        println!("{}", task_id);
        return Ok(None);
    }

    let outcome = wait_for_task(client, &task_id, options, cli.batch).await?;
    if outcome == WaitOutcome::StillRunning {
        report_still_running(&task_id, &options);
    }
    Ok(Some((task_id, outcome)))
}

/// Track one task with a spinner; Ctrl-C cancels the wait
///
/// The tracker runs with the strict policy. Under the lenient policy a
/// deadline hit becomes [`WaitOutcome::StillRunning`] instead of an error.
pub(crate) async fn wait_for_task(
    client: &CloudClient,
    task_id: &str,
    options: TaskWaitOptions,
    batch: bool,
) -> Result<WaitOutcome> {
    let lenient = options.on_timeout == TimeoutPolicy::ReturnEmpty;
    let cancel = CancellationToken::new();
    let listener = cancel_on_ctrl_c(cancel.clone());

    let spinner = create_spinner(&format!("Waiting for task '{}'...", task_id), batch);
    let progress_spinner = spinner.clone();

    let tracker = TaskTracker::new(client, options.with_timeout_policy(TimeoutPolicy::Fail))
        .with_cancellation(cancel)
        .on_progress(move |progress| {
            update_spinner(
                &progress_spinner,
                task_progress(
                    progress.task_id,
                    progress.state.as_str(),
                    progress.attempt,
                    progress.max_attempts,
                ),
            );
        });

    let result = tracker.await_task(task_id).await;
    listener.abort();

    match result {
        Ok(created) => {
            finish_spinner(spinner, &format!("Task '{}' finished", task_id));
            Ok(WaitOutcome::Finished(created))
        }
        Err(CloudError::TaskTimeout { attempts, .. }) if lenient => {
            finish_spinner(spinner, &format!("Task '{}' still running", task_id));
            warn!(
                "Task '{}' still in progress after {} polls; giving up without result",
                task_id, attempts
            );
            Ok(WaitOutcome::StillRunning)
        }
        Err(e) => {
            finish_spinner_and_clear(spinner);
            Err(e)
        }
    }
}

/// Tell the user the wait ended before the task did
fn report_still_running(task_id: &str, options: &TaskWaitOptions) {
    eprintln!(
        "Task '{}' still running after {}s; check later with: cloudctl get task {}",
        task_id,
        options.timeout.as_secs(),
        task_id
    );
}

/// Cancel `token` on the first Ctrl-C
fn cancel_on_ctrl_c(token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling wait");
            token.cancel();
        }
    })
}

/// Print what a finished task created
pub(crate) fn output_created(
    task_id: &str,
    created: Option<&CreatedResources>,
    kind: Option<ResourceKind>,
    format: OutputFormat,
    no_header: bool,
) -> Result<()> {
    let Some(created) = created else {
        eprintln!("Task '{}' finished without reporting created resources", task_id);
        return Ok(());
    };

    info!("Task '{}' created: {:?}", task_id, created.keys());

    let rows = created_resource_rows(created, kind);
    if format.is_structured() && kind.is_none() {
        return output_structured(created.as_value(), format);
    }
    output_records(&rows, format, no_header, "resources")
}

/// Print created IDs of one kind, one per line
pub(crate) fn print_created_ids(task_id: &str, outcome: &WaitOutcome, kind: ResourceKind) {
    match outcome {
        WaitOutcome::Finished(Some(created)) => {
            for id in created.ids(kind) {
                println!("{}", id);
            }
        }
        WaitOutcome::Finished(None) => {
            eprintln!("Task '{}' finished without reporting created {}", task_id, kind.key())
        }
        WaitOutcome::StillRunning => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::TimeoutPolicy;
    use crate::error::CloudError;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_options() -> TaskWaitOptions {
        TaskWaitOptions::default()
            .with_poll_interval(Duration::from_millis(10))
            .with_timeout(Duration::from_millis(30))
    }

    #[tokio::test]
    async fn test_wait_for_task_finished() {
        let mock_server = MockServer::start().await;
        let client = CloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/tasks/94b6fff4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "state": "FINISHED",
                "created_resources": {"volumes": ["v-1"]}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = wait_for_task(&client, "94b6fff4", fast_options(), true)
            .await
            .unwrap();
        match outcome {
            WaitOutcome::Finished(Some(created)) => {
                assert_eq!(created.ids(ResourceKind::Volumes), vec!["v-1"])
            }
            other => panic!("Expected finished task, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wait_for_task_strict_timeout() {
        let mock_server = MockServer::start().await;
        let client = CloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/tasks/t-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "RUNNING"})))
            .expect(3)
            .mount(&mock_server)
            .await;

        let options = fast_options().with_timeout_policy(TimeoutPolicy::Fail);
        let result = wait_for_task(&client, "t-1", options, true).await;
        assert!(matches!(result, Err(CloudError::TaskTimeout { attempts: 3, .. })));
    }

    #[tokio::test]
    async fn test_wait_for_task_lenient_timeout_is_still_running() {
        let mock_server = MockServer::start().await;
        let client = CloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/tasks/t-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "NEW"})))
            .expect(3)
            .mount(&mock_server)
            .await;

        let outcome = wait_for_task(&client, "t-1", fast_options(), true)
            .await
            .unwrap();
        assert_eq!(outcome, WaitOutcome::StillRunning);
    }

    #[tokio::test]
    async fn test_wait_for_task_finished_without_payload() {
        let mock_server = MockServer::start().await;
        let client = CloudClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/tasks/t-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "FINISHED"})))
            .mount(&mock_server)
            .await;

        let outcome = wait_for_task(&client, "t-2", fast_options(), true)
            .await
            .unwrap();
        assert_eq!(outcome, WaitOutcome::Finished(None));
    }

    #[test]
    fn test_output_created_without_payload_is_not_an_error() {
        output_created("t-1", None, None, OutputFormat::Table, false).unwrap();
    }

    #[test]
    fn test_output_created_structured() {
        let created = CreatedResources::new(json!({"volumes": ["v-1"]}));
        output_created("t-1", Some(&created), None, OutputFormat::Json, false).unwrap();
        output_created(
            "t-1",
            Some(&created),
            Some(ResourceKind::Volumes),
            OutputFormat::Yaml,
            false,
        )
        .unwrap();
    }
}
