//! Volume command handlers

use log::debug;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

use crate::cli::{Cli, CreateVolumeArgs, DeleteVolumeArgs, VolumeArgs};
use crate::cloud::helpers::{collect_pages, find_by_id_or_name};
use crate::cloud::tasks::{print_created_ids, wait_or_report, ResourceKind, WaitOutcome};
use crate::cloud::traits::apply_name_filter;
use crate::cloud::CloudClient;
use crate::error::{CloudError, Result};
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_and_clear};

/// Run the 'get volume' command
pub async fn run_volume_command(
    client: &CloudClient,
    cli: &Cli,
    args: &VolumeArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (project, region) = (args.scope.project, args.scope.region);

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching volume '{}'...", id), cli.batch);
        let direct = Some(client.get_volume(project, region, id));
        let result = find_by_id_or_name(id, direct, client.get_volumes(project, region)).await;
        finish_spinner_and_clear(spinner);

        return match result? {
            Some(volume) => {
                output_record(&volume, args.output, cli.no_header)?;
                Ok(())
            }
            None => Err(format!(
                "Volume '{}' not found in project {} region {}",
                id, project, region
            )
            .into()),
        };
    }

    let spinner = create_spinner(
        &format!("Fetching volumes in project {} region {}...", project, region),
        cli.batch,
    );
    let mut volumes = match collect_pages(client.volumes_pager(project, region), &spinner).await {
        Ok(volumes) => volumes,
        Err(e) => {
            finish_spinner_and_clear(spinner);
            return Err(e.into());
        }
    };
    finish_spinner(spinner, "Done");

    apply_name_filter(&mut volumes, args.filter.as_deref());
    output_records(&volumes, args.output, cli.no_header, "volumes")?;
    Ok(())
}

/// Run the 'create volume' command
pub async fn run_create_volume_command(
    client: &CloudClient,
    cli: &Cli,
    args: &CreateVolumeArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let body = read_request_body(&args.body)?;
    let (project, region) = (args.scope.project, args.scope.region);

    let tasks = client.create_volume(project, region, &body).await?;
    let outcome = wait_or_report(
        client,
        cli,
        &tasks,
        "volume creation",
        args.no_wait,
        args.wait.to_options(),
    )
    .await?;

    if let Some((task_id, waited)) = outcome {
        print_created_ids(&task_id, &waited, ResourceKind::Volumes);
    }
    Ok(())
}

/// Run the 'delete volume' command
pub async fn run_delete_volume_command(
    client: &CloudClient,
    cli: &Cli,
    args: &DeleteVolumeArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (project, region) = (args.scope.project, args.scope.region);
    let context = format!("deletion of volume '{}'", args.id);

    let tasks = client.delete_volume(project, region, &args.id).await?;
    let outcome = wait_or_report(
        client,
        cli,
        &tasks,
        &context,
        args.no_wait,
        args.wait.to_options(),
    )
    .await?;

    match outcome {
        Some((_, WaitOutcome::Finished(_))) => println!("Volume '{}' deleted", args.id),
        Some((_, WaitOutcome::StillRunning)) | None => {}
    }
    Ok(())
}

/// Load a JSON request body from a file, or stdin for `-`
fn read_request_body(path: &Path) -> Result<Value> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CloudError::InvalidInput(format!("Cannot read request body: {}", e)))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            CloudError::InvalidInput(format!(
                "Cannot read request body {}: {}",
                path.display(),
                e
            ))
        })?
    };

    debug!("Read {} byte request body from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|e| {
        CloudError::InvalidInput(format!(
            "Request body {} is not valid JSON: {}",
            path.display(),
            e
        ))
    })
}
