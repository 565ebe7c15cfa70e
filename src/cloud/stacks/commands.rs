//! Stack command handlers

use crate::cli::{Cli, DeleteStackArgs, StackArgs};
use crate::cloud::helpers::{collect_pages, find_by_id_or_name};
use crate::cloud::tasks::{wait_or_report, WaitOutcome};
use crate::cloud::traits::apply_name_filter;
use crate::cloud::CloudClient;
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_and_clear};

/// Run the 'get stack' command
pub async fn run_stack_command(
    client: &CloudClient,
    cli: &Cli,
    args: &StackArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (project, region) = (args.scope.project, args.scope.region);

    if let Some(id) = &args.id {
        let spinner = create_spinner(&format!("Fetching stack '{}'...", id), cli.batch);
        let direct = Some(client.get_stack(project, region, id));
        let result = find_by_id_or_name(id, direct, client.get_stacks(project, region)).await;
        finish_spinner_and_clear(spinner);

        return match result? {
            Some(stack) => {
                output_record(&stack, args.output, cli.no_header)?;
                Ok(())
            }
            None => Err(format!(
                "Stack '{}' not found in project {} region {}",
                id, project, region
            )
            .into()),
        };
    }

    let spinner = create_spinner(
        &format!("Fetching stacks in project {} region {}...", project, region),
        cli.batch,
    );
    let mut stacks = match collect_pages(client.stacks_pager(project, region), &spinner).await {
        Ok(stacks) => stacks,
        Err(e) => {
            finish_spinner_and_clear(spinner);
            return Err(e.into());
        }
    };
    finish_spinner(spinner, "Done");

    apply_name_filter(&mut stacks, args.filter.as_deref());
    output_records(&stacks, args.output, cli.no_header, "stacks")?;
    Ok(())
}

/// Run the 'delete stack' command
pub async fn run_delete_stack_command(
    client: &CloudClient,
    cli: &Cli,
    args: &DeleteStackArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (project, region) = (args.scope.project, args.scope.region);
    let context = format!("deletion of stack '{}'", args.id);

    let tasks = client.delete_stack(project, region, &args.id).await?;
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
        Some((_, WaitOutcome::Finished(_))) => println!("Stack '{}' deleted", args.id),
        Some((_, WaitOutcome::StillRunning)) | None => {}
    }
    Ok(())
}
