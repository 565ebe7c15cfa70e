//! Project command handlers

use crate::cli::{Cli, ProjectArgs};
use crate::cloud::helpers::{collect_pages, find_by_id_or_name};
use crate::cloud::traits::apply_name_filter;
use crate::cloud::CloudClient;
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_and_clear};

/// Run the 'get project' command
pub async fn run_project_command(
    client: &CloudClient,
    cli: &Cli,
    args: &ProjectArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = &args.name {
        return get_single_project(client, cli, args, name).await;
    }

    let spinner = create_spinner("Fetching projects...", cli.batch);
    let mut projects = match collect_pages(client.projects_pager(), &spinner).await {
        Ok(projects) => projects,
        Err(e) => {
            finish_spinner_and_clear(spinner);
            return Err(e.into());
        }
    };
    finish_spinner(spinner, "Done");

    apply_name_filter(&mut projects, args.filter.as_deref());
    output_records(&projects, args.output, cli.no_header, "projects")?;
    Ok(())
}

/// Get a single project by ID or name
async fn get_single_project(
    client: &CloudClient,
    cli: &Cli,
    args: &ProjectArgs,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(&format!("Fetching project '{}'...", name), cli.batch);

    let direct = name.parse::<u64>().ok().map(|id| client.get_project(id));
    let result = find_by_id_or_name(name, direct, client.get_projects()).await;
    finish_spinner_and_clear(spinner);

    match result? {
        Some(project) => {
            output_record(&project, args.output, cli.no_header)?;
            Ok(())
        }
        None => Err(format!("Project '{}' not found", name).into()),
    }
}
