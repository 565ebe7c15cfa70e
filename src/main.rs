//! cloudctl - Main entry point

use clap::Parser;
use log::{debug, info};
use std::time::Duration;

use cloudctl::cli::{CreateResource, DeleteResource, GetResource, WaitResource};
use cloudctl::cloud::{
    run_create_volume_command, run_delete_stack_command, run_delete_volume_command,
    run_project_command, run_region_command, run_stack_command, run_task_get_command,
    run_task_wait_command, run_volume_command,
};
use cloudctl::{Cli, ClientConfig, CloudClient, Command, TokenResolver};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cloudctl v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli.command);

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve token with fallback logic
    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;

    let mut config = ClientConfig::new(&cli.host, &token)
        .with_request_timeout(Duration::from_secs(cli.request_timeout));
    if let Some(base_url) = &cli.base_url {
        debug!("Using base URL override: {}", base_url);
        config = config.with_base_url(base_url);
    }
    let client = CloudClient::from_config(config)?;

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Project(args) => run_project_command(&client, cli, args).await,
            GetResource::Region(args) => run_region_command(&client, cli, args).await,
            GetResource::Volume(args) => run_volume_command(&client, cli, args).await,
            GetResource::Stack(args) => run_stack_command(&client, cli, args).await,
            GetResource::Task(args) => run_task_get_command(&client, cli, args).await,
        },
        Command::Wait { resource } => match resource {
            WaitResource::Task(args) => run_task_wait_command(&client, cli, args).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::Volume(args) => run_create_volume_command(&client, cli, args).await,
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Volume(args) => run_delete_volume_command(&client, cli, args).await,
            DeleteResource::Stack(args) => run_delete_stack_command(&client, cli, args).await,
        },
    }
}
