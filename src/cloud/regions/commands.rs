//! Region command handlers

use crate::cli::{Cli, RegionArgs};
use crate::cloud::helpers::{collect_pages, find_by_id_or_name};
use crate::cloud::traits::apply_name_filter;
use crate::cloud::CloudClient;
use crate::output::{output_record, output_records};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_and_clear};

/// Run the 'get region' command
pub async fn run_region_command(
    client: &CloudClient,
    cli: &Cli,
    args: &RegionArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(name) = &args.name {
        let spinner = create_spinner(&format!("Fetching region '{}'...", name), cli.batch);
        let direct = name.parse::<u64>().ok().map(|id| client.get_region(id));
        let result = find_by_id_or_name(name, direct, client.get_regions()).await;
        finish_spinner_and_clear(spinner);

        return match result? {
            Some(region) => {
                output_record(&region, args.output, cli.no_header)?;
                Ok(())
            }
            None => Err(format!("Region '{}' not found", name).into()),
        };
    }

    let spinner = create_spinner("Fetching regions...", cli.batch);
    let mut regions = match collect_pages(client.regions_pager(), &spinner).await {
        Ok(regions) => regions,
        Err(e) => {
            finish_spinner_and_clear(spinner);
            return Err(e.into());
        }
    };
    finish_spinner(spinner, "Done");

    apply_name_filter(&mut regions, args.filter.as_deref());
    output_records(&regions, args.output, cli.no_header, "regions")?;
    Ok(())
}
