//! Helpers shared by the resource command handlers

use futures::TryStreamExt;
use indicatif::ProgressBar;
use serde::de::DeserializeOwned;
use std::future::Future;

use crate::cloud::pagination::Pager;
use crate::cloud::traits::CloudResource;
use crate::error::{CloudError, Result};
use crate::ui::{listing_progress, update_spinner};

/// Find a record by ID or name
///
/// `get_one` is the direct lookup, tried first when the input can be an ID.
/// When it is absent, finds nothing, or the service rejects the input as a
/// malformed ID (400), the full listing is fetched and searched with
/// [`CloudResource::matches`].
pub async fn find_by_id_or_name<T, G, L>(
    input: &str,
    get_one: Option<G>,
    list: L,
) -> Result<Option<T>>
where
    T: CloudResource,
    G: Future<Output = Result<Option<T>>>,
    L: Future<Output = Result<Vec<T>>>,
{
    if let Some(get_one) = get_one {
        match get_one.await {
            Ok(Some(record)) => return Ok(Some(record)),
            Ok(None) => {}
            Err(CloudError::Api { status: 400, .. }) => {
                log::debug!("'{}' rejected as an ID", input);
            }
            Err(e) => return Err(e),
        }
    }

    log::debug!("'{}' not found by ID, searching listing by name", input);
    Ok(list.await?.into_iter().find(|r| r.matches(input)))
}

/// Drain a pager page by page, reporting progress on the spinner
pub async fn collect_pages<T>(
    pager: Pager<'_, T>,
    spinner: &Option<ProgressBar>,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let mut records = Vec::new();
    let mut pages = std::pin::pin!(pager.into_stream());

    while let Some(page) = pages.try_next().await? {
        records.extend(page.records);
        update_spinner(
            spinner,
            listing_progress(records.len(), page.count, page.number),
        );
    }

    log::info!("Fetched {} records", records.len());
    Ok(records)
}
