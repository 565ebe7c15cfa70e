//! Region API operations

use crate::cloud::pagination::Pager;
use crate::cloud::CloudClient;
use crate::config::api;
use crate::error::Result;

use super::models::Region;

impl CloudClient {
    /// Pager over all regions
    pub fn regions_pager(&self) -> Pager<'_, Region> {
        Pager::new(self, self.listing_url(&[api::REGIONS])).with_context("regions")
    }

    /// Get all regions (every page, in listing order)
    pub async fn get_regions(&self) -> Result<Vec<Region>> {
        self.regions_pager().all_pages().await
    }

    /// Get a single region by ID
    pub async fn get_region(&self, region_id: u64) -> Result<Option<Region>> {
        let id = region_id.to_string();
        let url = self.url(&[api::REGIONS, &id]);
        self.fetch_resource(&url, &format!("region '{}'", region_id))
            .await
    }
}
