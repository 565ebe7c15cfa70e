//! Lazy traversal of linked listing pages

use std::collections::HashSet;

use futures::stream::{self, Stream};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::cloud::CloudClient;
use crate::error::{CloudError, Result};

use super::models::{decode_results, links, next_link, Page};

/// Decodes the record batch out of one page body
pub type PageDecoder<T> = fn(&Value) -> Result<Vec<T>>;

/// Whether a page with zero records ends the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPagePolicy {
    /// Keep following the next link; only its absence ends the listing
    #[default]
    Follow,
    /// Stop at the first empty page even if a next link is present
    Stop,
}

#[derive(Debug)]
enum PagerState {
    BeforeFirstFetch(String),
    HasCurrentPage { next: String },
    Exhausted,
    Failed,
}

/// Cursor over the pages of one listing
///
/// Each call to [`Pager::next_page`] fetches at most one page, and only when
/// asked. After the last page, or after any error, the pager stays finished.
/// Restarting means building a new pager from the same first URL.
pub struct Pager<'a, T> {
    client: &'a CloudClient,
    state: PagerState,
    decode: PageDecoder<T>,
    pages_fetched: usize,
    visited: HashSet<String>,
    empty_page: EmptyPagePolicy,
    cancel: Option<CancellationToken>,
    context: String,
}

impl<'a, T> Pager<'a, T>
where
    T: DeserializeOwned,
{
    /// Pager decoding the `results` key of each page
    pub fn new(client: &'a CloudClient, first_url: impl Into<String>) -> Self {
        Self::with_decoder(client, first_url, decode_results::<T>)
    }

    /// Pager with a caller-supplied page decoder
    pub fn with_decoder(
        client: &'a CloudClient,
        first_url: impl Into<String>,
        decode: PageDecoder<T>,
    ) -> Self {
        Self {
            client,
            state: PagerState::BeforeFirstFetch(first_url.into()),
            decode,
            pages_fetched: 0,
            visited: HashSet::new(),
            empty_page: EmptyPagePolicy::default(),
            cancel: None,
            context: "listing".to_string(),
        }
    }

    /// Label used in log lines and error messages
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_empty_page_policy(mut self, policy: EmptyPagePolicy) -> Self {
        self.empty_page = policy;
        self
    }

    /// Abort page fetches when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, PagerState::Exhausted | PagerState::Failed)
    }

    /// Fetch the next page, or `None` once the listing is finished
    ///
    /// A failure on the first page is returned as-is; later failures are
    /// wrapped in `CloudError::PageFetch` with the page number.
    pub async fn next_page(&mut self) -> Result<Option<Page<T>>> {
        let url = match std::mem::replace(&mut self.state, PagerState::Failed) {
            PagerState::BeforeFirstFetch(url) | PagerState::HasCurrentPage { next: url } => url,
            finished => {
                self.state = finished;
                return Ok(None);
            }
        };

        let number = self.pages_fetched + 1;
        if !self.visited.insert(visit_key(&url)) {
            return Err(CloudError::PageFetch {
                page: number,
                source: Box::new(CloudError::Json(format!(
                    "next link repeats already fetched page '{}'",
                    url
                ))),
            });
        }

        let page = match self.fetch_page(&url, number).await {
            Ok(page) => page,
            Err(e) if number == 1 => return Err(e),
            Err(e) => {
                return Err(CloudError::PageFetch {
                    page: number,
                    source: Box::new(e),
                })
            }
        };
        self.pages_fetched = number;

        self.state = match &page.next {
            None => PagerState::Exhausted,
            Some(_) if page.is_empty() && self.empty_page == EmptyPagePolicy::Stop => {
                debug!("{}: page {} is empty, stopping", self.context, number);
                PagerState::Exhausted
            }
            Some(next) => PagerState::HasCurrentPage { next: next.clone() },
        };

        Ok(Some(page))
    }

    /// Drain every page into one collection, in fetch order
    ///
    /// Any failure discards the records gathered so far.
    pub async fn all_pages(mut self) -> Result<Vec<T>> {
        let mut all_records = Vec::new();
        while let Some(page) = self.next_page().await? {
            all_records.extend(page.records);
        }
        debug!(
            "Fetched {} {} over {} page(s)",
            all_records.len(),
            self.context,
            self.pages_fetched
        );
        Ok(all_records)
    }

    /// The pager as a stream of pages
    ///
    /// Dropping the stream early fetches nothing further.
    pub fn into_stream(self) -> impl Stream<Item = Result<Page<T>>> + 'a
    where
        T: 'a,
    {
        stream::try_unfold(self, |mut pager| async move {
            let page = pager.next_page().await?;
            Ok::<_, CloudError>(page.map(|page| (page, pager)))
        })
    }

    async fn fetch_page(&self, url: &str, number: usize) -> Result<Page<T>> {
        let page_context = format!("{} (page {})", self.context, number);
        let body: Value = match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        return Err(CloudError::Cancelled(format!("stopped fetching {}", page_context)))
                    }
                    body = self.client.fetch_json(url, &page_context) => body?,
                }
            }
            None => self.client.fetch_json(url, &page_context).await?,
        };

        let records = (self.decode)(&body)?;
        let next = match next_link(&links(&body)?) {
            Some(href) => Some(resolve_link(url, href)?),
            None => None,
        };
        let count = body.get("count").and_then(Value::as_u64);

        debug!(
            "{} returned {} records, next: {:?}",
            page_context,
            records.len(),
            next
        );

        Ok(Page {
            number,
            url: url.to_string(),
            records,
            next,
            count,
        })
    }
}

/// Normalized form of a page URL for repeat detection
fn visit_key(url: &str) -> String {
    Url::parse(url)
        .map(String::from)
        .unwrap_or_else(|_| url.to_string())
}

/// Resolve a possibly relative `href` against the page it came from
fn resolve_link(current: &str, href: &str) -> Result<String> {
    let base = Url::parse(current)
        .map_err(|e| CloudError::Json(format!("invalid page URL '{}': {}", current, e)))?;
    base.join(href)
        .map(String::from)
        .map_err(|e| CloudError::Json(format!("invalid next link '{}': {}", href, e)))
}
