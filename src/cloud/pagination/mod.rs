//! Listing pagination
//!
//! Listing endpoints answer with `{ "count", "results", "links" }`; the
//! `next` link points at the following page. [`Pager`] walks those links
//! lazily and [`extract_into`] decodes single already-fetched bodies.

mod models;
mod pager;

pub use models::{decode_results, extract_into, links, next_link, Link, Page};
pub use pager::{EmptyPagePolicy, PageDecoder, Pager};
