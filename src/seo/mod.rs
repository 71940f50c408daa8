//! Document head metadata.
//!
//! - [`og`]: site metadata → title, search engine, social card tags
//! - [`structured`]: optional schema.org JSON-LD
//! - [`tag`]: tag model, deduplication and rendering

pub mod og;
pub mod structured;
pub mod tag;

pub use tag::Head;

use crate::config::{SiteConfig, StructuredDataConfig};

/// Full head projection: metadata tags, then structured data if enabled.
pub fn site_head(site: &SiteConfig, structured: &StructuredDataConfig) -> Head {
    let mut head = og::project(site);
    if let Some(script) = structured::structured_data(site, structured) {
        head.insert(script);
    }
    head
}
