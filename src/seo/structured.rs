//! schema.org JSON-LD script.
//!
//! Optional step after [`super::og::project`], controlled by
//! `[structured_data] enable`.

use super::tag::HeadTag;
use crate::config::{SiteConfig, StructuredDataConfig};
use serde_json::{Map, Value, json};

pub const JSON_LD: &str = "application/ld+json";

/// Build the JSON-LD tag, or `None` when structured data is disabled.
pub fn structured_data(site: &SiteConfig, config: &StructuredDataConfig) -> Option<HeadTag> {
    if !config.enable {
        return None;
    }

    let mut data = Map::new();
    data.insert("@context".into(), json!("http://schema.org"));
    data.insert("@type".into(), json!(config.kind));
    if !config.email.is_empty() {
        let email = config.email.trim_start_matches("mailto:");
        data.insert("email".into(), json!(format!("mailto:{email}")));
    }
    data.insert("image".into(), json!(site.image_absolute_url()));
    if !config.job_title.is_empty() {
        data.insert("jobTitle".into(), json!(config.job_title));
    }
    if !config.name.is_empty() {
        data.insert("name".into(), json!(config.name));
    }
    data.insert("url".into(), json!(site.url));
    if !config.same_as.is_empty() {
        data.insert("sameAs".into(), json!(config.same_as));
    }

    Some(HeadTag::Script {
        kind: JSON_LD,
        body: Value::Object(data).to_string(),
    })
}
