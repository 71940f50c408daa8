//! Search engine, schema.org, Twitter Card and Open Graph tags.
//!
//! Pure projection of `[site]` into head declarations. Field contents are
//! passed through untouched; validation belongs to the config loader.

use super::tag::{Head, HeadTag, HtmlAttrs, MetaKey};
use crate::config::SiteConfig;

/// schema.org type of every page.
pub const PAGE_ITEMTYPE: &str = "http://schema.org/WebPage";

/// Third-party asset host warmed up on every page.
pub const PRECONNECT_HOST: &str = "https://cdnjs.cloudflare.com";

/// Fixed site-wide social card values.
pub struct OgDefaults {
    pub og_type: &'static str,
    pub twitter_card: &'static str,
}

impl OgDefaults {
    pub const SITE: Self = Self {
        og_type: "website",
        twitter_card: "summary",
    };
}

/// Project site metadata into `<html>` attributes and head tags.
///
/// Order: title, search engine, canonical, preconnect, schema.org, Twitter,
/// Open Graph, then the optional `fb:app_id` and `twitter:site`.
pub fn project(site: &SiteConfig) -> Head {
    let defaults = OgDefaults::SITE;
    let image = site.image_absolute_url();

    let mut head = Head::new();
    head.html = HtmlAttrs {
        lang: Some(site.language.clone()),
        itemtype: Some(PAGE_ITEMTYPE),
    };

    head.insert(HeadTag::Title {
        text: site.title.clone(),
        lang: site.language.clone(),
    });

    // Search engine
    head.insert(HeadTag::meta(MetaKey::Name("description"), &site.description));
    head.insert(HeadTag::meta(MetaKey::Name("image"), &image));
    head.insert(HeadTag::link("canonical", &site.url));
    head.insert(HeadTag::link("preconnect", PRECONNECT_HOST));

    // Schema.org
    head.insert(HeadTag::meta(MetaKey::ItemProp("name"), &site.title));
    head.insert(HeadTag::meta(MetaKey::ItemProp("description"), &site.description));
    head.insert(HeadTag::meta(MetaKey::ItemProp("image"), &image));

    // Twitter
    head.insert(HeadTag::meta(MetaKey::Name("twitter:card"), defaults.twitter_card));
    head.insert(HeadTag::meta(MetaKey::Name("twitter:title"), &site.title));
    head.insert(HeadTag::meta(MetaKey::Name("twitter:description"), &site.description));
    head.insert(HeadTag::meta(MetaKey::Name("twitter:image"), &image));

    // Open Graph
    head.insert(HeadTag::meta(MetaKey::Property("og:title"), &site.title));
    head.insert(HeadTag::meta(MetaKey::Property("og:type"), defaults.og_type));
    head.insert(HeadTag::meta(MetaKey::Property("og:url"), &site.url));
    head.insert(HeadTag::meta(MetaKey::Property("og:image"), &image));
    head.insert(HeadTag::meta(MetaKey::Property("og:description"), &site.description));
    head.insert(HeadTag::meta(MetaKey::Property("og:site_name"), &site.title));
    head.insert(HeadTag::meta(MetaKey::Property("og:locale"), &site.locale));

    // Analytics, only when configured
    if let Some(app_id) = site.facebook_app_id() {
        head.insert(HeadTag::meta(MetaKey::Property("fb:app_id"), app_id));
    }
    if let Some(handle) = site.twitter_handle() {
        head.insert(HeadTag::meta(MetaKey::Name("twitter:site"), handle));
    }

    head
}
