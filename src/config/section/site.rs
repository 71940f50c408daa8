//! `[site]` configuration.
//!
//! The per-build metadata record projected into `<head>`: title, description,
//! locale settings, canonical URL and the optional social handles.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site image path appended to `url` when no `[site] image` is configured.
pub const DEFAULT_IMAGE_PATH: &str = "/static/placeholder.jpg";

/// Site metadata consumed by the head projector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,

    /// Open Graph locale (e.g., "en_US").
    pub locale: String,

    /// Absolute site URL, also the canonical link (e.g., "https://example.com").
    pub url: String,

    /// Twitter account shown as `twitter:site` (e.g., "@acme").
    pub twitter_handle: Option<String>,

    /// Facebook application id shown as `fb:app_id`.
    pub facebook_app_id: Option<String>,

    /// Site-relative path of the social card image.
    pub image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            language: "en".into(),
            locale: "en_US".into(),
            url: String::new(),
            twitter_handle: None,
            facebook_app_id: None,
            image: DEFAULT_IMAGE_PATH.into(),
        }
    }
}

/// Field paths of `[site]`.
pub struct SiteConfigFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub language: FieldPath,
    pub locale: FieldPath,
    pub url: FieldPath,
    pub twitter_handle: FieldPath,
    pub facebook_app_id: FieldPath,
    pub image: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteConfigFields = SiteConfigFields {
        title: FieldPath::new("site.title"),
        description: FieldPath::new("site.description"),
        language: FieldPath::new("site.language"),
        locale: FieldPath::new("site.locale"),
        url: FieldPath::new("site.url"),
        twitter_handle: FieldPath::new("site.twitter_handle"),
        facebook_app_id: FieldPath::new("site.facebook_app_id"),
        image: FieldPath::new("site.image"),
    };

    /// Commented TOML written by `sitehead init`.
    pub const TEMPLATE: &'static str = r#"[site]
# Site title, also used as og:site_name
title = "My Site"
# Meta description
description = "A static site"
# Language code for <html lang>
language = "en"
# Open Graph locale
locale = "en_US"
# Absolute URL, used as the canonical link
url = "https://example.com"
# Site-relative path of the social card image
image = "/static/placeholder.jpg"
# twitter_handle = "@example"
# facebook_app_id = "1234567890"
"#;

    /// Twitter handle, if set to a non-empty value.
    pub fn twitter_handle(&self) -> Option<&str> {
        present(self.twitter_handle.as_deref())
    }

    /// Facebook app id, if set to a non-empty value.
    pub fn facebook_app_id(&self) -> Option<&str> {
        present(self.facebook_app_id.as_deref())
    }

    /// Absolute URL of the site image: `url` + `image`, verbatim.
    pub fn image_absolute_url(&self) -> String {
        format!("{}{}", self.url, self.image)
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `url` must be a valid http(s) URL with a host
    /// - `twitter_handle` should start with `@` (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is empty",
                format!("set {}, e.g.: \"My Site\"", Self::FIELDS.title),
            );
        }

        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("{} is not configured", Self::FIELDS.url),
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        } else {
            match url::Url::parse(&self.url) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if let Some(handle) = self.twitter_handle()
            && !handle.starts_with('@')
        {
            diag.warn(
                Self::FIELDS.twitter_handle,
                format!("'{handle}' does not start with '@'"),
            );
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
