//! Head tag declarations and their HTML rendering.
//!
//! A [`Head`] is an ordered list of [`HeadTag`]s plus the attributes of the
//! `<html>` root. Inserting a tag whose identity is already present replaces
//! it in place, so injecting the same declarations twice is a no-op.

use crate::utils::html::{escape, escape_attr, escape_script};
use std::fmt;

/// Attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
    /// `<meta name="...">` (search engines, Twitter).
    Name(&'static str),
    /// `<meta property="...">` (Open Graph, Facebook).
    Property(&'static str),
    /// `<meta itemprop="...">` (schema.org microdata).
    ItemProp(&'static str),
}

impl MetaKey {
    fn attr(self) -> (&'static str, &'static str) {
        match self {
            Self::Name(v) => ("name", v),
            Self::Property(v) => ("property", v),
            Self::ItemProp(v) => ("itemprop", v),
        }
    }

    /// Key value regardless of attribute (e.g., "og:title").
    pub fn value(self) -> &'static str {
        self.attr().1
    }
}

/// A single document-head element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title { text: String, lang: String },
    Meta { key: MetaKey, content: String },
    Link { rel: &'static str, href: String },
    Script { kind: &'static str, body: String },
}

/// Identity used to deduplicate tags within a [`Head`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum TagKey<'a> {
    Title,
    Meta(MetaKey),
    Link(&'static str, Option<&'a str>),
    Script(&'static str),
}

impl HeadTag {
    pub fn meta(key: MetaKey, content: impl Into<String>) -> Self {
        Self::Meta {
            key,
            content: content.into(),
        }
    }

    pub fn link(rel: &'static str, href: impl Into<String>) -> Self {
        Self::Link {
            rel,
            href: href.into(),
        }
    }

    /// Meta key, if this is a `<meta>` tag.
    pub fn meta_key(&self) -> Option<MetaKey> {
        match self {
            Self::Meta { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// Main payload: title text, meta content, link href or script body.
    pub fn content(&self) -> &str {
        match self {
            Self::Title { text, .. } => text,
            Self::Meta { content, .. } => content,
            Self::Link { href, .. } => href,
            Self::Script { body, .. } => body,
        }
    }

    fn key(&self) -> TagKey<'_> {
        match self {
            Self::Title { .. } => TagKey::Title,
            Self::Meta { key, .. } => TagKey::Meta(*key),
            // One canonical per document; other rels may repeat per href.
            Self::Link { rel, .. } if *rel == "canonical" => TagKey::Link(*rel, None),
            Self::Link { rel, href } => TagKey::Link(*rel, Some(href.as_str())),
            Self::Script { kind, .. } => TagKey::Script(*kind),
        }
    }
}

impl fmt::Display for HeadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title { text, lang } => write!(
                f,
                r#"<title lang="{}">{}</title>"#,
                escape_attr(lang),
                escape(text)
            ),
            Self::Meta { key, content } => {
                let (attr, value) = key.attr();
                write!(
                    f,
                    r#"<meta {attr}="{value}" content="{}">"#,
                    escape_attr(content)
                )
            }
            Self::Link { rel, href } => {
                write!(f, r#"<link rel="{rel}" href="{}">"#, escape_attr(href))
            }
            Self::Script { kind, body } => write!(
                f,
                r#"<script type="{kind}">{}</script>"#,
                escape_script(body)
            ),
        }
    }
}

/// Attributes of the `<html>` root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttrs {
    pub lang: Option<String>,
    /// schema.org type of the page; implies `itemscope`.
    pub itemtype: Option<&'static str>,
}

impl fmt::Display for HtmlAttrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(itemtype) = self.itemtype {
            write!(f, r#" itemscope itemtype="{itemtype}""#)?;
        }
        if let Some(lang) = &self.lang {
            write!(f, r#" lang="{}""#, escape_attr(lang))?;
        }
        Ok(())
    }
}

/// Ordered, deduplicated head declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    pub html: HtmlAttrs,
    tags: Vec<HeadTag>,
}

impl Head {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, replacing any tag with the same identity in place.
    pub fn insert(&mut self, tag: HeadTag) {
        match self.tags.iter().position(|t| t.key() == tag.key()) {
            Some(i) => self.tags[i] = tag,
            None => self.tags.push(tag),
        }
    }

    /// Merge another head into this one: attributes override, tags insert.
    pub fn inject(&mut self, other: Head) {
        if other.html.lang.is_some() {
            self.html.lang = other.html.lang;
        }
        if other.html.itemtype.is_some() {
            self.html.itemtype = other.html.itemtype;
        }
        for tag in other.tags {
            self.insert(tag);
        }
    }

    pub fn tags(&self) -> &[HeadTag] {
        &self.tags
    }

    /// All `<meta>` tags keyed by `value` (e.g., "twitter:site").
    pub fn metas<'a>(&'a self, value: &str) -> impl Iterator<Item = &'a HeadTag> {
        self.tags
            .iter()
            .filter(move |t| t.meta_key().is_some_and(|k| k.value() == value))
    }

    /// Content of the first `<meta>` keyed by `value`.
    ///
    /// The result borrows from the head only, not from `value`.
    pub fn meta_content<'a>(&'a self, value: &str) -> Option<&'a str> {
        self.metas(value).next().map(HeadTag::content)
    }

    /// Render the tags, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for tag in &self.tags {
            out.push_str(&tag.to_string());
            out.push('\n');
        }
        out
    }
}
