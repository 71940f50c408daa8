//! `head` and `render` commands.

use crate::{
    config::Config,
    data::PageData,
    log,
    page::{load_content, render_page},
    seo,
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Validate config and resolve page data.
fn prepare(config: &mut Config, site_url: Option<&str>) -> Result<PageData> {
    config.apply_site_url(site_url);
    config.validate()?;
    Ok(PageData::load(config)?)
}

/// Head tags for `config`, `<html>` attributes first.
pub fn head_markup(config: &mut Config, site_url: Option<&str>) -> Result<String> {
    let data = prepare(config, site_url)?;
    let head = seo::site_head(&data.site, &config.structured_data);
    Ok(format!("<html{}>\n{}", head.html, head.render()))
}

/// Full page for `config` with optional content file.
pub fn page_markup(
    config: &mut Config,
    site_url: Option<&str>,
    content: Option<&Path>,
) -> Result<String> {
    let data = prepare(config, site_url)?;
    let content = content.map(load_content).transpose()?.unwrap_or_default();
    Ok(render_page(&data, &config.structured_data, &content))
}

/// Write markup to `output`, or stdout when absent.
pub fn emit(markup: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(path, markup)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_head_markup() {
        let mut config = test_parse_config("twitter_handle = \"@acme\"");
        let markup = head_markup(&mut config, None).unwrap();

        assert!(markup.starts_with(
            r#"<html itemscope itemtype="http://schema.org/WebPage" lang="en">"#
        ));
        assert!(markup.contains(r#"<meta name="twitter:site" content="@acme">"#));
    }

    #[test]
    fn test_site_url_override_flows_into_tags() {
        let mut config = test_parse_config("");
        let markup = head_markup(&mut config, Some("https://deploy.test")).unwrap();
        assert!(markup.contains(r#"<link rel="canonical" href="https://deploy.test">"#));
        assert!(markup.contains("https://deploy.test/static/placeholder.jpg"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = test_parse_config("");
        assert!(head_markup(&mut config, Some("not a url")).is_err());
    }

    #[test]
    fn test_page_markup_with_content_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("index.md");
        fs::write(&content, "Hello *world*").unwrap();

        let mut config = test_parse_config("");
        let markup = page_markup(&mut config, None, Some(&content)).unwrap();
        assert!(markup.contains("<p>Hello <em>world</em></p>"));

        let output = dir.path().join("public/index.html");
        emit(&markup, Some(&output)).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), markup);
    }
}
