//! `validate` command.
//!
//! Reports config diagnostics, then tries to resolve the data sources.

use crate::{
    config::{Config, ConfigDiagnostics},
    data::PageData,
    log, seo,
    utils::plural::plural_count,
};
use anyhow::{Result, bail};

/// Validate `config` and its data sources, printing a report.
pub fn validate_site(config: &Config) -> Result<()> {
    let diag = config.diagnostics();
    report(&diag);

    if diag.has_errors() {
        bail!("validation failed with {}", plural_count(diag.len(), "error"));
    }

    let data = PageData::load(config)?;
    log!(
        "validate";
        "ok: {}, icon {}",
        plural_count(data.tutorial_count, "tutorial"),
        data.image.as_ref().map_or("none".into(), |i| format!("{}x{}", i.width, i.height))
    );

    let head = seo::site_head(&config.site, &config.structured_data);
    if let Some(image) = head.meta_content("og:image") {
        log!("validate"; "social card image: {}", image);
    }
    Ok(())
}

fn report(diag: &ConfigDiagnostics) {
    diag.print_warnings();
    if diag.has_errors() {
        eprintln!("{diag}");
    }
}
