//! Build-time data provider.
//!
//! Resolves everything a page render needs before any markup is produced:
//! the `[site]` record, the header icon and the tutorial count.

mod image;
mod tutorials;

pub use image::ImageDescriptor;
pub use tutorials::count_tutorials;

use crate::config::{Config, SiteConfig};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving page data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to read image `{0}`")]
    Image(PathBuf, #[source] ::image::ImageError),

    #[error("invalid YAML in `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("data source `{0}` not found")]
    NotFound(PathBuf),

    #[error("`{0}` is outside the project root `{1}` and has no site URL")]
    OutsideRoot(PathBuf, PathBuf),
}

/// Pre-resolved input of a page render.
#[derive(Debug, Clone)]
pub struct PageData {
    pub site: SiteConfig,
    pub image: Option<ImageDescriptor>,
    pub tutorial_count: usize,
}

impl PageData {
    /// Resolve page data from a loaded config.
    pub fn load(config: &Config) -> Result<Self, DataError> {
        let image = config
            .data
            .icon
            .as_deref()
            .map(|icon| ImageDescriptor::resolve(icon, config.get_root(), config.data.icon_max_width))
            .transpose()?;

        let tutorial_count = match config.data.tutorials.as_deref() {
            Some(path) => count_tutorials(path)?,
            None => 0,
        };

        if let Some(image) = &image {
            crate::debug!("data"; "icon {} at {}x{}", image.src, image.width, image.height);
        }

        Ok(Self {
            site: config.site.clone(),
            image,
            tutorial_count,
        })
    }
}
