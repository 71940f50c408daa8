//! Header icon descriptor.
//!
//! Reads the icon's pixel size and fits it into a fluid box no wider than
//! `[data] icon_max_width`. Images are never upscaled.

use super::DataError;
use serde::Serialize;
use std::path::{Component, Path};

/// Pre-resolved image handed to the header region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageDescriptor {
    /// Site-relative URL (e.g., "/images/icon.png").
    pub src: String,
    /// Presentation width in pixels.
    pub width: u32,
    /// Presentation height in pixels.
    pub height: u32,
    /// Intrinsic width / height.
    pub aspect_ratio: f64,
}

impl ImageDescriptor {
    /// Resolve the descriptor for `path`, an image file under `root`.
    pub fn resolve(path: &Path, root: &Path, max_width: u32) -> Result<Self, DataError> {
        let src = site_url(path, root)
            .ok_or_else(|| DataError::OutsideRoot(path.to_path_buf(), root.to_path_buf()))?;
        let (width, height) = image::image_dimensions(path)
            .map_err(|err| DataError::Image(path.to_path_buf(), err))?;

        Ok(Self::fit(src, width, height, max_width))
    }

    /// Fit intrinsic `width` x `height` into `max_width`, keeping the ratio.
    pub fn fit(src: String, width: u32, height: u32, max_width: u32) -> Self {
        let aspect_ratio = if height == 0 {
            1.0
        } else {
            f64::from(width) / f64::from(height)
        };

        let (width, height) = if max_width == 0 || width <= max_width {
            (width, height)
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = (f64::from(max_width) / aspect_ratio).round() as u32;
            (max_width, scaled.max(1))
        };

        Self {
            src,
            width,
            height,
            aspect_ratio,
        }
    }
}

/// Site-relative URL of a file under the project root.
///
/// `None` when `path` is not under `root` or climbs out of it with `..`.
fn site_url(path: &Path, root: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(format!("/{}", parts.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_downscales() {
        let image = ImageDescriptor::fit("/icon.png".into(), 400, 200, 100);
        assert_eq!((image.width, image.height), (100, 50));
        assert!((image.aspect_ratio - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fit_never_upscales() {
        let image = ImageDescriptor::fit("/icon.png".into(), 64, 64, 100);
        assert_eq!((image.width, image.height), (64, 64));
    }

    #[test]
    fn test_fit_keeps_one_pixel_height() {
        let image = ImageDescriptor::fit("/line.png".into(), 1000, 1, 100);
        assert_eq!((image.width, image.height), (100, 1));
    }

    #[test]
    fn test_site_url() {
        let root = Path::new("/site");
        assert_eq!(
            site_url(Path::new("/site/images/icon.png"), root).as_deref(),
            Some("/images/icon.png")
        );
        assert_eq!(
            site_url(Path::new("/site/./icon.png"), root).as_deref(),
            Some("/icon.png")
        );
    }

    #[test]
    fn test_site_url_rejects_paths_leaving_root() {
        let root = Path::new("/site");
        assert_eq!(site_url(Path::new("/site/../shared/icon.png"), root), None);
        assert_eq!(site_url(Path::new("/home/user/secret/icon.png"), root), None);
    }

    #[test]
    fn test_resolve_rejects_icon_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        std::fs::create_dir(&root).unwrap();
        let path = dir.path().join("icon.png");
        image::RgbImage::new(10, 10).save(&path).unwrap();

        let err = ImageDescriptor::resolve(&path, &root, 100).unwrap_err();
        assert!(matches!(err, DataError::OutsideRoot(..)));

        let climbing = root.join("../icon.png");
        let err = ImageDescriptor::resolve(&climbing, &root, 100).unwrap_err();
        assert!(matches!(err, DataError::OutsideRoot(..)));
    }

    #[test]
    fn test_resolve_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        image::RgbImage::new(300, 150).save(&path).unwrap();

        let image = ImageDescriptor::resolve(&path, dir.path(), 100).unwrap();
        assert_eq!(image.src, "/icon.png");
        assert_eq!((image.width, image.height), (100, 50));
    }

    #[test]
    fn test_resolve_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, "not an image").unwrap();

        let err = ImageDescriptor::resolve(&path, dir.path(), 100).unwrap_err();
        assert!(matches!(err, DataError::Image(..)));
    }
}
