//! `[data]` configuration.
//!
//! Build-time data sources: the header icon and the tutorial listing.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Header icon image (relative to project root).
    pub icon: Option<PathBuf>,

    /// Maximum presentation width of the icon in pixels.
    pub icon_max_width: u32,

    /// Tutorial YAML file or directory of YAML files (relative to project root).
    pub tutorials: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            icon: None,
            icon_max_width: 100,
            tutorials: None,
        }
    }
}

pub struct DataConfigFields {
    pub icon: FieldPath,
    pub icon_max_width: FieldPath,
    pub tutorials: FieldPath,
}

impl DataConfig {
    pub const FIELDS: DataConfigFields = DataConfigFields {
        icon: FieldPath::new("data.icon"),
        icon_max_width: FieldPath::new("data.icon_max_width"),
        tutorials: FieldPath::new("data.tutorials"),
    };

    pub const TEMPLATE: &'static str = r#"[data]
# Header icon image, relative to this file
# icon = "images/icon.png"
# Icon is scaled down to at most this width (pixels)
icon_max_width = 100
# YAML file or directory listing tutorials; the header shows their count
# tutorials = "data/tutorials.yaml"
"#;

    /// Resolve relative paths against the project root.
    pub fn normalize(&mut self, root: &Path) {
        if let Some(icon) = &mut self.icon {
            *icon = root.join(&*icon);
        }
        if let Some(tutorials) = &mut self.tutorials {
            *tutorials = root.join(&*tutorials);
        }
    }

    /// Validate data sources.
    ///
    /// Paths are checked after `normalize()`, so missing files are reported
    /// with their absolute location.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.icon_max_width == 0 {
            diag.error(Self::FIELDS.icon_max_width, "must be greater than 0");
        }

        if let Some(icon) = &self.icon
            && !icon.is_file()
        {
            diag.error_with_hint(
                Self::FIELDS.icon,
                format!("icon not found: {}", icon.display()),
                "point it at a png, jpeg or webp file",
            );
        }

        if let Some(tutorials) = &self.tutorials
            && !tutorials.exists()
        {
            diag.error(
                Self::FIELDS.tutorials,
                format!("tutorials not found: {}", tutorials.display()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_joins_root() {
        let mut config = DataConfig {
            icon: Some("images/icon.png".into()),
            tutorials: Some("data".into()),
            ..Default::default()
        };
        config.normalize(Path::new("/site"));
        assert_eq!(config.icon.as_deref(), Some(Path::new("/site/images/icon.png")));
        assert_eq!(config.tutorials.as_deref(), Some(Path::new("/site/data")));
    }

    #[test]
    fn test_validate_missing_sources() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = DataConfig {
            icon: Some("nope.png".into()),
            icon_max_width: 0,
            tutorials: Some("nope.yaml".into()),
        };
        config.normalize(dir.path());

        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_validate_default_is_clean() {
        let mut diag = ConfigDiagnostics::new();
        DataConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
    }
}
