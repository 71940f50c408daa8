//! Site configuration management for `sitehead.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── data       # [data]
//! │   └── structured # [structured_data]
//! ├── types/         # ConfigError, diagnostics, field paths
//! └── mod.rs         # Config (this file)
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{DataConfig, SiteConfig, StructuredDataConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitehead.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteConfig,

    /// Build-time data sources
    #[serde(default)]
    pub data: DataConfig,

    /// Optional JSON-LD script
    #[serde(default)]
    pub structured_data: StructuredDataConfig,
}

impl Config {
    /// Open a config file and resolve paths against its directory.
    ///
    /// Unknown fields are reported and ignored. No validation happens here;
    /// call [`Config::validate`] before rendering.
    pub fn open(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;

        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.config_path = path.to_path_buf();
        config.set_root(&root);
        config.data.normalize(&root);

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Override `site.url`, e.g. for a deployment whose URL differs from local.
    pub fn apply_site_url(&mut self, url: Option<&str>) {
        if let Some(url) = url {
            self.site.url = url.to_string();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics from every section.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.data.validate(&mut diag);
        self.structured_data.validate(&mut diag);
        diag
    }

    /// Validate configuration, printing warnings and failing on errors.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Commented template written by `sitehead init`.
    pub fn template() -> String {
        let mut out = format!(
            "# sitehead configuration file (v{})\n\n",
            env!("CARGO_PKG_VERSION")
        );
        for section in [
            SiteConfig::TEMPLATE,
            DataConfig::TEMPLATE,
            StructuredDataConfig::TEMPLATE,
        ] {
            out.push_str(section);
            out.push('\n');
        }
        out
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    /// Parse configuration from a TOML string, without path resolution.
    fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> Config {
    let config = format!(
        "[site]\ntitle = \"Acme\"\ndescription = \"Widgets\"\nurl = \"https://acme.test\"\n{extra}"
    );
    let (parsed, ignored) = Config::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
