//! Common utilities shared across CLI commands.

use crate::config::{Config, find_config_file};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Locate and open the config file named on the command line.
///
/// Searches upward from `cwd` for relative names.
pub fn open_config(config_name: &Path, cwd: &Path) -> Result<Config> {
    let Some(path) = find_config_file(config_name, cwd) else {
        bail!(
            "Config file '{}' not found. Run 'sitehead init' to create one.",
            config_name.display()
        );
    };

    crate::debug!("config"; "using {}", path.display());
    Config::open(&path).with_context(|| format!("Failed to load '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_from_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("content");
        fs::create_dir(&sub).unwrap();
        fs::write(dir.path().join("sitehead.toml"), "[site]\ntitle = \"Acme\"\n").unwrap();

        let config = open_config(Path::new("sitehead.toml"), &sub).unwrap();
        assert_eq!(config.site.title, "Acme");
        assert_eq!(config.get_root(), dir.path());
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_config(Path::new("no-such-sitehead.toml"), dir.path()).unwrap_err();
        assert!(err.to_string().contains("sitehead init"));
    }
}
