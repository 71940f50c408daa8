//! Site initialization.
//!
//! Writes a commented `sitehead.toml` into a new or existing directory.

use crate::{config::Config, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Create a config file at `root/config_name`.
///
/// If `dry_run` is true, only prints the config template to stdout.
/// Refuses to overwrite an existing config.
pub fn new_site(root: &Path, config_name: &Path, dry_run: bool) -> Result<()> {
    let template = Config::template();

    if dry_run {
        print!("{template}");
        return Ok(());
    }

    let path = root.join(config_name);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, template)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("site");
        new_site(&root, Path::new("sitehead.toml"), false).unwrap();

        let config = Config::open(&root.join("sitehead.toml")).unwrap();
        assert_eq!(config.site.title, "My Site");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sitehead.toml"), "keep").unwrap();

        let err = new_site(dir.path(), Path::new("sitehead.toml"), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(dir.path().join("sitehead.toml")).unwrap(), "keep");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        new_site(dir.path(), Path::new("sitehead.toml"), true).unwrap();
        assert!(!dir.path().join("sitehead.toml").exists());
    }
}
