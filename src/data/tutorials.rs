//! Tutorial listing.
//!
//! Each YAML file holds a sequence of entries:
//!
//! ```yaml
//! - title: Getting started
//! - title: Deploying
//! ```
//!
//! Only the number of entries reaches the page.

use super::DataError;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
struct TutorialEntry {
    #[allow(dead_code)]
    title: String,
}

/// Count tutorial entries in a YAML file or a directory of YAML files.
pub fn count_tutorials(path: &Path) -> Result<usize, DataError> {
    if !path.exists() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        yaml_files(path)?
            .iter()
            .try_fold(0, |total, file| Ok::<_, DataError>(total + count_file(file)?))
    } else {
        count_file(path)
    }
}

fn count_file(path: &Path) -> Result<usize, DataError> {
    let content =
        fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;

    if content.trim().is_empty() {
        return Ok(0);
    }

    let entries: Vec<TutorialEntry> =
        serde_yaml::from_str(&content).map_err(|err| DataError::Yaml(path.to_path_buf(), err))?;
    crate::debug!("data"; "{}: {} tutorials", path.display(), entries.len());
    Ok(entries.len())
}

/// `*.yaml` / `*.yml` files directly under `dir`, sorted by path.
fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    let entries = fs::read_dir(dir).map_err(|err| DataError::Io(dir.to_path_buf(), err))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|err| DataError::Io(dir.to_path_buf(), err))?
            .path();
        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if is_yaml && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutorials.yaml");
        fs::write(&path, "- title: One\n- title: Two\n- title: Three\n").unwrap();
        assert_eq!(count_tutorials(&path).unwrap(), 3);
    }

    #[test]
    fn test_count_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "- title: One\n").unwrap();
        fs::write(dir.path().join("b.yml"), "- title: Two\n- title: Three\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "- title: Ignored\n").unwrap();
        assert_eq!(count_tutorials(dir.path()).unwrap(), 3);
    }

    #[test]
    fn test_empty_file_counts_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutorials.yaml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(count_tutorials(&path).unwrap(), 0);
    }

    #[test]
    fn test_entry_without_title_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutorials.yaml");
        fs::write(&path, "- name: One\n").unwrap();
        assert!(matches!(
            count_tutorials(&path),
            Err(DataError::Yaml(..))
        ));
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            count_tutorials(&dir.path().join("missing.yaml")),
            Err(DataError::NotFound(_))
        ));
    }
}
