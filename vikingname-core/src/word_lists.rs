//! Word-list storage - where name pools come from
//!
//! Each pool is backed by a newline-delimited text file in a single
//! directory (`MaleNames.txt`, `FemaleNames.txt`, `Titles.txt`).
//! Missing files are created with the compiled-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::NamingError;
use crate::pools::PoolKind;

/// Something that can produce the raw entries of a name pool
pub trait WordListSource {
    fn load(&self, kind: PoolKind) -> Result<Vec<String>, NamingError>;
}

/// Compiled-in default lists, no storage involved
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultWordLists;

impl WordListSource for DefaultWordLists {
    fn load(&self, kind: PoolKind) -> Result<Vec<String>, NamingError> {
        Ok(kind.defaults().iter().map(|s| s.to_string()).collect())
    }
}

/// Word lists stored as text files in one directory
#[derive(Clone, Debug)]
pub struct FileWordLists {
    dir: PathBuf,
}

impl FileWordLists {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, kind: PoolKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Create the directory and any missing word-list files.
    ///
    /// Returns the files that were written. Existing files are left alone.
    pub fn verify(&self) -> Result<Vec<PathBuf>, NamingError> {
        fs::create_dir_all(&self.dir).map_err(|e| NamingError::io(&self.dir, e))?;

        let mut created = Vec::new();
        for kind in PoolKind::ALL {
            let path = self.path(kind);
            if path.exists() {
                continue;
            }
            fs::write(&path, kind.defaults().join("\n")).map_err(|e| NamingError::io(&path, e))?;
            tracing::warn!("Created missing word list {} with defaults", path.display());
            created.push(path);
        }
        Ok(created)
    }
}

impl WordListSource for FileWordLists {
    fn load(&self, kind: PoolKind) -> Result<Vec<String>, NamingError> {
        let path = self.path(kind);
        let content = fs::read_to_string(&path).map_err(|e| NamingError::io(&path, e))?;
        let entries = parse_word_list(&content);
        tracing::debug!("Read {} entries from {}", entries.len(), path.display());
        Ok(entries)
    }
}

/// Split file content into trimmed, non-blank lines
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::NamePools;

    #[test]
    fn test_parse_skips_blank_and_trims() {
        let entries = parse_word_list("Bjorn\r\n\n  Erik \nLeif\n");
        assert_eq!(entries, vec!["Bjorn", "Erik", "Leif"]);
    }

    #[test]
    fn test_verify_creates_missing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let lists = FileWordLists::new(tmp.path().join("TextFiles"));

        let created = lists.verify().unwrap();
        assert_eq!(created.len(), 3);
        for kind in PoolKind::ALL {
            assert!(lists.path(kind).exists());
            assert_eq!(lists.load(kind).unwrap().len(), kind.defaults().len());
        }

        // Second pass has nothing to do
        assert!(lists.verify().unwrap().is_empty());
    }

    #[test]
    fn test_verify_keeps_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let lists = FileWordLists::new(tmp.path());
        fs::write(lists.path(PoolKind::Male), "John\n").unwrap();

        let created = lists.verify().unwrap();
        assert_eq!(created.len(), 2);
        assert_eq!(lists.load(PoolKind::Male).unwrap(), vec!["John"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let lists = FileWordLists::new(tmp.path());
        let err = lists.load(PoolKind::Title).unwrap_err();
        assert!(matches!(err, NamingError::Io { .. }));
    }

    #[test]
    fn test_empty_file_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let lists = FileWordLists::new(tmp.path());
        lists.verify().unwrap();
        fs::write(lists.path(PoolKind::Female), "\n\n").unwrap();

        let pools = NamePools::load(&lists).unwrap();
        assert_eq!(pools.female.len(), PoolKind::Female.defaults().len());
    }
}
