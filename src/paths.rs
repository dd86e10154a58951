// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Fixed dataset layout. Everything is checked once, at startup, before any file is read.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::errors::EdaError;

pub const DATA_DIR: &str = "data";
pub const TRAIN_DIR: &str = "Train";
pub const TEST_DIR: &str = "Test (Targets)";

pub const TRAIN_SEQUENCES: &str = "train_sequences.fasta";
pub const TRAIN_TERMS: &str = "train_terms.tsv";

pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<PathBuf, EdaError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(EdaError::MissingDirectory(path.to_path_buf()));
    }
    debug!("found directory {}", path.display());
    Ok(path.to_path_buf())
}

/// Checks every `subpaths` entry (relative to `root`), in order, and stops at the first one that
/// is missing.
pub fn ensure_dirs<P, S>(root: P, subpaths: &[S]) -> Result<Vec<PathBuf>, EdaError>
where
    P: AsRef<Path>,
    S: AsRef<Path>,
{
    subpaths
        .iter()
        .map(|sub| ensure_dir(root.as_ref().join(sub)))
        .collect()
}

#[derive(Debug, Clone)]
pub struct DataLayout {
    pub data_dir: PathBuf,
    pub train_dir: PathBuf,
    pub test_dir: PathBuf,
}

impl DataLayout {
    pub fn resolve<P: AsRef<Path>>(root: P) -> Result<DataLayout, EdaError> {
        let root = root.as_ref();
        let subpaths = [
            PathBuf::from(DATA_DIR),
            Path::new(DATA_DIR).join(TRAIN_DIR),
            Path::new(DATA_DIR).join(TEST_DIR),
        ];
        // One path per subpath, or an error.
        let [data_dir, train_dir, test_dir]: [PathBuf; 3] = ensure_dirs(root, &subpaths)?
            .try_into()
            .map_err(|_| EdaError::MissingDirectory(root.to_path_buf()))?;
        info!("Dataset root: {}", root.display());
        Ok(DataLayout {
            data_dir,
            train_dir,
            test_dir,
        })
    }

    pub fn train_sequences(&self) -> PathBuf {
        self.train_dir.join(TRAIN_SEQUENCES)
    }

    pub fn train_terms(&self) -> PathBuf {
        self.train_dir.join(TRAIN_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn full_layout() -> TempDir {
        let root = TempDir::new().expect("temp dir");
        fs::create_dir_all(root.path().join(DATA_DIR).join(TRAIN_DIR)).expect("mkdir train");
        fs::create_dir_all(root.path().join(DATA_DIR).join(TEST_DIR)).expect("mkdir test");
        root
    }

    #[test]
    fn test_resolve_full_layout() {
        let root = full_layout();
        let layout = DataLayout::resolve(root.path()).expect("layout");
        assert_eq!(layout.data_dir, root.path().join("data"));
        assert_eq!(layout.train_dir, root.path().join("data").join("Train"));
        assert_eq!(layout.test_dir, root.path().join("data").join("Test (Targets)"));
        assert_eq!(
            layout.train_sequences(),
            root.path().join("data/Train/train_sequences.fasta")
        );
    }

    #[test]
    fn test_resolve_missing_test_dir() {
        let root = TempDir::new().expect("temp dir");
        fs::create_dir_all(root.path().join(DATA_DIR).join(TRAIN_DIR)).expect("mkdir train");
        match DataLayout::resolve(root.path()) {
            Err(EdaError::MissingDirectory(p)) => {
                assert_eq!(p, root.path().join(DATA_DIR).join(TEST_DIR))
            }
            other => panic!("expected MissingDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_train_dir() {
        let root = TempDir::new().expect("temp dir");
        fs::create_dir_all(root.path().join(DATA_DIR).join(TEST_DIR)).expect("mkdir test");
        match DataLayout::resolve(root.path()) {
            Err(EdaError::MissingDirectory(p)) => {
                assert_eq!(p, root.path().join(DATA_DIR).join(TRAIN_DIR))
            }
            other => panic!("expected MissingDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_reports_first_missing() {
        let root = TempDir::new().expect("temp dir");
        match DataLayout::resolve(root.path()) {
            Err(EdaError::MissingDirectory(p)) => assert_eq!(p, root.path().join(DATA_DIR)),
            other => panic!("expected MissingDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_ensure_dirs_in_order() {
        let root = full_layout();
        let dirs = ensure_dirs(root.path(), &["data/Train", "data/Test (Targets)"]).expect("dirs");
        assert_eq!(
            dirs,
            vec![
                root.path().join("data/Train"),
                root.path().join("data/Test (Targets)")
            ]
        );
        match ensure_dirs(root.path(), &["data", "data/Valid", "data/Nope"]) {
            Err(EdaError::MissingDirectory(p)) => assert_eq!(p, root.path().join("data/Valid")),
            other => panic!("expected MissingDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_ensure_dir_rejects_plain_file() {
        let root = TempDir::new().expect("temp dir");
        let file = root.path().join("not-a-dir");
        fs::write(&file, "x").expect("write");
        assert!(matches!(ensure_dir(&file), Err(EdaError::MissingDirectory(_))));
    }
}
