use crate::scan::FileRecord;
use crate::sweep::SweepTarget;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub(crate) const HOUR: Duration = Duration::from_secs(3600);
pub(crate) const DAY: Duration = Duration::from_secs(24 * 3600);

pub(crate) fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Back-date the modification time of a file or directory by `age`.
pub(crate) fn set_age(path: &Path, age: Duration) {
    let file = File::open(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

pub(crate) fn write_aged_file(dir: &Path, name: &str, age: Duration) -> PathBuf {
    let path = write_file(dir, name, name);
    set_age(&path, age);
    path
}

pub(crate) fn create_aged_dir(dir: &Path, name: &str, age: Duration) -> PathBuf {
    let path = dir.join(name);
    std::fs::create_dir_all(&path).unwrap();
    std::fs::write(path.join("inside.txt"), "inside").unwrap();
    set_age(&path, age);
    path
}

/// Sorted final path components of `records`.
pub(crate) fn file_names(records: &[FileRecord]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(FileRecord::file_name).collect();
    names.sort();
    names
}

/// A scratch area with a trash root and any number of watched directories.
pub(crate) struct Sandbox {
    pub temp: TempDir,
}

impl Sandbox {
    pub(crate) fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        self.temp.path()
    }

    pub(crate) fn trash_root(&self) -> PathBuf {
        self.path().join("Trash")
    }

    pub(crate) fn log_dir(&self) -> PathBuf {
        self.path().join("logs")
    }

    /// Create a watched directory and return it as a sweep target.
    pub(crate) fn target(&self, label: &str) -> SweepTarget {
        let path = self.path().join(label);
        std::fs::create_dir_all(&path).unwrap();
        SweepTarget::new(label, path)
    }
}
