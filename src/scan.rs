//! Directory scanning.
//!
//! A scan lists the direct children of one directory and snapshots the
//! metadata the age policy needs. Scanning never fails from the caller's point
//! of view: a directory that is missing or unreadable scans as empty, and an
//! entry whose metadata cannot be read is left out.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// OS-convention metadata files that do not start with a dot.
const OS_METADATA_NAMES: &[&str] = &["Icon\r", "desktop.ini", "Thumbs.db"];

/// What kind of filesystem entry a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    /// Swept as a single unit; its contents are never evaluated.
    Directory,
    /// Described by the link's own metadata, never by its target.
    Symlink,
}

/// Snapshot of one scanned entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path of the entry.
    pub path: PathBuf,
    /// Last modification time as reported by the filesystem.
    pub modified_at: DateTime<Utc>,
    pub kind: EntryKind,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, modified_at: DateTime<Utc>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            modified_at,
            kind,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Final path component, lossily converted for display and logging.
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Lists the visible entries of a directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Self
    }

    /// Scan `directory` and return one record per visible entry.
    ///
    /// The order is whatever the filesystem returns.
    pub fn scan(&self, directory: &Path) -> Vec<FileRecord> {
        let directory = std::path::absolute(directory).unwrap_or_else(|_| directory.to_path_buf());

        let entries = match fs::read_dir(&directory) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        entries
            .flatten()
            .filter(|entry| !is_hidden_name(&entry.file_name().to_string_lossy()))
            .filter_map(|entry| read_record(entry.path()))
            .collect()
    }
}

/// Whether an entry name is hidden or OS bookkeeping.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') || OS_METADATA_NAMES.contains(&name)
}

fn read_record(path: PathBuf) -> Option<FileRecord> {
    let metadata = fs::symlink_metadata(&path).ok()?;
    let modified = metadata.modified().ok()?;

    let file_type = metadata.file_type();
    let kind = if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };

    Some(FileRecord::new(path, DateTime::<Utc>::from(modified), kind))
}

/// Final component of `path` for display, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{file_names, write_file};
    use tempfile::TempDir;

    #[test]
    fn scan_empty_directory_returns_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(Scanner::new().scan(temp.path()).is_empty());
    }

    #[test]
    fn scan_missing_directory_returns_nothing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        assert!(Scanner::new().scan(&missing).is_empty());
    }

    #[test]
    fn scan_returns_one_record_per_file() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "file1.txt", "content1");
        write_file(temp.path(), "file2.txt", "content2");
        write_file(temp.path(), "file3.txt", "content3");

        let records = Scanner::new().scan(temp.path());

        assert_eq!(
            file_names(&records),
            vec!["file1.txt", "file2.txt", "file3.txt"]
        );
    }

    #[test]
    fn scan_record_describes_file() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "test.txt", "test content");

        let records = Scanner::new().scan(temp.path());

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.file_name(), "test.txt");
        assert_eq!(record.kind, EntryKind::File);
        assert!(!record.is_directory());
        assert!(record.path.is_absolute());
        let age = Utc::now().signed_duration_since(record.modified_at);
        assert!(age.num_seconds() < 60);
    }

    #[test]
    fn scan_identifies_subdirectory() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("subdir");
        fs::create_dir(&sub).unwrap();
        write_file(&sub, "inner.txt", "not listed");

        let records = Scanner::new().scan(temp.path());

        assert_eq!(records.len(), 1);
        assert!(records[0].is_directory());
    }

    #[test]
    fn scan_skips_hidden_entries() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "visible.txt", "visible");
        write_file(temp.path(), ".hidden", "hidden");
        write_file(temp.path(), ".DS_Store", "dsstore");

        let records = Scanner::new().scan(temp.path());

        assert_eq!(file_names(&records), vec!["visible.txt"]);
    }

    #[test]
    fn scan_mixed_directory_returns_visible_entries_only() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "document.pdf", "pdf");
        write_file(temp.path(), "image.png", "png");
        fs::create_dir(temp.path().join("folder")).unwrap();
        fs::create_dir(temp.path().join(".config")).unwrap();
        write_file(temp.path(), "Thumbs.db", "thumbs");

        let records = Scanner::new().scan(temp.path());

        assert_eq!(
            file_names(&records),
            vec!["document.pdf", "folder", "image.png"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn scan_reports_symlink_without_following_it() {
        let temp = TempDir::new().unwrap();
        let target_dir = temp.path().join("target");
        fs::create_dir(&target_dir).unwrap();
        let scan_dir = temp.path().join("scan");
        fs::create_dir(&scan_dir).unwrap();
        std::os::unix::fs::symlink(&target_dir, scan_dir.join("link")).unwrap();

        let records = Scanner::new().scan(&scan_dir);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, EntryKind::Symlink);
        assert!(!records[0].is_directory());
    }

    #[test]
    fn hidden_name_rules() {
        assert!(is_hidden_name(".DS_Store"));
        assert!(is_hidden_name(".git"));
        assert!(is_hidden_name("desktop.ini"));
        assert!(is_hidden_name("Icon\r"));
        assert!(!is_hidden_name("report.pdf"));
        assert!(!is_hidden_name("Icon"));
    }
}
