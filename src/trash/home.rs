//! Trash directory in the user's home.
//!
//! Entries are moved with a single `rename(2)`, so a move either happens
//! completely or not at all. Cross-device moves are reported as failures,
//! never emulated with copy + delete.

use super::info::{self, TRASHINFO_EXTENSION};
use super::{TrashError, Trasher};
use chrono::Local;
use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Upper bound on name-collision retries inside the trash.
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// A trash directory, either freedesktop-style (`files/` + `info/`) or flat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeTrash {
    files_dir: PathBuf,
    info_dir: Option<PathBuf>,
}

impl HomeTrash {
    /// Freedesktop layout rooted at `root` (e.g. `~/.local/share/Trash`).
    pub fn freedesktop(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            files_dir: root.join("files"),
            info_dir: Some(root.join("info")),
        }
    }

    /// Flat layout where entries are moved directly into `dir` (e.g. `~/.Trash`).
    pub fn flat(dir: impl Into<PathBuf>) -> Self {
        Self {
            files_dir: dir.into(),
            info_dir: None,
        }
    }

    /// The platform's trash under `home`, or under `data_dir` for freedesktop systems.
    pub fn platform_default(home: &Path, data_dir: &Path) -> Self {
        if cfg!(target_os = "macos") {
            Self::flat(home.join(".Trash"))
        } else {
            Self::freedesktop(data_dir.join("Trash"))
        }
    }

    /// Directory holding trashed entries.
    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    fn ensure_dirs(&self) -> Result<(), TrashError> {
        let dirs = std::iter::once(&self.files_dir).chain(self.info_dir.as_ref());
        for dir in dirs {
            fs::create_dir_all(dir).map_err(|e| {
                TrashError::Unavailable(format!(
                    "failed to create trash directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Whether moving the directory at `path` would move the trash itself.
    fn would_swallow_trash(&self, path: &Path) -> bool {
        let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let files = self
            .files_dir
            .canonicalize()
            .unwrap_or_else(|_| self.files_dir.clone());
        files.starts_with(&path)
    }

    fn move_with_info(&self, info_dir: &Path, path: &Path, name: &OsStr) -> Result<(), TrashError> {
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let candidate = info::candidate_name(name, attempt);
            let mut info_name = candidate.clone();
            info_name.push(format!(".{}", TRASHINFO_EXTENSION));
            let info_path = info_dir.join(info_name);

            // Reserve the name through the info file first.
            let mut info_file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&info_path)
            {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(TrashError::Unavailable(format!(
                        "failed to create '{}': {}",
                        info_path.display(),
                        e
                    )));
                }
            };

            let destination = self.files_dir.join(&candidate);
            if fs::symlink_metadata(&destination).is_ok() {
                drop(info_file);
                let _ = fs::remove_file(&info_path);
                continue;
            }

            let record = info::render(path, Local::now());
            if let Err(e) = info_file.write_all(record.as_bytes()) {
                drop(info_file);
                let _ = fs::remove_file(&info_path);
                return Err(TrashError::Unavailable(format!(
                    "failed to write '{}': {}",
                    info_path.display(),
                    e
                )));
            }
            drop(info_file);

            return fs::rename(path, &destination).map_err(|e| {
                let _ = fs::remove_file(&info_path);
                TrashError::from_io(path, e)
            });
        }

        Err(TrashError::Unavailable(format!(
            "no free name for '{}' in the trash",
            Path::new(name).display()
        )))
    }

    fn move_flat(&self, path: &Path, name: &OsStr) -> Result<(), TrashError> {
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let destination = self.files_dir.join(info::candidate_name(name, attempt));
            if fs::symlink_metadata(&destination).is_ok() {
                continue;
            }
            return fs::rename(path, &destination).map_err(|e| TrashError::from_io(path, e));
        }

        Err(TrashError::Unavailable(format!(
            "no free name for '{}' in the trash",
            Path::new(name).display()
        )))
    }
}

impl Trasher for HomeTrash {
    fn trash(&self, path: &Path) -> Result<(), TrashError> {
        // symlink_metadata so dangling links still count as present.
        let metadata = fs::symlink_metadata(path).map_err(|e| TrashError::from_io(path, e))?;

        let name = path
            .file_name()
            .ok_or_else(|| TrashError::Refused(path.to_path_buf()))?;

        if metadata.is_dir() && self.would_swallow_trash(path) {
            return Err(TrashError::Refused(path.to_path_buf()));
        }

        self.ensure_dirs()?;

        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        match &self.info_dir {
            Some(info_dir) => self.move_with_info(info_dir, &absolute, name),
            None => self.move_flat(&absolute, name),
        }
    }
}
