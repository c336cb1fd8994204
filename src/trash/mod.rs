//! Moving entries into a recoverable trash.
//!
//! A trash operation either removes the entry from its original location or
//! leaves it untouched. Failures are returned as a [`TrashError`] so the sweep
//! can record them and move on; nothing here retries.

mod home;
mod info;

pub use home::HomeTrash;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a single entry could not be trashed.
#[derive(Error, Debug)]
pub enum TrashError {
    /// The entry vanished before it could be moved.
    #[error("'{0}' no longer exists")]
    NotFound(PathBuf),

    #[error("permission denied moving '{0}' to the trash")]
    PermissionDenied(PathBuf),

    /// The entry lives on a different filesystem than the trash.
    #[error("'{0}' is on a different device than the trash")]
    CrossDevice(PathBuf),

    /// The trash directory itself cannot be used.
    #[error("trash is unavailable: {0}")]
    Unavailable(String),

    /// Trashing the entry would move the trash into itself.
    #[error("refusing to trash '{0}': it contains the trash directory")]
    Refused(PathBuf),

    #[error("failed to trash '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TrashError {
    /// Classify an I/O error raised while moving `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TrashError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TrashError::PermissionDenied(path.to_path_buf()),
            _ if is_cross_device(&err) => TrashError::CrossDevice(path.to_path_buf()),
            _ => TrashError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

fn is_cross_device(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices || err.raw_os_error() == Some(18)
}

/// Moves one entry into a recoverable trash.
pub trait Trasher {
    /// Trash `path` whatever its kind. Symlinks are moved as links.
    fn trash(&self, path: &Path) -> Result<(), TrashError>;
}

impl<T: Trasher + ?Sized> Trasher for &T {
    fn trash(&self, path: &Path) -> Result<(), TrashError> {
        (**self).trash(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_classified() {
        let path = Path::new("/tmp/x");

        let err = TrashError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, TrashError::NotFound(_)));

        let err = TrashError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, TrashError::PermissionDenied(_)));

        let err = TrashError::from_io(path, io::Error::from_raw_os_error(18));
        assert!(matches!(err, TrashError::CrossDevice(_)));

        let err = TrashError::from_io(path, io::Error::other("boom"));
        assert!(matches!(err, TrashError::Io { .. }));
    }

    #[test]
    fn error_messages_name_the_entry() {
        let err = TrashError::NotFound(PathBuf::from("/home/u/Downloads/a.zip"));
        assert_eq!(err.to_string(), "'/home/u/Downloads/a.zip' no longer exists");
    }
}
