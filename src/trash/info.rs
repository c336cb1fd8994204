//! `.trashinfo` records for the freedesktop.org trash layout.

use chrono::{DateTime, Local};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};
use std::ffi::{OsStr, OsString};
use std::path::Path;

pub const TRASHINFO_EXTENSION: &str = "trashinfo";

/// Local time without offset, as the trash specification requires.
pub const TRASHINFO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render the contents of a `.trashinfo` file for `original`.
pub fn render(original: &Path, deleted_at: DateTime<Local>) -> String {
    format!(
        "[Trash Info]\nPath={}\nDeletionDate={}\n",
        encode_path(original),
        deleted_at.format(TRASHINFO_TIME_FORMAT)
    )
}

/// Bytes escaped in `Path=`: everything except `/` and RFC 3986 unreserved bytes.
const PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a path for the `Path=` key.
pub fn encode_path(path: &Path) -> String {
    percent_encode(path.as_os_str().as_encoded_bytes(), PATH_SET).to_string()
}

/// Candidate name inside the trash for the `attempt`-th try.
///
/// The first attempt keeps the original name; later ones insert a counter
/// before the extension (`report.2.pdf`).
/// Names are handled as `OsStr` so non-UTF-8 bytes survive unchanged.
pub fn candidate_name(original: &OsStr, attempt: u32) -> OsString {
    if attempt <= 1 {
        return original.to_os_string();
    }
    let as_path = Path::new(original);
    match (as_path.file_stem(), as_path.extension()) {
        (Some(stem), Some(extension)) => {
            let mut name = stem.to_os_string();
            name.push(format!(".{}.", attempt));
            name.push(extension);
            name
        }
        _ => {
            let mut name = original.to_os_string();
            name.push(format!(".{}", attempt));
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn render_contains_path_and_date() {
        let when = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let text = render(Path::new("/home/u/Downloads/a b.zip"), when);
        assert_eq!(
            text,
            "[Trash Info]\nPath=/home/u/Downloads/a%20b.zip\nDeletionDate=2024-03-09T07:05:01\n"
        );
    }

    #[test]
    fn encode_path_escapes_reserved_bytes() {
        assert_eq!(encode_path(Path::new("/tmp/plain-name_1.txt")), "/tmp/plain-name_1.txt");
        assert_eq!(encode_path(Path::new("/tmp/100%")), "/tmp/100%25");
        assert_eq!(encode_path(Path::new("/tmp/é")), "/tmp/%C3%A9");
    }

    fn candidate(name: &str, attempt: u32) -> OsString {
        candidate_name(OsStr::new(name), attempt)
    }

    #[test]
    fn candidate_names() {
        assert_eq!(candidate("report.pdf", 1), "report.pdf");
        assert_eq!(candidate("report.pdf", 2), "report.2.pdf");
        assert_eq!(candidate("archive.tar.gz", 3), "archive.tar.3.gz");
        assert_eq!(candidate("folder", 2), "folder.2");
        assert_eq!(candidate(".env", 2), ".env.2");
    }

    #[cfg(unix)]
    #[test]
    fn candidate_names_keep_non_utf8_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9.txt");

        assert_eq!(candidate_name(name, 1), name);
        assert_eq!(
            candidate_name(name, 2).as_bytes(),
            b"caf\xe9.2.txt".as_slice()
        );
    }
}
