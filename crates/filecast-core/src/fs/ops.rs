//! Classification and directory reading operations.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{EntryInfo, EntryType};

/// Classifies the entry at `path`.
///
/// The path is opened and then stat'd, so symlinks are followed and an
/// entry the process cannot open is an error even when its metadata is
/// visible. Directories are reported as [`EntryType::Directory`] whatever
/// their name; files are categorised via [`EntryType::from_extension`] on
/// the suffix after the last `.` of the file name (so `.mp4` is a video).
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::PermissionDenied`] — the path cannot be opened.
/// - [`CoreError::Io`] — any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use filecast_core::{classify, EntryType};
/// use std::path::Path;
///
/// assert_eq!(classify(Path::new("movies/clip.mp4")).unwrap(), EntryType::Video);
/// ```
pub fn classify(path: &Path) -> CoreResult<EntryType> {
    let file = std::fs::File::open(path).map_err(|e| CoreError::from_io(path, e))?;
    let metadata = file.metadata().map_err(|e| CoreError::from_io(path, e))?;
    if metadata.is_dir() {
        return Ok(EntryType::Directory);
    }

    let name = path.file_name().map(|n| n.to_string_lossy());
    let ext = name
        .as_deref()
        .and_then(|n| n.rsplit_once('.'))
        .map(|(_, ext)| ext);
    Ok(EntryType::from_extension(ext))
}

/// Lists the visible immediate children of a directory.
///
/// Names that are empty or start with `.` are skipped. The returned entries
/// are **unsorted**; they follow the order the OS hands them out.
///
/// A single unreadable child fails the whole listing.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
pub fn list_directory(path: &Path) -> CoreResult<Vec<EntryInfo>> {
    let metadata = std::fs::metadata(path).map_err(|e| CoreError::from_io(path, e))?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| CoreError::from_io(path, e))?;
        let file_name = dir_entry.file_name();
        let name = file_name.to_string_lossy();
        if name.is_empty() || name.starts_with('.') {
            continue;
        }

        let is_dir = dir_entry
            .file_type()
            .map(|ft| ft.is_dir())
            .unwrap_or(false);
        let entry_type = if is_dir {
            EntryType::Directory
        } else {
            classify(&dir_entry.path()).inspect_err(|e| {
                tracing::warn!("failed to classify {}: {}", name, e);
            })?
        };

        entries.push(EntryInfo::new(entry_type, &name));
    }

    Ok(entries)
}

/// Returns the last `/`-delimited segment of `path`.
///
/// A path without `/` is returned unchanged; a trailing `/` yields `""`.
pub fn basename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}
