//! File move helpers.
//!
//! Quarantining an image is a `rename(2)` into a sibling folder, which is
//! atomic on POSIX filesystems. Some mounts surface `EXDEV` ("Invalid
//! cross-device link") even when paths look local; for those we fall back to
//! copy + delete.

use crate::error::{GpicError, Result};
use std::fs;
use std::io;
use std::path::{Component, Path};

/// Move a single file from `source` to `destination`.
///
/// - Refuses to overwrite an existing `destination`.
/// - Tries `rename()` first (atomic when possible).
/// - Falls back to copy + delete of `source` on EXDEV.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    // symlink_metadata so a dangling link at the destination also counts.
    if fs::symlink_metadata(destination).is_ok() {
        return Err(GpicError::RelocationError(format!(
            "refusing to move '{}': '{}' already exists",
            source.display(),
            destination.display()
        )));
    }

    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device_rename(&e) => move_file_cross_device(source, destination, e),
        Err(e) => Err(GpicError::RelocationError(format!(
            "failed to move '{}' to '{}': {}",
            source.display(),
            destination.display(),
            e
        ))),
    }
}

fn move_file_cross_device(
    source: &Path,
    destination: &Path,
    original_error: io::Error,
) -> Result<()> {
    fs::copy(source, destination).map_err(|e| {
        GpicError::RelocationError(format!(
            "failed to copy '{}' to '{}' for cross-device move: {} (original rename error: {})",
            source.display(),
            destination.display(),
            e,
            original_error
        ))
    })?;

    fs::remove_file(source).map_err(|e| {
        GpicError::RelocationError(format!(
            "copied '{}' across devices but failed to delete the original: {}",
            source.display(),
            e
        ))
    })?;

    Ok(())
}

fn is_cross_device_rename(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices || err.raw_os_error() == Some(18)
}

/// Whether `name` is a single plain file name (no separators, not `.` or `..`).
pub fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
