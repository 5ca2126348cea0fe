//! Root folder context resolution for gpic.
//!
//! Every request works against the same resolved folder paths: the absolute
//! root folder given on the command line and the quarantine folder beneath it.
//! Resolution happens once at startup so handlers never re-derive them.

use crate::config::Config;
use crate::error::{GpicError, Result};
use std::path::{Path, PathBuf};

/// Resolved paths for the folder being triaged. All paths are absolute.
#[derive(Debug, Clone)]
pub struct FolderContext {
    /// Absolute path to the root folder whose images are reviewed.
    pub root: PathBuf,

    /// Absolute path to the quarantine folder (default: `{root}/to-delete/`).
    /// Not created until the first relocation.
    pub quarantine_dir: PathBuf,
}

impl FolderContext {
    /// Resolve the folder context for `root` using the configured quarantine name.
    ///
    /// # Returns
    ///
    /// * `Ok(FolderContext)` - Successfully resolved context
    /// * `Err(GpicError::UserError)` - If `root` does not exist or is not a directory
    pub fn resolve<P: AsRef<Path>>(root: P, config: &Config) -> Result<Self> {
        let root = root.as_ref();

        let root = std::path::absolute(root).map_err(|e| {
            GpicError::UserError(format!(
                "failed to resolve folder '{}': {}",
                root.display(),
                e
            ))
        })?;

        if !root.is_dir() {
            return Err(GpicError::UserError(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }

        let quarantine_dir = root.join(&config.quarantine_dir);

        Ok(Self {
            root,
            quarantine_dir,
        })
    }

    /// Full path of a file directly under the root folder.
    pub fn image_path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Full path a file ends up at once it is quarantined.
    pub fn quarantined_path(&self, file_name: &str) -> PathBuf {
        self.quarantine_dir.join(file_name)
    }
}
