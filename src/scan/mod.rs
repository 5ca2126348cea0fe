//! Folder scanning for image files.
//!
//! An image is recognised only by its file name: the text after the last `.`
//! must be one of the configured extensions. File contents are never read.
//! Results are re-derived on every call; nothing is cached.


use crate::config::Config;
use crate::context::FolderContext;
use crate::error::{GpicError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::fs;
use tracing::debug;
use walkdir::WalkDir;

/// Compiled extension whitelist.
///
/// Built once at startup from the config and shared by every scan.
#[derive(Debug, Clone)]
pub struct ImageMatcher {
    globs: GlobSet,
}

impl ImageMatcher {
    /// Compile the whitelist in `config` into `*.ext` globs.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for ext in &config.image_extensions {
            let pattern = format!("*.{}", globset::escape(ext));
            let glob = GlobBuilder::new(&pattern)
                .case_insensitive(!config.case_sensitive_extensions)
                .literal_separator(true)
                .build()
                .map_err(|e| {
                    GpicError::UserError(format!(
                        "invalid image extension '{}': {}",
                        ext, e
                    ))
                })?;
            builder.add(glob);
        }

        let globs = builder.build().map_err(|e| {
            GpicError::UserError(format!("failed to compile image extensions: {}", e))
        })?;

        Ok(Self { globs })
    }

    /// Whether `file_name` has a whitelisted extension.
    pub fn is_image_file(&self, file_name: &str) -> bool {
        self.globs.is_match(file_name)
    }
}

/// List image file names in the root folder.
///
/// Non-recursive scans return the names of files directly under the root.
/// Recursive scans return the base name of every image at any depth, skipping
/// the quarantine folder. Order follows directory enumeration and is not sorted.
pub fn scan_images(
    ctx: &FolderContext,
    matcher: &ImageMatcher,
    recursive: bool,
) -> Result<Vec<String>> {
    if recursive {
        scan_recursive(ctx, matcher)
    } else {
        scan_flat(ctx, matcher)
    }
}

fn scan_flat(ctx: &FolderContext, matcher: &ImageMatcher) -> Result<Vec<String>> {
    let entries = fs::read_dir(&ctx.root).map_err(|e| {
        GpicError::ScanError(format!("failed to read '{}': {}", ctx.root.display(), e))
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            GpicError::ScanError(format!("failed to read '{}': {}", ctx.root.display(), e))
        })?;

        let file_type = entry.file_type().map_err(|e| {
            GpicError::ScanError(format!(
                "failed to stat '{}': {}",
                entry.path().display(),
                e
            ))
        })?;
        if file_type.is_dir() {
            continue;
        }

        let Ok(name) = entry.file_name().into_string() else {
            debug!("skipping non-UTF-8 file name: {}", entry.path().display());
            continue;
        };
        if matcher.is_image_file(&name) {
            images.push(name);
        }
    }

    Ok(images)
}

fn scan_recursive(ctx: &FolderContext, matcher: &ImageMatcher) -> Result<Vec<String>> {
    let walker = WalkDir::new(&ctx.root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| entry.path() != ctx.quarantine_dir);

    let mut images = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            GpicError::ScanError(format!("failed to walk '{}': {}", ctx.root.display(), e))
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!("skipping non-UTF-8 file name: {}", entry.path().display());
            continue;
        };
        if matcher.is_image_file(name) {
            images.push(name.to_string());
        }
    }

    Ok(images)
}
