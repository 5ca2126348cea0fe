//! Safe relocation of rejected candidates.
//!
//! Every candidate that is not a survivor is moved from the root folder into
//! the quarantine folder under the same file name.
//!
//! # Failure semantics
//!
//! - The quarantine folder is created (if missing) before any move
//! - Candidates are processed in submission order
//! - The first failed move aborts the batch and is returned as the error
//! - Moves that completed before the failure are NOT rolled back


use crate::context::FolderContext;
use crate::error::{GpicError, Result};
use crate::fs::{is_plain_file_name, move_file};
use crate::survivors::Resolution;
use std::fs;
use tracing::{debug, error, info};

/// What a completed relocation did, in candidate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocationReport {
    /// Candidates moved into the quarantine folder.
    pub moved: Vec<String>,

    /// Candidates left in place because they were survivors.
    pub skipped: Vec<String>,
}

/// Move every non-surviving candidate in `resolution` into the quarantine folder.
pub fn relocate_rejected(ctx: &FolderContext, resolution: &Resolution) -> Result<RelocationReport> {
    ensure_quarantine_dir(ctx)?;

    let mut report = RelocationReport::default();

    for candidate in &resolution.candidates {
        if resolution.is_survivor(candidate) {
            debug!("keeping survivor {}", candidate);
            report.skipped.push(candidate.clone());
            continue;
        }

        if let Err(e) = relocate_one(ctx, candidate) {
            error!(
                "relocation of {} candidate(s) in '{}' stopped at '{}' after {} move(s): {}",
                resolution.candidates.len(),
                ctx.root.display(),
                candidate,
                report.moved.len(),
                e
            );
            return Err(e);
        }

        info!(
            "moved {} -> {}",
            candidate,
            ctx.quarantined_path(candidate).display()
        );
        report.moved.push(candidate.clone());
    }

    Ok(report)
}

/// Create the quarantine folder if it does not exist yet.
pub fn ensure_quarantine_dir(ctx: &FolderContext) -> Result<()> {
    fs::create_dir_all(&ctx.quarantine_dir).map_err(|e| {
        GpicError::RelocationError(format!(
            "failed to create quarantine folder '{}': {}",
            ctx.quarantine_dir.display(),
            e
        ))
    })
}

fn relocate_one(ctx: &FolderContext, file_name: &str) -> Result<()> {
    if !is_plain_file_name(file_name) {
        return Err(GpicError::RelocationError(format!(
            "refusing to move '{}': not a plain file name",
            file_name
        )));
    }

    move_file(ctx.image_path(file_name), ctx.quarantined_path(file_name))
}
