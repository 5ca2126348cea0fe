//! Opening the served URL in the user's browser.

use crate::error::{GpicError, Result};
use std::process::Command;

/// Platform command that opens `url` with the default handler.
pub fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "start", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Launch the browser without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    opener_command(url).spawn().map_err(|e| {
        GpicError::UserError(format!("failed to open '{}' in a browser: {}", url, e))
    })?;
    Ok(())
}
