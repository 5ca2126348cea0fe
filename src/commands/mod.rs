//! Command implementations for gpic.
//!
//! gpic has a single command: serve a folder for review.

mod serve;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    serve::cmd_serve(cli)
}
