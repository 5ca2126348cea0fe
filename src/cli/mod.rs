//! CLI argument parsing for gpic.
//!
//! Uses clap derive macros. The only required argument is the folder to
//! triage; clap prints usage and exits when it is missing or repeated.

use clap::Parser;
use std::path::PathBuf;

/// gpic: triage visually similar photos in a folder from your browser.
///
/// Serves the folder's images on a local web page. Pick the picture to keep
/// from each group; the others are moved into a `to-delete` folder.
#[derive(Parser, Debug)]
#[command(name = "gpic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder containing the images to review.
    pub folder: PathBuf,

    /// YAML config file (bind address, quarantine folder, extensions).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also list images in nested folders.
    ///
    /// Nested images are listed by base name only: their thumbnails do not
    /// load and they cannot be moved, since both look for the name directly
    /// under FOLDER.
    #[arg(long)]
    pub recursive: bool,

    /// Do not open the browser after the server starts.
    #[arg(long)]
    pub no_open: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
