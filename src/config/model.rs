//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Startup configuration for gpic.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Server settings
    // =========================================================================
    /// Address tried first when binding the listener (default: "localhost:8080").
    /// If it is taken, the same host is rebound on an OS-assigned port.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Whether to open the served URL in the default browser after binding.
    #[serde(default = "default_true")]
    pub open_browser: bool,

    // =========================================================================
    // Folder settings
    // =========================================================================
    /// Name of the quarantine folder created under the root folder.
    #[serde(default = "default_quarantine_dir")]
    pub quarantine_dir: String,

    /// File extensions treated as images (no leading dots).
    #[serde(default = "default_image_extensions")]
    pub image_extensions: Vec<String>,

    /// Whether extension matching is case-sensitive (`.JPG` is not a `jpg`).
    #[serde(default = "default_true")]
    pub case_sensitive_extensions: bool,

    /// Whether the review page lists images from nested folders too.
    #[serde(default)]
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            open_browser: default_true(),
            quarantine_dir: default_quarantine_dir(),
            image_extensions: default_image_extensions(),
            case_sensitive_extensions: default_true(),
            recursive: false,
        }
    }
}
