//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{GpicError, Result};
use std::path::{Component, Path};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(GpicError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GpicError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GpicError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `bind_address` must be non-empty
    /// - `quarantine_dir` must be a single plain folder name
    /// - `image_extensions` must be non-empty, entries non-empty without leading dots
    pub fn validate(&self) -> Result<()> {
        if self.bind_address.trim().is_empty() {
            return Err(GpicError::UserError(
                "config validation failed: bind_address must not be empty".to_string(),
            ));
        }

        let mut components = Path::new(&self.quarantine_dir).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal {
            return Err(GpicError::UserError(format!(
                "config validation failed: quarantine_dir must be a single folder name (found '{}')",
                self.quarantine_dir
            )));
        }

        if self.image_extensions.is_empty() {
            return Err(GpicError::UserError(
                "config validation failed: image_extensions must list at least one extension"
                    .to_string(),
            ));
        }
        for ext in &self.image_extensions {
            if ext.is_empty() {
                return Err(GpicError::UserError(
                    "config validation failed: image_extensions entries must be non-empty"
                        .to_string(),
                ));
            }
            if ext.starts_with('.') {
                return Err(GpicError::UserError(format!(
                    "config validation failed: image_extensions entries must not have leading dots (found '{}'). Use '{}' instead.",
                    ext,
                    ext.trim_start_matches('.')
                )));
            }
        }

        Ok(())
    }

    /// Address used when the configured one is taken: same host, port 0.
    pub fn fallback_address(&self) -> String {
        match self.bind_address.rsplit_once(':') {
            Some((host, _port)) if !host.is_empty() => format!("{}:0", host),
            _ => "localhost:0".to_string(),
        }
    }
}
