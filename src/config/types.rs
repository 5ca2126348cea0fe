//! Default values for config fields.

pub fn default_image_extensions() -> Vec<String> {
    vec![
        "jpg".to_string(),
        "jpeg".to_string(),
        "png".to_string(),
        "gif".to_string(),
    ]
}

pub(crate) fn default_bind_address() -> String {
    "localhost:8080".to_string()
}
pub(crate) fn default_quarantine_dir() -> String {
    "to-delete".to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
