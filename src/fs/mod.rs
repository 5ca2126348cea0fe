//! Filesystem utilities for gpic.
//!
//! Relocation never deletes anything: files are only moved, and a move never
//! replaces a file that already exists at the destination.

mod move_file;

pub use move_file::{is_plain_file_name, move_file};
