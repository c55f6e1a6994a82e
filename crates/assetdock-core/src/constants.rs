//! Application-wide constants.

/// Path segment all asset records reference their stored bytes under.
/// An asset's `file_path` is always `{STORAGE_ROOT}/{generated-filename}`.
pub const STORAGE_ROOT: &str = "uploads";
