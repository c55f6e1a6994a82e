//! Storage filename generation.
//!
//! Centralized here so every backend names files the same way: a random
//! UUID v4 plus the sanitized extension of the original filename. The UUID
//! guarantees per-request uniqueness without any cross-request coordination;
//! the rest of the client-supplied name is discarded entirely.

use uuid::Uuid;

const MAX_EXTENSION_LENGTH: usize = 16;

/// Generate a storage-unique filename for an upload.
pub fn generate_filename(original_filename: &str) -> String {
    let file_uuid = Uuid::new_v4();
    match sanitized_extension(original_filename) {
        Some(ext) => format!("{}.{}", file_uuid, ext),
        None => file_uuid.to_string(),
    }
}

/// Extract a safe, lowercased extension from the client filename.
/// Anything non-alphanumeric or overlong is dropped rather than escaped.
fn sanitized_extension(filename: &str) -> Option<String> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > MAX_EXTENSION_LENGTH {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_sanitized_extension() {
        let name = generate_filename("Photo.JPG");
        assert!(name.ends_with(".jpg"));
        assert!(!name.contains("Photo"));
    }

    #[test]
    fn distinct_per_call() {
        let a = generate_filename("a.txt");
        let b = generate_filename("a.txt");
        assert_ne!(a, b);
    }

    #[test]
    fn traversal_input_is_inert() {
        let name = generate_filename("../../etc/passwd");
        assert!(!name.contains(".."));
        assert!(!name.contains('/'));
        assert!(!name.contains("passwd"));
    }

    #[test]
    fn hostile_extension_is_dropped() {
        let name = generate_filename("x.t\u{0000}xt");
        assert!(!name.contains('.'));

        let name = generate_filename("noextension");
        assert!(!name.contains('.'));

        let name = generate_filename(".hidden");
        assert!(!name.contains('.'));
    }

    #[test]
    fn windows_separators_are_stripped() {
        let name = generate_filename("..\\..\\boot.ini");
        assert!(name.ends_with(".ini"));
        assert!(!name.contains('\\'));
        assert!(!name.contains("boot"));
    }
}
