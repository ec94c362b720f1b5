use std::path::Path;

pub const UPLOAD_ROUTE_PREFIX: &str = "/uploads";

/// Extension of the client-supplied filename, dot included, e.g. `.png`.
pub fn original_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
}

/// Extension guessed from the file's leading bytes.
pub fn sniffed_extension(head: &[u8]) -> Option<String> {
    infer::get(head).map(|kind| format!(".{}", kind.extension()))
}

/// `<millis><ext>` for the first attempt, `<millis>-<n><ext>` after a collision.
pub fn stored_file_name(millis: i64, attempt: u32, extension: &str) -> String {
    if attempt == 0 {
        format!("{}{}", millis, extension)
    } else {
        format!("{}-{}{}", millis, attempt, extension)
    }
}

pub fn public_path(stored_name: &str) -> String {
    format!("{}/{}", UPLOAD_ROUTE_PREFIX, stored_name)
}

/// A name that resolves to a file directly inside the upload directory.
pub fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

pub fn content_type(bytes: &[u8]) -> &'static str {
    infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream")
}
