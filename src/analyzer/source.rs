use std::path::Path;

/// Read a source file as text.
///
/// Invalid UTF-8 is decoded lossily. Returns `None` when the file cannot be
/// read at all.
#[must_use]
pub fn read_source(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Skipping unreadable file {}: {e}", path.display());
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!("Lossy decode of non-UTF-8 file {}", path.display());
            Some(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
