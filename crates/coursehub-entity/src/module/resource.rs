//! Optional resource references (video, PDF, practice sheet, routine).

/// Placeholder stored by older documents for "no link".
pub const ABSENT_SENTINEL: &str = "#";

/// Whether a free-form resource reference points at something.
///
/// Empty strings, whitespace, and the `"#"` sentinel all mean the
/// resource is absent and must be shown as "not available".
pub fn is_available(reference: &str) -> bool {
    let trimmed = reference.trim();
    !trimmed.is_empty() && trimmed != ABSENT_SENTINEL
}

/// Return the reference if available, otherwise `None`.
pub fn available(reference: &str) -> Option<&str> {
    is_available(reference).then(|| reference.trim())
}
