//! Shared helpers used across discovery, naming, and annotation.

use std::path::Path;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use unicode_width::UnicodeWidthStr;

/// Current instant as ISO-8601 UTC with a `Z` suffix, per spec §3's
/// `generatedAt` field.
pub fn now_iso8601() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

/// Normalize a filesystem path to a project-relative, forward-slash string.
///
/// Manifests must be stable across platforms, so paths are always recorded
/// with `/` separators regardless of the host OS.
pub fn normalize_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut parts = Vec::new();
    for component in relative.components() {
        if let std::path::Component::Normal(part) = component {
            parts.push(part.to_string_lossy().into_owned());
        }
    }
    parts.join("/")
}

/// Right-pad `text` with spaces to `width` display columns.
///
/// Project file paths may contain non-ASCII characters whose display width
/// differs from their `char` count, so table output in `cli::commands`
/// pads by `unicode_width` rather than relying on `{:<N}` formatting.
pub fn pad_to(text: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(text);
    if display_width >= width {
        return text.to_string();
    }
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width - display_width));
    padded
}
