//! Single-file byte-offset patcher.
//!
//! Locates each element's JSX opening tag by scanning raw bytes from its
//! `(line, column)` offset — no AST round-trip, so unrelated whitespace,
//! comments, and formatting are untouched.

use std::collections::HashSet;

use crate::error::{ErrorCode, Result, UicError};
use crate::model::NamedElement;

pub struct FilePatch {
    pub content: String,
    pub insertions: usize,
    pub skipped: usize,
    pub warnings: Vec<String>,
}

struct PendingEdit {
    start: usize,
    end: usize,
    replacement: String,
}

/// Byte offset of the `(line, column)` position within `source`, 1-based on
/// both axes, column counted in chars (not bytes) per line.
fn resolve_tag_offset(source: &str, line: usize, column: usize) -> Option<usize> {
    let mut offset = 0;
    let mut current_line = 1;
    for segment in source.split_inclusive('\n') {
        if current_line == line {
            let (byte_in_line, _) = segment.char_indices().nth(column.saturating_sub(1))?;
            return Some(offset + byte_in_line);
        }
        offset += segment.len();
        current_line += 1;
    }
    None
}

/// Consume the tag name starting right after `<` at `tag_offset`.
fn scan_tag_name_end(source: &str, tag_offset: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut i = tag_offset + 1;
    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_alphanumeric() || matches!(c, b'.' | b'-' | b'_' | b':') {
            i += 1;
        } else {
            break;
        }
    }
    if i > tag_offset + 1 { Some(i) } else { None }
}

/// Find the unquoted, unbraced `>` that closes the opening tag's attribute
/// list, starting the scan right after the tag name.
fn scan_opening_tag_end(source: &str, start: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut i = start;
    let mut brace_depth: i32 = 0;
    let mut in_string: Option<u8> = None;

    while i < bytes.len() {
        let c = bytes[i];
        if let Some(quote) = in_string {
            if c == quote {
                in_string = None;
            }
        } else {
            match c {
                b'"' | b'\'' => in_string = Some(c),
                b'{' => brace_depth += 1,
                b'}' => brace_depth -= 1,
                b'>' if brace_depth == 0 => return Some(i),
                _ => {}
            }
        }
        i += 1;
    }
    None
}

/// Find an existing `data-agent-id="..."` attribute within `[start, end)`,
/// returning the byte range of its value and the value itself.
fn find_existing_agent_id(source: &str, start: usize, end: usize) -> Option<(usize, usize, String)> {
    const NEEDLE: &str = "data-agent-id=\"";
    let region = &source[start..end];
    let rel = region.find(NEEDLE)?;
    let value_start = start + rel + NEEDLE.len();
    let rest = &source[value_start..end];
    let value_end = value_start + rest.find('"')?;
    Some((value_start, value_end, source[value_start..value_end].to_string()))
}

/// Patch one file's source against the elements that belong to it.
///
/// Elements pointing at the same JSX opening tag are an
/// [`ErrorCode::AnnotationFailed`] — a design error, not a recoverable one.
pub fn patch_source(source: &str, elements: &[&NamedElement]) -> Result<FilePatch> {
    let mut used_tag_offsets: HashSet<usize> = HashSet::new();
    let mut edits: Vec<PendingEdit> = Vec::new();
    let mut warnings = Vec::new();
    let mut insertions = 0;
    let mut skipped = 0;

    for element in elements {
        let Some(tag_offset) = resolve_tag_offset(source, element.line, element.column) else {
            warnings.push(format!(
                "ANNOTATION_SKIPPED: {}:{}:{} ({}) — position out of range",
                element.file_path, element.line, element.column, element.agent_id
            ));
            continue;
        };

        if source.as_bytes().get(tag_offset) != Some(&b'<') {
            warnings.push(format!(
                "ANNOTATION_SKIPPED: {}:{}:{} ({}) — no JSX opening tag at that offset",
                element.file_path, element.line, element.column, element.agent_id
            ));
            continue;
        }

        if !used_tag_offsets.insert(tag_offset) {
            return Err(UicError::new(
                ErrorCode::AnnotationFailed,
                "multiple elements resolve to the same JSX opening tag",
            )
            .with_context("filePath", element.file_path.clone())
            .with_context("agentId", element.agent_id.clone()));
        }

        let Some(tag_name_end) = scan_tag_name_end(source, tag_offset) else {
            warnings.push(format!(
                "ANNOTATION_SKIPPED: {}:{}:{} ({}) — malformed tag name",
                element.file_path, element.line, element.column, element.agent_id
            ));
            continue;
        };

        let Some(tag_end) = scan_opening_tag_end(source, tag_name_end) else {
            warnings.push(format!(
                "ANNOTATION_SKIPPED: {}:{}:{} ({}) — unterminated opening tag",
                element.file_path, element.line, element.column, element.agent_id
            ));
            continue;
        };

        match find_existing_agent_id(source, tag_name_end, tag_end) {
            Some((_, _, existing)) if existing == element.agent_id => {
                skipped += 1;
            }
            Some((value_start, value_end, _)) => {
                edits.push(PendingEdit {
                    start: value_start,
                    end: value_end,
                    replacement: element.agent_id.clone(),
                });
                insertions += 1;
            }
            None => {
                edits.push(PendingEdit {
                    start: tag_name_end,
                    end: tag_name_end,
                    replacement: format!(" data-agent-id=\"{}\"", element.agent_id),
                });
                insertions += 1;
            }
        }
    }

    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut content = source.to_string();
    for edit in edits {
        content.replace_range(edit.start..edit.end, &edit.replacement);
    }

    Ok(FilePatch { content, insertions, skipped, warnings })
}
