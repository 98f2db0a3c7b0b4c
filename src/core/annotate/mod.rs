//! Annotation: writes agent ids back into source as `data-agent-id`
//! attributes, producing a unified diff per touched file.

mod patch;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::error::{ErrorCode, Result, UicError};
use crate::model::{NamedElement, Patch};

pub struct AnnotateOptions {
    pub dry_run: bool,
    pub write: bool,
    pub backup_dir: PathBuf,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            dry_run: true,
            write: false,
            backup_dir: PathBuf::from(".uic-backup"),
        }
    }
}

pub struct AnnotateOutcome {
    pub patches: Vec<Patch>,
    pub total_applied: usize,
    pub total_skipped: usize,
    pub warnings: Vec<String>,
    pub backup_dir: Option<PathBuf>,
}

fn unified_diff(relative_path: &str, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{relative_path}"), &format!("b/{relative_path}"))
        .to_string()
}

fn read_error(relative: &str, err: std::io::Error) -> UicError {
    UicError::new(ErrorCode::FileReadError, format!("FILE_READ_ERROR: {err}")).with_context("file", relative)
}

fn write_error(relative: &str, err: std::io::Error) -> UicError {
    UicError::new(ErrorCode::FileWriteError, format!("FILE_WRITE_ERROR: {err}")).with_context("file", relative)
}

/// Annotate every file that owns at least one of `elements`.
///
/// Write policy: `dryRun` always wins over `write`, even if both are set —
/// this lets callers pass both and be guaranteed no filesystem mutation.
/// When a write does happen, every touched file is backed up in a pre-pass
/// before any file is overwritten, and each overwrite is atomic (write to a
/// temp sibling, then rename).
pub fn annotate(root: &Path, elements: &[NamedElement], options: &AnnotateOptions) -> Result<AnnotateOutcome> {
    let mut by_file: BTreeMap<&str, Vec<&NamedElement>> = BTreeMap::new();
    for element in elements {
        by_file.entry(element.file_path.as_str()).or_default().push(element);
    }

    let mut patches = Vec::new();
    let mut total_applied = 0;
    let mut total_skipped = 0;
    let mut warnings = Vec::new();
    let mut pending_writes: Vec<(PathBuf, String, String)> = Vec::new();

    for (relative, file_elements) in by_file {
        let abs_path = root.join(relative);
        let source = fs::read_to_string(&abs_path).map_err(|e| read_error(relative, e))?;

        let result = patch::patch_source(&source, &file_elements)?;
        warnings.extend(result.warnings);
        total_applied += result.insertions;
        total_skipped += result.skipped;

        if result.content == source {
            continue;
        }

        let diff = unified_diff(relative, &source, &result.content);
        patches.push(Patch {
            file_path: relative.to_string(),
            diff,
            insertions: result.insertions,
        });

        if options.write && !options.dry_run {
            pending_writes.push((abs_path, relative.to_string(), result.content));
        }
    }

    let backup_dir = if !pending_writes.is_empty() {
        fs::create_dir_all(&options.backup_dir)
            .map_err(|e| write_error(&options.backup_dir.display().to_string(), e))?;

        for (abs_path, relative, _) in &pending_writes {
            let backup_path = options.backup_dir.join(relative);
            if let Some(parent) = backup_path.parent() {
                fs::create_dir_all(parent).map_err(|e| write_error(relative, e))?;
            }
            fs::copy(abs_path, &backup_path).map_err(|e| write_error(relative, e))?;
        }

        Some(options.backup_dir.clone())
    } else {
        None
    };

    for (abs_path, relative, content) in pending_writes {
        let tmp_path = abs_path.with_extension("uic-tmp");
        fs::write(&tmp_path, &content).map_err(|e| write_error(&relative, e))?;
        fs::rename(&tmp_path, &abs_path).map_err(|e| write_error(&relative, e))?;
    }

    Ok(AnnotateOutcome {
        patches,
        total_applied,
        total_skipped,
        warnings,
        backup_dir,
    })
}
