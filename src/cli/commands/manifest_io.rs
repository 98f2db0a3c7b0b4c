//! Manifest file I/O shared by every command that reads or writes a
//! manifest: loading validates schema version and agent-id uniqueness up
//! front so later stages never see a malformed manifest.

use std::collections::HashSet;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use crate::error::{ErrorCode, Result, UicError};
use crate::model::{Manifest, SCHEMA_VERSION};

/// Load a manifest from disk, validating schema version and agent-id
/// uniqueness. Both are fatal-to-the-command failures per spec §7.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        return Err(UicError::new(ErrorCode::ManifestNotFound, format!("manifest not found: {}", path.display()))
            .with_context("path", path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        UicError::new(ErrorCode::ManifestNotFound, format!("failed to read manifest: {e}"))
            .with_context("path", path.display().to_string())
    })?;

    let manifest: Manifest = serde_json::from_str(&content).map_err(|e| {
        UicError::new(ErrorCode::ManifestInvalid, format!("failed to parse manifest: {e}"))
            .with_context("path", path.display().to_string())
    })?;

    if manifest.schema_version != SCHEMA_VERSION {
        return Err(UicError::new(
            ErrorCode::ManifestVersionUnsupported,
            format!("unsupported schema version: {}", manifest.schema_version),
        )
        .with_context("path", path.display().to_string())
        .with_context("schemaVersion", manifest.schema_version.clone()));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for element in &manifest.elements {
        if !seen.insert(element.agent_id.as_str()) {
            return Err(UicError::new(
                ErrorCode::DuplicateAgentId,
                format!("duplicate agentId in manifest: {}", element.agent_id),
            )
            .with_context("path", path.display().to_string())
            .with_context("agentId", element.agent_id.clone()));
        }
    }

    Ok(manifest)
}

/// Write a manifest to `output` if given, else to stdout. `force_stdout`
/// (set by `--json`) always prints to stdout in addition to any file write,
/// matching spec §6's "to `-o` file or stdout with `--json`".
pub fn write_manifest_output(manifest: &Manifest, output: Option<&Path>, force_stdout: bool) -> Result<()> {
    let json = manifest.to_json_string().map_err(|e| {
        UicError::new(ErrorCode::Unknown, format!("failed to serialize manifest: {e}"))
    })?;

    match output {
        Some(path) => {
            fs::write(path, &json).map_err(|e| {
                UicError::new(ErrorCode::FileWriteError, format!("FILE_WRITE_ERROR: {e}"))
                    .with_context("path", path.display().to_string())
            })?;
            if force_stdout {
                print!("{json}");
                std::io::stdout().flush().ok();
            }
        }
        None => {
            print!("{json}");
            std::io::stdout().flush().ok();
        }
    }

    Ok(())
}
