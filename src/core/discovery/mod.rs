//! Element discovery: scan a project tree, parse each candidate file, and
//! collect the interactive elements it contains.

mod route;
mod scanner;
mod visitor;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use swc_common::SourceMap;
use swc_ecma_visit::Visit;

use crate::config::Config;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::error::{ErrorCode, Result, UicError};
use crate::model::RawElement;
use crate::utils::normalize_path;

pub use route::derive_app_router_route;
pub use scanner::scan_files;

pub struct DiscoveryResult {
    pub elements: Vec<RawElement>,
    pub warnings: Vec<String>,
    pub files_scanned: usize,
}

/// Parse one file and extract its interactive elements.
///
/// Returns a warning string (not a fatal error) on a read or parse failure;
/// one bad file never aborts a scan of the rest of the tree.
fn analyze_file(root: &Path, path: &Path, config: &Config) -> Result<Vec<RawElement>> {
    let relative = normalize_path(root, path);

    let source = fs::read_to_string(path).map_err(|e| {
        UicError::new(ErrorCode::FileReadError, format!("FILE_READ_ERROR: {e}"))
            .with_context("file", relative.clone())
    })?;

    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_jsx_source(source, &relative, source_map).map_err(|e| {
        UicError::new(ErrorCode::ScanFailed, format!("PARSE_ERROR: {e}")).with_context("file", relative.clone())
    })?;

    let route = if config.framework == "app-router" {
        derive_app_router_route(root, path)
    } else {
        None
    };

    let mut visitor = visitor::DiscoveryVisitor::new(relative, &parsed.source_map, &config.component_map, route);
    visitor.visit_module(&parsed.module);
    Ok(visitor.elements)
}

/// Scan `root` for interactive elements per `config`.
///
/// Per-file parse/read failures are demoted to warning strings in
/// `DiscoveryResult::warnings`; only a structurally invalid root (not a
/// directory) is fatal.
pub fn discover(root: &Path, config: &Config) -> Result<DiscoveryResult> {
    if !root.is_dir() {
        return Err(UicError::new(ErrorCode::ScanFailed, format!("{} is not a directory", root.display()))
            .with_context("root", root.display().to_string()));
    }

    let excludes = config.effective_excludes();
    let scan = scan_files(root, &config.includes, &excludes, config.max_depth);

    let outcomes: Vec<Result<Vec<RawElement>>> = scan
        .files
        .par_iter()
        .map(|path| analyze_file(root, path, config))
        .collect();

    let mut elements = Vec::new();
    let mut warnings = Vec::new();

    if scan.skipped > 0 {
        warnings.push(format!(
            "WALK_ERROR: {} directory entr(y/ies) under {} could not be read",
            scan.skipped,
            root.display()
        ));
    }

    for outcome in outcomes {
        match outcome {
            Ok(found) => elements.extend(found),
            Err(err) => warnings.push(err.message),
        }
    }

    elements.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    Ok(DiscoveryResult {
        elements,
        warnings,
        files_scanned: scan.files.len(),
    })
}
