use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::utils::normalize_path;

pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped: usize,
}

/// Walk `root`, keeping files whose project-relative path matches at least
/// one include glob and no exclude glob.
pub fn scan_files(root: &Path, includes: &[String], excludes: &[String], max_depth: Option<usize>) -> ScanResult {
    let include_patterns: Vec<Pattern> = includes.iter().filter_map(|p| Pattern::new(p).ok()).collect();
    let exclude_patterns: Vec<Pattern> = excludes.iter().filter_map(|p| Pattern::new(p).ok()).collect();

    let mut walker = WalkDir::new(root);
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = Vec::new();
    let mut skipped = 0;

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = normalize_path(root, entry.path());

        if exclude_patterns.iter().any(|p| p.matches(&relative)) {
            continue;
        }

        if include_patterns.iter().any(|p| p.matches(&relative)) {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    ScanResult { files, skipped }
}
