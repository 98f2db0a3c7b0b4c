//! `uic annotate`: write agent ids back into source as `data-agent-id`
//! attributes, defaulting to a dry run.

use anyhow::Result;
use serde_json::json;

use crate::cli::args::AnnotateArgs;
use crate::cli::commands::manifest_io::read_manifest;
use crate::cli::exit_status::ExitStatus;
use crate::cli::log;
use crate::core::annotate::{AnnotateOptions, annotate};

pub fn run(args: AnnotateArgs) -> Result<ExitStatus> {
    let manifest = read_manifest(&args.manifest)?;

    let options = AnnotateOptions {
        dry_run: args.effective_dry_run(),
        write: args.write,
        backup_dir: args.backup_dir.clone(),
    };

    let outcome = annotate(&args.root, &manifest.elements, &options)?;

    for warning in &outcome.warnings {
        log::warn(warning);
    }

    if args.json {
        let payload = json!({
            "dryRun": options.dry_run,
            "totalApplied": outcome.total_applied,
            "totalSkipped": outcome.total_skipped,
            "patches": outcome.patches.iter().map(|p| json!({
                "filePath": p.file_path,
                "insertions": p.insertions,
            })).collect::<Vec<_>>(),
            "backupDir": outcome.backup_dir.as_ref().map(|p| p.display().to_string()),
            "warnings": outcome.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if options.dry_run {
        for patch in &outcome.patches {
            println!("{}", patch.diff);
        }
        println!(
            "{} file(s) would change, {} insertion(s), {} already up to date",
            outcome.patches.len(),
            outcome.total_applied,
            outcome.total_skipped
        );
    } else {
        println!(
            "applied {} insertion(s) across {} file(s), {} already up to date",
            outcome.total_applied,
            outcome.patches.len(),
            outcome.total_skipped
        );
        if let Some(backup_dir) = &outcome.backup_dir {
            println!("backups written to {}", backup_dir.display());
        }
    }

    Ok(ExitStatus::Success)
}
