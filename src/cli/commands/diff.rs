//! `uic diff <a> <b>`: compare two manifests and classify the changes.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::DiffArgs;
use crate::cli::commands::manifest_io::read_manifest;
use crate::cli::exit_status::ExitStatus;
use crate::core::diff::diff_manifests;
use crate::model::{ChangeCategory, ChangeKind};

fn kind_label(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added => "added",
        ChangeKind::Removed => "removed",
        ChangeKind::Modified => "modified",
    }
}

fn colorize_category(category: ChangeCategory, text: &str) -> String {
    match category {
        ChangeCategory::Breaking => text.red().bold().to_string(),
        ChangeCategory::Additive => text.green().to_string(),
        ChangeCategory::Neutral => text.dimmed().to_string(),
    }
}

pub fn run(args: DiffArgs) -> Result<ExitStatus> {
    let a = read_manifest(&args.a)?;
    let b = read_manifest(&args.b)?;

    let result = diff_manifests(&a, &b);

    if args.json {
        let payload = json!({
            "breaking": result.breaking,
            "summary": {
                "breaking": result.summary.breaking,
                "additive": result.summary.additive,
                "neutral": result.summary.neutral,
            },
            "changes": result.changes,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if result.changes.is_empty() {
        println!("no changes");
    } else {
        for change in &result.changes {
            let line = format!("{:<9} {} [{:?}]", kind_label(change.kind), change.agent_id, change.category);
            println!("{}", colorize_category(change.category, &line));
        }
        println!(
            "{} breaking, {} additive, {} neutral",
            result.summary.breaking, result.summary.additive, result.summary.neutral
        );
    }

    Ok(ExitStatus::from(!result.breaking))
}
