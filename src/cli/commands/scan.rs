//! `uic scan <dir>`: run discovery then naming over a project tree and
//! write the resulting manifest.

use anyhow::Result;

use crate::cli::args::ScanArgs;
use crate::cli::commands::manifest_io::write_manifest_output;
use crate::cli::exit_status::ExitStatus;
use crate::cli::log;
use crate::config::load_config;
use crate::core::discovery::discover;
use crate::core::naming::assign_agent_ids;
use crate::model::{Manifest, ManifestMetadata};
use crate::utils::now_iso8601;

pub fn run(args: ScanArgs) -> Result<ExitStatus> {
    let mut loaded = load_config(&args.dir)?;
    if let Some(framework) = &args.framework {
        loaded.config.framework = framework.clone();
    }

    let result = discover(&args.dir, &loaded.config)?;

    for warning in &result.warnings {
        log::warn(warning);
    }

    let elements = assign_agent_ids(result.elements);

    let metadata = ManifestMetadata {
        framework: loaded.config.framework.clone(),
        project_root: args.dir.display().to_string(),
        files_scanned: result.files_scanned,
        elements_discovered: elements.len(),
        warnings: result.warnings,
    };

    let manifest = Manifest::new(now_iso8601(), metadata, elements);

    write_manifest_output(&manifest, args.output.as_deref(), args.json)?;

    Ok(ExitStatus::Success)
}
