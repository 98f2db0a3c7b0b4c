//! `uic name <manifestIn>`: re-run just the naming stage over a manifest's
//! elements, producing a fresh manifest with regenerated agent ids.
//!
//! This is the naming stage decoupled from discovery — useful when the
//! naming rules change and existing scan output should be re-derived
//! without re-parsing the whole project tree. The input is the same
//! canonical manifest format `scan` writes; any `agentId` values already
//! present are discarded and recomputed from the underlying element data.

use anyhow::Result;

use crate::cli::args::NameArgs;
use crate::cli::commands::manifest_io::{read_manifest, write_manifest_output};
use crate::cli::exit_status::ExitStatus;
use crate::core::naming::assign_agent_ids;
use crate::model::{Manifest, NamedElement, RawElement};

fn to_raw(named: NamedElement) -> RawElement {
    RawElement {
        element_type: named.element_type,
        file_path: named.file_path,
        line: named.line,
        column: named.column,
        component_name: named.component_name,
        route: named.route,
        label: named.label,
        handler: named.handler,
        attributes: named.attributes,
        conditional: named.conditional,
        dynamic: named.dynamic,
    }
}

pub fn run(args: NameArgs) -> Result<ExitStatus> {
    let input = read_manifest(&args.manifest_in)?;

    let raw: Vec<RawElement> = input.elements.into_iter().map(to_raw).collect();
    let named = assign_agent_ids(raw);

    let manifest = Manifest::new(input.generated_at, input.metadata, named);

    write_manifest_output(&manifest, args.output.as_deref(), false)?;

    Ok(ExitStatus::Success)
}
