//! `uic list`: print elements from a manifest, optionally filtered, or the
//! distinct set of routes/components.

use std::collections::BTreeSet;

use anyhow::Result;

use crate::cli::args::ListArgs;
use crate::cli::commands::manifest_io::read_manifest;
use crate::cli::exit_status::ExitStatus;
use crate::model::NamedElement;
use crate::utils::pad_to;

fn matches(element: &NamedElement, args: &ListArgs) -> bool {
    if let Some(t) = &args.r#type {
        if element.element_type.as_str() != t {
            return false;
        }
    }
    if let Some(route) = &args.route {
        if element.route.as_deref() != Some(route.as_str()) {
            return false;
        }
    }
    if let Some(component) = &args.component {
        if element.component_name.as_deref() != Some(component.as_str()) {
            return false;
        }
    }
    true
}

pub fn run(args: ListArgs) -> Result<ExitStatus> {
    let manifest = read_manifest(&args.manifest)?;

    if args.routes {
        let routes: BTreeSet<&str> = manifest.elements.iter().filter_map(|e| e.route.as_deref()).collect();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&routes)?);
        } else {
            for route in routes {
                println!("{route}");
            }
        }
        return Ok(ExitStatus::Success);
    }

    if args.components {
        let components: BTreeSet<&str> = manifest
            .elements
            .iter()
            .filter_map(|e| e.component_name.as_deref())
            .collect();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&components)?);
        } else {
            for component in components {
                println!("{component}");
            }
        }
        return Ok(ExitStatus::Success);
    }

    let matched: Vec<&NamedElement> = manifest.elements.iter().filter(|e| matches(e, &args)).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else {
        for element in &matched {
            println!(
                "{} {} {} {}",
                pad_to(&element.agent_id, 40),
                pad_to(element.element_type.as_str(), 8),
                pad_to(element.route.as_deref().unwrap_or("-"), 24),
                element.file_path
            );
        }
        println!("{} element(s)", matched.len());
    }

    Ok(ExitStatus::from(true))
}
