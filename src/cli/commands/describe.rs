//! `uic describe <agentId>`: print one element's full record.

use anyhow::Result;

use crate::cli::args::DescribeArgs;
use crate::cli::commands::manifest_io::read_manifest;
use crate::cli::exit_status::ExitStatus;
use crate::error::{ErrorCode, UicError};

pub fn run(args: DescribeArgs) -> Result<ExitStatus> {
    let manifest = read_manifest(&args.manifest)?;

    let Some(element) = manifest.elements.iter().find(|e| e.agent_id == args.agent_id) else {
        if args.json {
            let err = UicError::new(ErrorCode::Unknown, format!("no element with agentId {}", args.agent_id))
                .with_context("agentId", args.agent_id.clone());
            println!("{}", serde_json::to_string_pretty(&err.to_json())?);
        } else {
            eprintln!("no element with agentId {}", args.agent_id);
        }
        return Ok(ExitStatus::Failure);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(element)?);
    } else {
        println!("agentId:       {}", element.agent_id);
        println!("type:          {}", element.element_type.as_str());
        println!("filePath:      {}", element.file_path);
        println!("line:column:   {}:{}", element.line, element.column);
        println!("componentName: {}", element.component_name.as_deref().unwrap_or("-"));
        println!("route:         {}", element.route.as_deref().unwrap_or("-"));
        println!("label:         {}", element.label.as_deref().unwrap_or("-"));
        println!("handler:       {}", element.handler.as_deref().unwrap_or("-"));
        println!("conditional:   {}", element.conditional);
        println!("dynamic:       {}", element.dynamic);
        if !element.attributes.is_empty() {
            println!("attributes:");
            for (key, value) in &element.attributes {
                println!("  {key} = {value}");
            }
        }
    }

    Ok(ExitStatus::Success)
}
