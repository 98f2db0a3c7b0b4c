use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

#[test]
fn scans_a_button_and_assigns_a_stable_id() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;

    let output = test.command().args(["scan", ".", "--json"]).output()?;
    assert!(output.status.success());

    let manifest: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(manifest["schemaVersion"], "1.0");
    assert_eq!(manifest["elements"].as_array().unwrap().len(), 1);
    assert_eq!(manifest["elements"][0]["agentId"], "click.button");

    Ok(())
}

#[test]
fn scan_writes_to_output_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Go</button>;\n")?;

    let output = test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;
    assert!(output.status.success());

    let manifest_text = test.read_file("manifest.json")?;
    let manifest: Value = serde_json::from_str(&manifest_text)?;
    assert_eq!(manifest["elements"][0]["agentId"], "go.button");

    Ok(())
}

#[test]
fn parse_errors_do_not_fail_the_scan() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app/page.tsx", "function (")?;

    let output = test.command().args(["scan", ".", "--json"]).output()?;
    assert!(output.status.success());

    let manifest: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(manifest["metadata"]["warnings"].as_array().unwrap().len(), 1);

    Ok(())
}

#[test]
fn nonexistent_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["scan", "does-not-exist"]).output()?;
    assert!(!output.status.success());

    Ok(())
}
