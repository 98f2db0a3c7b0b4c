use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

#[test]
fn renames_an_existing_manifests_elements() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;

    test.command().args(["scan", ".", "-o", "raw.json"]).output()?;

    let output = test.command().args(["name", "raw.json", "-o", "named.json"]).output()?;
    assert!(output.status.success());

    let manifest_text = test.read_file("named.json")?;
    let manifest: Value = serde_json::from_str(&manifest_text)?;
    assert_eq!(manifest["elements"][0]["agentId"], "click.button");

    Ok(())
}

#[test]
fn missing_input_manifest_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["name", "does-not-exist.json"]).output()?;
    assert!(!output.status.success());

    Ok(())
}
