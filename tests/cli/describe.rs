use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

#[test]
fn describes_an_existing_element() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["describe", "click.button", "--manifest", "manifest.json", "--json"])
        .output()?;
    assert!(output.status.success());

    let element: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(element["agentId"], "click.button");
    assert_eq!(element["type"], "button");

    Ok(())
}

#[test]
fn unknown_agent_id_fails_with_a_structured_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["describe", "nope.button", "--manifest", "manifest.json", "--json"])
        .output()?;
    assert!(!output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["code"], "UNKNOWN");

    Ok(())
}
