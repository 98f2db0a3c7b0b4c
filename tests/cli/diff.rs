use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

#[test]
fn identical_manifests_have_no_breaking_changes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "a.json"]).output()?;
    test.command().args(["scan", ".", "-o", "b.json"]).output()?;

    let output = test.command().args(["diff", "a.json", "b.json", "--json"]).output()?;
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["breaking"], false);
    assert_eq!(payload["changes"].as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn removing_an_element_is_a_breaking_change() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "a.json"]).output()?;

    test.write_file("src/widgets/button.tsx", "export const x = 1;\n")?;
    test.command().args(["scan", ".", "-o", "b.json"]).output()?;

    let output = test.command().args(["diff", "a.json", "b.json", "--json"]).output()?;
    assert!(!output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["breaking"], true);
    let changes = payload["changes"].as_array().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0]["kind"], "removed");

    Ok(())
}

#[test]
fn adding_an_element_is_additive_and_non_breaking() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "a.json"]).output()?;

    test.write_file("src/widgets/other.tsx", "export const el = <button>Save</button>;\n")?;
    test.command().args(["scan", ".", "-o", "b.json"]).output()?;

    let output = test.command().args(["diff", "a.json", "b.json", "--json"]).output()?;
    assert!(output.status.success());

    let payload: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(payload["breaking"], false);
    assert_eq!(payload["summary"]["additive"], 1);

    Ok(())
}
