use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

#[test]
fn lists_all_elements_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test.command().args(["list", "--manifest", "manifest.json", "--json"]).output()?;
    assert!(output.status.success());

    let elements: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(elements.as_array().unwrap().len(), 1);
    assert_eq!(elements[0]["agentId"], "click.button");

    Ok(())
}

#[test]
fn filters_by_type() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["list", "--manifest", "manifest.json", "--type", "link", "--json"])
        .output()?;
    assert!(output.status.success());

    let elements: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(elements.as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn prints_distinct_routes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app/page.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["list", "--manifest", "manifest.json", "--routes", "--json"])
        .output()?;
    assert!(output.status.success());

    let routes: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(routes.as_array().unwrap().len(), 1);
    assert_eq!(routes[0], "/");

    Ok(())
}
