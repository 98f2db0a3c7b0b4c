use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

#[test]
fn finds_an_element_by_agent_id_substring() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["find", "click", "--manifest", "manifest.json", "--json"])
        .output()?;
    assert!(output.status.success());

    let matches: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(matches.as_array().unwrap().len(), 1);
    assert_eq!(matches[0]["element"]["agentId"], "click.button");

    Ok(())
}

#[test]
fn top_limits_the_number_of_matches() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.write_file("src/widgets/other.tsx", "export const el2 = <button>Close</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["find", "c", "--manifest", "manifest.json", "--top", "1", "--json"])
        .output()?;
    assert!(output.status.success());

    let matches: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(matches.as_array().unwrap().len(), 1);

    Ok(())
}

#[test]
fn query_with_no_subsequence_match_yields_no_results() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["find", "zzzzz", "--manifest", "manifest.json", "--json"])
        .output()?;
    assert!(output.status.success());

    let matches: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(matches.as_array().unwrap().len(), 0);

    Ok(())
}
