use anyhow::Result;

use crate::CliTest;

#[test]
fn path_like_argument_gets_a_hint_and_exits_one() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["./my-app"]).output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("did you mean `uic scan ./my-app`"));

    Ok(())
}

#[test]
fn unrelated_unknown_subcommand_exits_one_without_a_hint() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["bogus"]).output()?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.contains("did you mean"));

    Ok(())
}
