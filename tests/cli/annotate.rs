use anyhow::Result;

use crate::CliTest;

#[test]
fn dry_run_prints_a_diff_and_leaves_the_file_untouched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test.command().args(["annotate", "--manifest", "manifest.json"]).output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("+export const el = <button data-agent-id=\"click.button\">Click</button>;"));

    let on_disk = test.read_file("src/widgets/button.tsx")?;
    assert_eq!(on_disk, "export const el = <button>Click</button>;\n");

    Ok(())
}

#[test]
fn write_applies_the_patch_and_creates_a_backup() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    let output = test
        .command()
        .args(["annotate", "--manifest", "manifest.json", "--no-dry-run", "--write"])
        .output()?;
    assert!(output.status.success());

    let on_disk = test.read_file("src/widgets/button.tsx")?;
    assert_eq!(on_disk, "export const el = <button data-agent-id=\"click.button\">Click</button>;\n");

    let backup = test.read_file(".uic-backup/src/widgets/button.tsx")?;
    assert_eq!(backup, "export const el = <button>Click</button>;\n");

    Ok(())
}

#[test]
fn second_write_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/button.tsx", "export const el = <button>Click</button>;\n")?;
    test.command().args(["scan", ".", "-o", "manifest.json"]).output()?;

    test.command()
        .args(["annotate", "--manifest", "manifest.json", "--no-dry-run", "--write"])
        .output()?;

    let second = test
        .command()
        .args(["annotate", "--manifest", "manifest.json", "--no-dry-run", "--write", "--json"])
        .output()?;
    assert!(second.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&second.stdout)?;
    assert_eq!(payload["totalApplied"], 0);
    assert_eq!(payload["totalSkipped"], 1);

    Ok(())
}
