use std::fs;

use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const MAIN_SMALI: &str = "\
.class public Lcom/example/Main;
.super Landroid/app/Activity;

.method protected onCreate(Landroid/os/Bundle;)V
    .locals 2

    const/high16 v0, 0x7f03
    invoke-virtual {p0, v0}, Lcom/example/Main;->setContentView(I)V

    const v0, 0x7f040002
    const/4 v1, 0x0

    return-void
.end method
";

#[test]
fn test_resolve_string_with_preview() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file("smali/com/example/Greeter.smali", "const-string v0, 0x7f040001\n")?;

    let (output, stdout, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout, @r"
    Parsing ./res/values/public.xml...
    Parsing ./res/values/strings.xml...
    Making modifications to files in smali, smali_classes*...
    ✓ Annotated 1 line(s) in 1 file(s) (checked 1 listing).
    ");

    let padding = " ".repeat("const-string v0, 0x7f040001".len());
    assert_eq!(
        test.read_file("smali/com/example/Greeter.smali")?,
        format!(
            "const-string v0, 0x7f040001\t#Public value 'app_name' (type=string)\n\
             {}\t#app_name = \"Hello World, this is a ve...\"\n",
            padding
        )
    );
    Ok(())
}

#[test]
fn test_resolve_full_listing() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file("smali/com/example/Main.smali", MAIN_SMALI)?;

    let (output, _, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));

    let padding = " ".repeat("    const v0, 0x7f040002".len());
    let expected = format!(
        "\
.class public Lcom/example/Main;
.super Landroid/app/Activity;

.method protected onCreate(Landroid/os/Bundle;)V
    .locals 2

    const/high16 v0, 0x7f03\t#Public value 'activity_main' (type=layout)
    invoke-virtual {{p0, v0}}, Lcom/example/Main;->setContentView(I)V

    const v0, 0x7f040002\t#Public value 'hello' (type=string)
{}\t#hello = \"Hi!\"
    const/4 v1, 0x0

    return-void
.end method
",
        padding
    );
    assert_eq!(test.read_file("smali/com/example/Main.smali")?, expected);
    Ok(())
}

#[test]
fn test_packed_switch_annotated_without_preview() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file(
        "smali/com/example/Switch.smali",
        ":pswitch_data_0\n.packed-switch 0x7f040001\n    :pswitch_0\n.end packed-switch\n",
    )?;

    let (output, _, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("smali/com/example/Switch.smali")?,
        ":pswitch_data_0\n.packed-switch 0x7f040001\t#Public value 'app_name' (type=string)\n    :pswitch_0\n.end packed-switch\n"
    );
    Ok(())
}

#[test]
fn test_unmapped_identifier_leaves_file_untouched() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file("smali/com/example/Other.smali", "    const v0, 0x7f0a0001\n")?;
    let path = test.root().join("smali/com/example/Other.smali");
    let before = fs::metadata(&path)?.modified()?;

    let (output, stdout, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Checked 1 listing - no resource identifiers found"));

    assert_eq!(
        test.read_file("smali/com/example/Other.smali")?,
        "    const v0, 0x7f0a0001\n"
    );
    assert_eq!(fs::metadata(&path)?.modified()?, before);
    Ok(())
}

#[test]
fn test_rerun_does_not_annotate_twice() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file("smali/com/example/Main.smali", MAIN_SMALI)?;

    run(test.resolve_command())?;
    let first = test.read_file("smali/com/example/Main.smali")?;

    let (output, stdout, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("no resource identifiers found"));
    assert_eq!(test.read_file("smali/com/example/Main.smali")?, first);
    Ok(())
}

#[test]
fn test_missing_public_xml_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("smali/A.smali", "    const v0, 0x7f040001\n")?;

    let (output, _, stderr) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.starts_with("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("public.xml"), "stderr: {}", stderr);
    assert_eq!(test.read_file("smali/A.smali")?, "    const v0, 0x7f040001\n");
    Ok(())
}

#[test]
fn test_missing_strings_xml_fails_when_strings_declared() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("res/values/public.xml", crate::PUBLIC_XML)?;
    test.write_file("smali/A.smali", "    const v0, 0x7f040001\n")?;

    let (output, _, stderr) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("strings.xml"), "stderr: {}", stderr);
    assert_eq!(test.read_file("smali/A.smali")?, "    const v0, 0x7f040001\n");
    Ok(())
}

#[test]
fn test_strings_xml_optional_without_string_entries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "res/values/public.xml",
        r#"<resources><public type="layout" name="main" id="0x7f030000"/></resources>"#,
    )?;
    test.write_file("smali/A.smali", "    const v0, 0x7f030000\n")?;

    let (output, stdout, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("strings.xml"));
    assert_eq!(
        test.read_file("smali/A.smali")?,
        "    const v0, 0x7f030000\t#Public value 'main' (type=layout)\n"
    );
    Ok(())
}

#[test]
fn test_malformed_declaration_is_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "res/values/public.xml",
        r#"<resources>
    <public type="layout" name="broken" />
    <public type="layout" name="main" id="0x7f030000" />
</resources>"#,
    )?;
    test.write_file("smali/A.smali", "    const v0, 0x7f030000\n")?;

    let (output, stdout, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains(
        "warning: res/values/public.xml: line 2: <public> is missing attribute 'id'; skipping entry"
    ));
    assert!(stdout.contains("Annotated 1 line(s) in 1 file(s)"));
    Ok(())
}

#[test]
fn test_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file("smali/A.smali", "    const v0, 0x7f020000\n")?;

    let mut cmd = test.resolve_command();
    cmd.arg("--dry-run");
    let (output, stdout, _) = run(cmd)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Would annotate 1 line(s) in 1 file(s)"));
    assert!(stdout.contains("Run without --dry-run to rewrite these files."));
    assert_eq!(test.read_file("smali/A.smali")?, "    const v0, 0x7f020000\n");
    Ok(())
}

#[test]
fn test_verbose_lists_annotations() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file("smali/A.smali", "    .locals 1\n    const v0, 0x7f020000\n")?;

    let mut cmd = test.resolve_command();
    cmd.arg("-v");
    let (output, stdout, _) = run(cmd)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Loaded 4 resource(s), 2 with string values."));
    assert!(stdout.contains("--> smali/A.smali:2  0x7f020000 -> 'icon' (type=drawable)"));
    assert!(stdout.contains("Rewrote smali/A.smali"));
    Ok(())
}

#[test]
fn test_multidex_roots_and_r_files() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file("smali_classes2/com/example/B.smali", "    const v0, 0x7f020000\n")?;
    test.write_file("smali/com/example/R.smali", "    const v0, 0x7f020000\n")?;

    let (output, _, _) = run(test.resolve_command())?;
    assert_eq!(output.status.code(), Some(0));
    assert!(
        test.read_file("smali_classes2/com/example/B.smali")?
            .contains("#Public value 'icon' (type=drawable)")
    );
    assert_eq!(
        test.read_file("smali/com/example/R.smali")?,
        "    const v0, 0x7f020000\n"
    );
    Ok(())
}

#[test]
fn test_preview_length_from_config_and_flag() -> Result<()> {
    let test = CliTest::with_resources()?;
    test.write_file(".smaliresrc.json", r#"{ "previewLength": 5 }"#)?;
    test.write_file("smali/A.smali", "const v0, 0x7f040001\n")?;

    run(test.resolve_command())?;
    assert!(test.read_file("smali/A.smali")?.contains("#app_name = \"Hello...\""));

    test.write_file("smali/A.smali", "const v0, 0x7f040001\n")?;
    let mut cmd = test.resolve_command();
    cmd.args(["--preview-length", "11"]);
    run(cmd)?;
    assert!(test.read_file("smali/A.smali")?.contains("#app_name = \"Hello World...\""));
    Ok(())
}
