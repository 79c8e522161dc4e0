use crate::harness::{CATS_RESULT, TestContext};
use predicates::prelude::*;

#[test]
fn render_reproduces_views_without_network() {
    let ctx = TestContext::new();
    let path = ctx.write_file("result.json", CATS_RESULT);

    ctx.cli()
        .arg("render")
        .arg(&path)
        .args(["-v", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"role\": \"user\""))
        .stdout(predicate::str::contains(
            "\"content\": \"Act as a creative writer and write a playful blog post about cats.\"",
        ));
}

#[test]
fn render_reads_stdin() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "-", "-v", "main"])
        .write_stdin(CATS_RESULT)
        .assert()
        .success()
        .stdout("Act as a creative writer and write a playful blog post about cats.\n");
}

#[test]
fn json_view_can_be_rendered_again() {
    let ctx = TestContext::new();
    let path = ctx.write_file("result.json", CATS_RESULT);

    let output = ctx.cli().arg("render").arg(&path).args(["-v", "json"]).output().unwrap();
    assert!(output.status.success());
    let json = String::from_utf8(output.stdout).unwrap();
    assert!(json.starts_with("{\n  \"enhancedPrompt\""));

    let saved = ctx.write_file("saved.json", &json);
    ctx.cli()
        .arg("render")
        .arg(&saved)
        .args(["-v", "json"])
        .assert()
        .success()
        .stdout(json.clone());
}

#[test]
fn render_rejects_incomplete_result() {
    let ctx = TestContext::new();
    let path = ctx.write_file("partial.json", r#"{"enhancedPrompt":"x","minimalVersion":"y"}"#);

    ctx.cli()
        .arg("render")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed response"));
}

#[test]
fn render_missing_file_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}
