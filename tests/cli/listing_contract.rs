use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn styles_are_listed_in_order() {
    let ctx = TestContext::new();

    let output = ctx.cli().arg("styles").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let labels: Vec<&str> =
        stdout.lines().map(|line| line.split_whitespace().nth(1).unwrap()).collect();
    assert_eq!(
        labels,
        ["Professional", "Technical", "Academic", "Creative/Storytelling", "Marketing", "Simple"]
    );
    assert!(stdout.contains("Simple & Beginner-friendly"));
}

#[test]
fn views_are_listed() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("views")
        .assert()
        .success()
        .stdout(predicate::str::contains("api       OpenAI API"))
        .stdout(predicate::str::contains("markdown  Markdown"));
}

#[test]
fn unknown_view_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "x.json", "-v", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid view 'pdf'"));
}
