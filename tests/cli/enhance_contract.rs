use crate::harness::{CATS_RESULT, GENERATE_PATH, TestContext, gemini_envelope};
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn enhance_prints_markdown_from_service_reply() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("TARGET STYLE:\\\\nCreative/Storytelling".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(CATS_RESULT))
        .expect(1)
        .create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .args(["enhance", "write a blog post about cats", "--style", "creative", "-v", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Enhanced Prompt"))
        .stdout(predicate::str::contains("**Role:** Creative Writer"))
        .stdout(predicate::str::contains("- Draft outline\n- Write 500 words\n"))
        .stdout(predicate::str::contains("### Constraints\n- Keep tone playful"));

    mock.assert();
}

#[test]
fn enhance_all_views_prints_each_header() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(gemini_envelope(CATS_RESULT))
        .create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .args(["enhance", "cats", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Main ==="))
        .stdout(predicate::str::contains("=== Minimal ==="))
        .stdout(predicate::str::contains("=== JSON ==="))
        .stdout(predicate::str::contains("=== OpenAI API ==="))
        .stdout(predicate::str::contains("\"model\": \"gpt-4o\""))
        .stdout(predicate::str::contains("=== Markdown ==="));
}

#[test]
fn enhance_without_credential_makes_no_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", GENERATE_PATH).expect(0).create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .args(["enhance", "write a blog post about cats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key is missing. Please set GEMINI_API_KEY."));

    mock.assert();
}

#[test]
fn enhance_honours_configured_credential_variable() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", "other-key")
        .with_status(200)
        .with_body(gemini_envelope(CATS_RESULT))
        .expect(1)
        .create();
    ctx.write_config(&server.url(), "api_key_env = \"PENH_TEST_KEY\"\n");

    ctx.cli()
        .env("PENH_TEST_KEY", "other-key")
        .args(["enhance", "cats", "-v", "minimal"])
        .assert()
        .success()
        .stdout("Write a playful 500-word blog post about cats.\n");

    mock.assert();
}

#[test]
fn blank_prompt_is_ignored() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", GENERATE_PATH).expect(0).create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .arg("enhance")
        .write_stdin("   \n\t")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing to enhance"));

    mock.assert();
}

#[test]
fn prompt_is_read_from_stdin() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::Regex("summarize this report".to_string()))
        .with_status(200)
        .with_body(gemini_envelope(CATS_RESULT))
        .expect(1)
        .create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .arg("enhance")
        .write_stdin("summarize this report")
        .assert()
        .success();

    mock.assert();
}

#[test]
fn empty_candidate_reports_no_response() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .args(["enhance", "cats"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No response received from Gemini."));
}

#[test]
fn malformed_reply_fails_without_output() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(gemini_envelope(r#"{"enhancedPrompt":"only this"}"#))
        .create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .args(["enhance", "cats"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Malformed response"));
}

#[test]
fn service_error_message_is_surfaced() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(403)
        .with_body(r#"{"error":{"code":403,"message":"Permission denied"}}"#)
        .expect(1)
        .create();
    ctx.write_config(&server.url(), "");

    ctx.cli()
        .env("GEMINI_API_KEY", "test-key")
        .args(["enhance", "cats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Permission denied"));

    mock.assert();
}

#[test]
fn explicit_missing_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["enhance", "cats", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
