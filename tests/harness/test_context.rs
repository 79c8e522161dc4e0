//! Shared testing harness for `penh` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Result document returned by the fake generation service.
pub(crate) const CATS_RESULT: &str = r#"{"enhancedPrompt":"Act as a creative writer and write a playful blog post about cats.","minimalVersion":"Write a playful 500-word blog post about cats.","structuredAnalysis":{"role":"Creative Writer","task":"Blog post generation","context":"","instructions":["Draft outline","Write 500 words"],"constraints":["Keep tone playful"],"outputFormat":"Markdown"}}"#;

/// Path of the `generateContent` endpoint for the default model.
pub(crate) const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the working directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `penh` binary.
    ///
    /// The credential variable is cleared so each test opts in explicitly.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("penh").expect("Failed to locate penh binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("GEMINI_API_KEY")
            .env_remove("PENH_LOG");
        cmd
    }

    /// Write `~/.config/penh/config.toml` pointing the client at `api_url`.
    pub(crate) fn write_config(&self, api_url: &str, extra: &str) -> PathBuf {
        let dir = self.home().join(".config").join("penh");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        let content = format!("[gemini]\napi_url = \"{}\"\ntimeout_secs = 10\n{}", api_url, extra);
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Write a file into the working directory.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Gemini `generateContent` envelope whose candidate text is `text`.
pub(crate) fn gemini_envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
