//! Shared testing utilities for memebot CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for the compiled `memebot` binary without ambient credentials.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("memebot").expect("Failed to locate memebot binary");
        cmd.current_dir(self.work_dir()).env_remove("OPENAI_API_KEY").env_remove("MEMEBOT_LOG");
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `memebot.toml` pointing the oracle at `api_url`.
    pub fn write_config(&self, api_url: &str, max_attempts: u32) -> PathBuf {
        self.write_file(
            "memebot.toml",
            &format!(
                "[oracle]\napi_url = \"{}\"\ntimeout_secs = 5\n\n[selector]\nmax_attempts = {}\n",
                api_url, max_attempts
            ),
        )
    }
}

/// Chat completions body whose message content is `content`.
#[allow(dead_code)]
pub fn completion_response(content: &str) -> String {
    serde_json::json!({
        "choices": [{
            "message": {"role": "assistant", "content": content}
        }]
    })
    .to_string()
}
