//! Integration tests for the skillhint binary.
//!
//! Each test builds a fixture with its own project and home directories, so
//! the rules file the binary sees is fully controlled by the test:
//! - Rules are loaded from the project, then from the home directory
//! - Prompts are matched by keyword, then by intent pattern
//! - The hook prints the suggestion block or nothing, and always exits 0

mod sections;

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq as pretty_assert_eq;
use serde_json::Value;
use tempfile::TempDir;
use xshell::{Cmd, Shell, cmd};

/// Path to the compiled binary under test.
const SKILLHINT: &str = env!("CARGO_BIN_EXE_skillhint");

/// Build a UserPromptSubmit hook JSON payload.
pub fn user_prompt_hook(prompt: &str, cwd: &Path) -> String {
    serde_json::json!({
        "hook_event_name": "UserPromptSubmit",
        "session_id": "test",
        "transcript_path": "/tmp/test",
        "permission_mode": "default",
        "cwd": cwd,
        "prompt": prompt
    })
    .to_string()
}

/// Isolated project and home directories for a single test.
pub struct Fixture {
    project: TempDir,
    home: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            project: TempDir::new().expect("create project dir"),
            home: TempDir::new().expect("create home dir"),
        }
    }

    pub fn project(&self) -> &Path {
        self.project.path()
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Write a rules file under the project directory.
    pub fn project_rules(&self, rules: &Value) -> PathBuf {
        write_rules(self.project(), &rules.to_string())
    }

    /// Write a rules file under the home directory.
    pub fn home_rules(&self, rules: &Value) -> PathBuf {
        write_rules(self.home(), &rules.to_string())
    }

    /// Write raw content as the project rules file.
    pub fn project_rules_raw(&self, content: &str) -> PathBuf {
        write_rules(self.project(), content)
    }

    /// A command running the binary in the project directory with a
    /// controlled environment: `HOME` points at the fixture and nothing else
    /// can supply rules. `CLAUDE_PROJECT_DIR` is set to the project directory
    /// only when `project_dir` is true.
    fn command<'a>(&self, sh: &'a Shell, args: &[&str], project_dir: bool) -> Cmd<'a> {
        sh.change_dir(self.project());
        let bin = SKILLHINT;
        let cmd = cmd!(sh, "{bin} {args...}")
            .env("HOME", self.home())
            .env_remove("USERPROFILE")
            .env_remove("SKILLHINT_LOG")
            .ignore_status()
            .quiet();
        if project_dir {
            cmd.env("CLAUDE_PROJECT_DIR", self.project())
        } else {
            cmd.env_remove("CLAUDE_PROJECT_DIR")
        }
    }

    /// Run the hook with `CLAUDE_PROJECT_DIR` set to the project directory.
    pub fn run_hook(&self, input: &str) -> (i32, String) {
        let sh = Shell::new().expect("create shell");
        run(self.command(&sh, &[], true), input)
    }

    /// Run the hook without `CLAUDE_PROJECT_DIR`, so the `cwd` in the hook
    /// event decides the project directory.
    pub fn run_hook_without_project_dir(&self, input: &str) -> (i32, String) {
        let sh = Shell::new().expect("create shell");
        run(self.command(&sh, &[], false), input)
    }

    /// Run the hook with extra environment changes applied after the defaults.
    /// A `None` value removes the variable.
    pub fn run_hook_with_env(&self, input: &str, env: &[(&str, Option<&Path>)]) -> (i32, String) {
        let sh = Shell::new().expect("create shell");
        let cmd = env
            .iter()
            .fold(self.command(&sh, &[], true), |cmd, &(key, value)| match value {
                Some(value) => cmd.env(key, value),
                None => cmd.env_remove(key),
            });
        run(cmd, input)
    }

    /// Run a skillhint subcommand and return (exit_code, stdout, stderr).
    pub fn run_skillhint(&self, args: &[&str]) -> (i32, String, String) {
        let sh = Shell::new().expect("create shell");
        let output = self
            .command(&sh, args, true)
            .output()
            .expect("failed to run skillhint");

        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        (exit_code, stdout, stderr)
    }
}

fn write_rules(root: &Path, content: &str) -> PathBuf {
    let dir = root.join(".claude").join("skills");
    fs::create_dir_all(&dir).expect("create skills dir");
    let path = dir.join("skill-rules.json");
    fs::write(&path, content).expect("write rules file");
    path
}

/// Feed the input to the hook and return (exit_code, stdout).
fn run(cmd: Cmd<'_>, input: &str) -> (i32, String) {
    let output = cmd.stdin(input).output().expect("failed to run skillhint");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (exit_code, stdout)
}

/// Assert the hook stayed silent and let the prompt through.
pub fn assert_silent(exit_code: i32, output: &str) {
    pretty_assert_eq!(exit_code, 0, "expected exit 0, output: {output}");
    assert!(output.is_empty(), "expected no output, got: {output}");
}

/// Assert the hook printed a suggestion block.
pub fn assert_suggests(exit_code: i32, output: &str) {
    pretty_assert_eq!(exit_code, 0, "expected exit 0, output: {output}");
    assert!(
        output.contains("🎯 SMART SUGGESTIONS"),
        "expected suggestion block, got: {output}"
    );
}
