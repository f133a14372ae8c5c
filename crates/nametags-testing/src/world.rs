//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SessionBuilder;

/// Isolated environment for one CLI test.
///
/// # Example
/// ```no_run
/// use nametags_testing::{SessionBuilder, TestWorld};
///
/// let world = TestWorld::new();
/// let session = world
///     .write_session("s.toml", &SessionBuilder::new().player("Alex", &["nametags.color.red"]))
///     .unwrap();
///
/// let result = world
///     .run(&["labels", "--session", session.to_str().unwrap()])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment. The data directory is not
    /// created; the CLI creates it on first write.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".nametags");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write config.toml verbatim.
    pub fn write_raw_config(&self, content: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }

    pub fn read_config(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.config_path())?)
    }

    /// Write a session file next to the data directory and return its path.
    pub fn write_session(&self, name: &str, session: &SessionBuilder) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, session.to_toml()?)?;
        Ok(path)
    }

    /// Configure a CLI command with this environment's data dir and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.env_remove("NAMETAGS_PATH").env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `nametags` binary with `args` in this environment.
    ///
    /// # Note
    /// Uses `Command::cargo_bin()`, which needs the binary built by
    /// `cargo test`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("nametags")
            .map_err(|e| anyhow::anyhow!("Failed to find nametags binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Like [`TestWorld::run`], with `--format json` and stdout parsed.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);

        let result = self.run(&full)?;
        if !result.success() {
            anyhow::bail!("nametags {:?} failed: {}", args, result.stderr);
        }
        result.json()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
