//! Generic tool management for CLI tools
//!
//! Provides a reusable abstraction for checking and installing the CLI
//! tools the generated project depends on (bower, or any other tool with a
//! one-line install command), plus the package-install step itself.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for tool installation (30 seconds).
const INSTALL_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for the package-install step inside a generated project.
const PACKAGE_INSTALL_TIMEOUT: Duration = Duration::from_secs(300);

/// Configuration for a CLI tool.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "bower")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Shell command that installs the tool
    pub install_command: &'static str,
    /// URL to the documentation
    pub docs_url: &'static str,
}

/// Manager for checking and installing CLI tools.
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn install_command(&self) -> &'static str {
        self.config.install_command
    }

    /// Check if the tool is installed and available in PATH.
    pub fn is_installed(&self) -> bool {
        std::process::Command::new("which")
            .arg(self.config.name)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// Get the installed tool version (if available).
    pub fn get_version(&self) -> Option<String> {
        std::process::Command::new(self.config.name)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Install the tool with its install command, streaming output.
    pub async fn install(&self) -> Result<()> {
        let cmd = self.install_command();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let mut command = TokioCommand::new("sh");
        command.arg("-c").arg(cmd);
        run_streaming(command, cmd, INSTALL_TIMEOUT).await
    }

    /// Open the tool's documentation in the default browser.
    pub fn open_docs(&self) -> Result<()> {
        println!(
            "{}",
            format!(
                "Opening {} documentation in your browser...",
                self.config.display_name
            )
            .cyan()
        );
        open::that(self.config.docs_url)?;
        Ok(())
    }
}

/// Pre-configured tool manager for bower.
pub fn bower_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "bower",
        display_name: "Bower",
        install_command: "npm install --global bower",
        docs_url: "https://bower.io",
    })
}

/// Run the package-install step inside a generated project, streaming its
/// output. Failures are the caller's to downgrade; the step itself never
/// touches anything outside `project_dir`.
pub async fn run_package_install(project_dir: &Path) -> Result<()> {
    let mut command = TokioCommand::new("bower");
    command.arg("install").current_dir(project_dir);
    run_streaming(command, "bower install", PACKAGE_INSTALL_TIMEOUT).await
}

/// Spawn a command, stream its stdout/stderr to the terminal, and enforce a
/// wall-clock limit.
async fn run_streaming(mut command: TokioCommand, describe: &str, limit: Duration) -> Result<()> {
    let mut child = command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child.stdout.take().expect("Failed to capture stdout");
    let stderr = child.stderr.take().expect("Failed to capture stderr");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let output_task = async {
        loop {
            tokio::select! {
                line = stdout_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            break;
                        }
                    }
                }
                line = stderr_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => {}
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                        }
                    }
                }
            }
        }
    };

    match timeout(limit, output_task).await {
        Ok(_) => {}
        Err(_) => {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "'{}' timed out after {} seconds.\n\
                 The server may be unreachable. Please try again later or run it manually.",
                describe,
                limit.as_secs()
            );
        }
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) => {
            println!();
            if status.success() {
                Ok(())
            } else {
                anyhow::bail!(
                    "'{}' failed with exit code: {}",
                    describe,
                    status.code().unwrap_or(-1)
                );
            }
        }
        Ok(Err(e)) => {
            anyhow::bail!("Failed to wait for '{}': {}", describe, e);
        }
        Err(_) => {
            let _ = child.kill().await;
            anyhow::bail!("'{}' hung. Please run it manually.", describe);
        }
    }
}
