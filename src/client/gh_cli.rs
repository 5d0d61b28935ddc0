use std::io::ErrorKind;
use std::process::Stdio;
use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;

use super::QueryExecutor;
use crate::error::{ExportError, ExportResult};
use crate::logging::{log_debug, log_info};
use crate::models::GraphQLResponse;

const LOGIN_HINT: &str = "gh auth login";

/// Runs queries through `gh api graphql`, reusing the gh CLI's own login.
pub struct GhCliClient {
    program: String,
}

struct GhOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

impl GhOutput {
    /// gh asks for a login on stderr and exits non-zero. Output of a
    /// successful run is query data, whatever text it carries.
    fn needs_login(&self) -> bool {
        !self.success && self.stderr.contains(LOGIN_HINT)
    }

    fn into_data(self) -> ExportResult<Value> {
        // gh exits non-zero on GraphQL errors but still prints the JSON body
        match serde_json::from_str::<GraphQLResponse>(&self.stdout) {
            Ok(response) => response.into_data(),
            Err(_) => {
                let detail = if self.stderr.trim().is_empty() {
                    self.stdout.trim()
                } else {
                    self.stderr.trim()
                };
                let status = if self.success { "returned unreadable output" } else { "failed" };
                Err(ExportError::Transport(format!("gh api graphql {}: {}", status, detail)))
            }
        }
    }
}

impl GhCliClient {
    pub fn new() -> Self {
        Self::with_program("gh")
    }

    /// Use a different executable in place of `gh`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command line arguments for one query. String variables go through
    /// `-f`, numbers and booleans through `-F` so gh sends them typed, and
    /// null variables are left out.
    pub fn build_args(query: &str, variables: &Value) -> Vec<String> {
        let mut args = vec![
            "api".to_string(),
            "graphql".to_string(),
            "-f".to_string(),
            format!("query={}", query),
        ];

        if let Some(variables) = variables.as_object() {
            for (name, value) in variables {
                match value {
                    Value::Null => {}
                    Value::String(s) => {
                        args.push("-f".to_string());
                        args.push(format!("{}={}", name, s));
                    }
                    other => {
                        args.push("-F".to_string());
                        args.push(format!("{}={}", name, other));
                    }
                }
            }
        }

        args
    }

    async fn run(&self, args: &[String]) -> ExportResult<GhOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;

        Ok(GhOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Interactive `gh auth login`. Its stdout is sent to our stderr so the
    /// CSV on stdout stays clean.
    async fn login(&self) -> ExportResult<()> {
        log_info("gh is not authenticated, starting gh auth login");

        let status = Command::new(&self.program)
            .args(["auth", "login", "--scopes", "project"])
            .stdout(std::io::stderr())
            .status()
            .await
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(ExportError::Transport(format!("gh auth login failed ({})", status)));
        }
        Ok(())
    }

    fn spawn_error(&self, error: std::io::Error) -> ExportError {
        if error.kind() == ErrorKind::NotFound {
            ExportError::Transport(format!(
                "{} command line client not installed. https://cli.github.com/. install with 'brew install gh'",
                self.program
            ))
        } else {
            ExportError::Transport(format!("Failed to run {}: {}", self.program, error))
        }
    }
}

impl Default for GhCliClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryExecutor for GhCliClient {
    async fn execute(&self, query: &str, variables: Value) -> ExportResult<Value> {
        let args = Self::build_args(query, &variables);
        log_debug(&format!("Running {} api graphql with variables {}", self.program, variables));

        let mut output = self.run(&args).await?;

        if output.needs_login() {
            self.login().await?;
            output = self.run(&args).await?;

            if output.needs_login() {
                return Err(ExportError::Transport(
                    "gh is not authenticated. Run 'gh auth login --scopes \"project\"' and try again".to_string(),
                ));
            }
        }

        output.into_data()
    }

    fn transport(&self) -> &'static str {
        "gh"
    }
}
