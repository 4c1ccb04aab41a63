use anyhow::{Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncRead;
use tokio::process::{Child, Command};

use super::{RunOutcome, RunnerPlugin, RunnerSession, RunnerStartArgs};

/// Spawns the wrapped test command with both output streams piped.
pub struct GoTestRunnerPlugin {}

impl GoTestRunnerPlugin {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for GoTestRunnerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunnerPlugin for GoTestRunnerPlugin {
    fn name(&self) -> &str {
        "gotest"
    }

    async fn start_session(&self, args: &RunnerStartArgs) -> Result<Box<dyn RunnerSession>> {
        let child = Command::new(&args.cmd)
            .args(&args.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start {}", args.cmd))?;

        tracing::debug!(pid = ?child.id(), cmd = %args.cmd, "wrapped command started");
        Ok(Box::new(GoTestRunnerSession { child }))
    }
}

struct GoTestRunnerSession {
    child: Child,
}

#[async_trait]
impl RunnerSession for GoTestRunnerSession {
    fn stdout(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.child
            .stdout
            .take()
            .map(|s| Box::new(s) as Box<dyn AsyncRead + Unpin + Send>)
    }

    fn stderr(&mut self) -> Option<Box<dyn AsyncRead + Unpin + Send>> {
        self.child
            .stderr
            .take()
            .map(|s| Box::new(s) as Box<dyn AsyncRead + Unpin + Send>)
    }

    async fn wait(&mut self) -> Result<RunOutcome> {
        let status = self.child.wait().await?;
        Ok(RunOutcome {
            exit_code: status.code().unwrap_or(-1),
        })
    }
}
