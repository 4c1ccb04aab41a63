use crate::config::InvocationConfig;
use crate::error::RunnerError;

use super::runtime::{self, Terminal};
use super::tee::LineTee;
use super::traits::RunnerPlugin;
use super::types::{RunSummary, RunnerStartArgs};

pub struct RunSessionArgs<'a> {
    pub runner: &'a dyn RunnerPlugin,
    pub start: RunnerStartArgs,
    pub config: &'a InvocationConfig,
    pub terminal: Terminal,
}

/// Opens the output file (if any), starts the wrapped command and streams it to completion.
/// The file is opened first so a bad path fails before anything runs.
pub async fn run_session(args: RunSessionArgs<'_>) -> Result<RunSummary, RunnerError> {
    let RunSessionArgs {
        runner,
        start,
        config,
        terminal,
    } = args;

    let tee = match config.out_file.as_deref() {
        Some(path) => Some(LineTee::create(path).await?),
        None => None,
    };

    tracing::debug!(
        runner = runner.name(),
        cmd = %start.cmd,
        args = ?start.args,
        "starting wrapped command"
    );
    let session = runner
        .start_session(&start)
        .await
        .map_err(|e| RunnerError::Spawn(format!("{e:#}")))?;

    runtime::run_session_runtime(runtime::RunSessionRuntimeInput {
        session,
        tee,
        colorize: config.colorize,
        terminal,
    })
    .await
}
