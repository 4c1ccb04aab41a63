//! CLI wiring: resolves the invocation config, plans the `go test` command and streams it.
use nolog_core::error::RunnerError;
use nolog_core::runner::{run_session, RunSessionArgs, Terminal};
use nolog_plugins::plan::build_test_plan;
use nolog_plugins::runner::GoTestRunnerPlugin;

use crate::commands::cli::Args;

/// The wrapped command's own exit status is not propagated; a completed run is 0.
#[tracing::instrument(name = "cli.run_app", skip(args))]
pub async fn run_app(args: Args) -> Result<i32, RunnerError> {
    let config = args.into_config();
    let start = build_test_plan(&config);
    tracing::debug!(?config, "invocation resolved");

    let runner = GoTestRunnerPlugin::new();
    let summary = run_session(RunSessionArgs {
        runner: &runner,
        start,
        config: &config,
        terminal: Terminal::stdio(),
    })
    .await?;

    tracing::debug!(
        stdout_lines = summary.stdout_lines,
        stderr_lines = summary.stderr_lines,
        exit_code = ?summary.exit_code,
        "run finished"
    );
    Ok(0)
}
