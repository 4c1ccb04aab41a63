//! Planner: turns the invocation config into the `go test` command line.
use nolog_core::config::InvocationConfig;
use nolog_core::runner::RunnerStartArgs;

const TEST_SUBCOMMAND: &str = "test";
const DEFAULT_TARGET: &str = "./...";
const VERBOSE_FLAG: &str = "-test.v=true";
const FILTER_FLAG: &str = "-gocheck.f";

/// `test`, the passthrough args (or `./...` when there are none), then the derived flags.
/// A filter implies verbose, since gocheck only reports per-test results in verbose mode.
pub fn build_test_plan(cfg: &InvocationConfig) -> RunnerStartArgs {
    let mut args = Vec::with_capacity(cfg.passthrough.len() + 3);
    args.push(TEST_SUBCOMMAND.to_string());

    if cfg.passthrough.is_empty() {
        args.push(DEFAULT_TARGET.to_string());
    } else {
        args.extend(cfg.passthrough.iter().cloned());
    }

    let filter = cfg.filter();
    if cfg.verbose || filter.is_some() {
        args.push(VERBOSE_FLAG.to_string());
    }
    if let Some(filter) = filter {
        args.push(format!("{FILTER_FLAG}={filter}"));
    }

    RunnerStartArgs {
        cmd: cfg.go_bin.clone(),
        args,
    }
}
