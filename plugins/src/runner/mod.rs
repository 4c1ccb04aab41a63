pub mod gotest;

pub use gotest::GoTestRunnerPlugin;
pub use nolog_core::runner::{RunOutcome, RunnerPlugin, RunnerSession, RunnerStartArgs};
