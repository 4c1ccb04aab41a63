mod io_pump;
mod output;
mod runtime;
mod tee;
pub mod types;

mod run;
mod traits;

pub use io_pump::{pump_lines, LineSink, LineStream};
pub use output::colorize_lines;
pub use run::{run_session, RunSessionArgs};
pub use runtime::{run_session_runtime, RunSessionRuntimeInput, Terminal};
pub use tee::LineTee;
pub use traits::{RunnerPlugin, RunnerSession};
pub use types::{RunOutcome, RunSummary, RunnerStartArgs};
