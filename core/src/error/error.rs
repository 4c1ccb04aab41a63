use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Runner(#[from] RunnerError),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("error opening file {}: {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error writing file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error running command: {0}")]
    Spawn(String),
    #[error("error getting {0} pipe from command")]
    MissingPipe(&'static str),
    #[error("error reading output of go test ({stream}): {source}")]
    StreamIo {
        stream: &'static str,
        source: std::io::Error,
    },
    #[error("error writing to {stream}: {source}")]
    TerminalIo {
        stream: &'static str,
        source: std::io::Error,
    },
    #[error("worker task failed: {0}")]
    Join(String),
}
