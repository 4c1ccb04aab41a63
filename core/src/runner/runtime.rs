//! Runner runtime: fans the child's stdout/stderr out to readers (and colorizers when enabled),
//! joins them as one unit, then reaps the child.
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::error::RunnerError;

use super::io_pump::{pump_lines, LineSink, LineStream};
use super::output::colorize_lines;
use super::tee::LineTee;
use super::traits::RunnerSession;
use super::types::RunSummary;

type BoxReader = Box<dyn AsyncRead + Unpin + Send>;
type BoxWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// The two terminal streams lines end up on.
pub struct Terminal {
    pub stdout: BoxWriter,
    pub stderr: BoxWriter,
}

impl Terminal {
    pub fn stdio() -> Self {
        Self {
            stdout: Box::new(tokio::io::stdout()),
            stderr: Box::new(tokio::io::stderr()),
        }
    }
}

pub struct RunSessionRuntimeInput {
    pub session: Box<dyn RunnerSession>,
    pub tee: Option<LineTee>,
    pub colorize: bool,
    pub terminal: Terminal,
}

enum Worker {
    Reader(LineStream),
    Colorizer(LineStream),
}

type Workers = JoinSet<Result<(Worker, u64), RunnerError>>;

pub async fn run_session_runtime(
    input: RunSessionRuntimeInput,
) -> Result<RunSummary, RunnerError> {
    let RunSessionRuntimeInput {
        mut session,
        tee,
        colorize,
        terminal,
    } = input;

    let stdout = session
        .stdout()
        .ok_or(RunnerError::MissingPipe("stdout"))?;
    let stderr = session
        .stderr()
        .ok_or(RunnerError::MissingPipe("stderr"))?;

    let mut workers: Workers = JoinSet::new();
    spawn_stream(
        &mut workers,
        stdout,
        LineStream::Stdout,
        terminal.stdout,
        tee.clone(),
        colorize,
    );
    spawn_stream(
        &mut workers,
        stderr,
        LineStream::Stderr,
        terminal.stderr,
        tee.clone(),
        colorize,
    );
    tracing::debug!(workers = workers.len(), colorize, "stream workers started");

    let mut summary = RunSummary::default();
    while let Some(joined) = workers.join_next().await {
        let (worker, count) = match joined {
            Ok(Ok(done)) => done,
            Ok(Err(e)) => {
                workers.abort_all();
                return Err(e);
            }
            Err(e) => {
                workers.abort_all();
                return Err(RunnerError::Join(e.to_string()));
            }
        };
        match worker {
            Worker::Reader(stream) => summary.record_lines(stream, count),
            Worker::Colorizer(stream) => {
                tracing::debug!(stream = stream.label(), lines = count, "colorizer finished")
            }
        }
    }

    if let Some(tee) = &tee {
        tee.flush().await?;
        tracing::debug!(path = %tee.path().display(), "output file flushed");
    }

    match session.wait().await {
        Ok(outcome) => {
            tracing::info!(exit_code = outcome.exit_code, "wrapped command exited");
            summary.exit_code = Some(outcome.exit_code);
        }
        Err(e) => tracing::warn!(error = %e, "failed to reap wrapped command"),
    }

    Ok(summary)
}

fn spawn_stream(
    workers: &mut Workers,
    rd: BoxReader,
    stream: LineStream,
    wr: BoxWriter,
    tee: Option<LineTee>,
    colorize: bool,
) {
    if colorize {
        // Capacity 1: the reader waits for the colorizer, close to an unbuffered hand-off.
        let (tx, rx) = mpsc::channel::<String>(1);
        workers.spawn(async move {
            let n = colorize_lines(rx, wr, stream).await?;
            Ok::<_, RunnerError>((Worker::Colorizer(stream), n))
        });
        workers.spawn(async move {
            let n = pump_lines(rd, stream, tee, LineSink::<BoxWriter>::Colorizer(tx)).await?;
            Ok::<_, RunnerError>((Worker::Reader(stream), n))
        });
    } else {
        workers.spawn(async move {
            let n = pump_lines(rd, stream, tee, LineSink::Terminal(wr)).await?;
            Ok::<_, RunnerError>((Worker::Reader(stream), n))
        });
    }
}
