use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::colorize::{colorize_stderr_line, colorize_stdout_line};
use crate::error::RunnerError;

use super::io_pump::LineStream;

pub(crate) async fn write_line<W>(
    wr: &mut W,
    line: &[u8],
    stream: LineStream,
) -> Result<(), RunnerError>
where
    W: AsyncWrite + Unpin,
{
    let map = |source: std::io::Error| RunnerError::TerminalIo {
        stream: stream.label(),
        source,
    };
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line);
    buf.push(b'\n');
    wr.write_all(&buf).await.map_err(map)?;
    wr.flush().await.map_err(map)
}

/// Colorization stage: styles each received line for `stream` and writes it
/// to `wr` until the reader side hangs up. Returns the number of lines written.
pub async fn colorize_lines<W>(
    mut rx: mpsc::Receiver<String>,
    mut wr: W,
    stream: LineStream,
) -> Result<u64, RunnerError>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0u64;
    while let Some(line) = rx.recv().await {
        let styled = match stream {
            LineStream::Stdout => colorize_stdout_line(&line),
            LineStream::Stderr => colorize_stderr_line(&line),
        };
        write_line(&mut wr, styled.to_string().as_bytes(), stream).await?;
        written += 1;
    }
    Ok(written)
}
