use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::sync::mpsc;

use crate::colorize::is_log_line;
use crate::error::RunnerError;

use super::output::write_line;
use super::tee::LineTee;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStream {
    Stdout,
    Stderr,
}

impl LineStream {
    pub fn label(self) -> &'static str {
        match self {
            LineStream::Stdout => "stdout",
            LineStream::Stderr => "stderr",
        }
    }
}

/// Where a reader hands its lines after the optional tee.
pub enum LineSink<W> {
    /// Write straight to the terminal stream.
    Terminal(W),
    /// Hand off to a colorization stage.
    Colorizer(mpsc::Sender<String>),
}

struct LineRouter<W> {
    stream: LineStream,
    tee: Option<LineTee>,
    sink: LineSink<W>,
}

impl<W> LineRouter<W>
where
    W: AsyncWrite + Unpin,
{
    /// Returns false once the downstream colorizer is gone.
    async fn deliver(&mut self, raw: &[u8]) -> Result<bool, RunnerError> {
        if let Some(tee) = &self.tee {
            tee.write_line(raw).await?;
        }

        match &mut self.sink {
            LineSink::Colorizer(tx) => {
                let line = String::from_utf8_lossy(raw).into_owned();
                Ok(tx.send(line).await.is_ok())
            }
            LineSink::Terminal(wr) => {
                // Uncolored `[LOG]` lines are noise on stdout; the tee still has them.
                if self.stream == LineStream::Stdout && is_log_line(raw) {
                    return Ok(true);
                }
                write_line(wr, raw, self.stream).await?;
                Ok(true)
            }
        }
    }
}

/// Reads `rd` to end-of-stream, splitting on `\n`, and routes every line
/// through the tee and then the sink. Returns the number of lines read.
pub async fn pump_lines<R, W>(
    mut rd: R,
    stream: LineStream,
    tee: Option<LineTee>,
    sink: LineSink<W>,
) -> Result<u64, RunnerError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut router = LineRouter { stream, tee, sink };
    let mut buf = vec![0u8; 16 * 1024];
    let mut line_buf: Vec<u8> = Vec::with_capacity(8 * 1024);
    let mut lines = 0u64;
    // Bytes of `line_buf` already searched for '\n'.
    let mut scanned = 0usize;

    loop {
        let n = rd.read(&mut buf).await.map_err(|source| RunnerError::StreamIo {
            stream: stream.label(),
            source,
        })?;
        if n == 0 {
            break;
        }

        line_buf.extend_from_slice(&buf[..n]);
        let mut start = 0usize;
        while let Some(off) = line_buf[scanned..].iter().position(|&b| b == b'\n') {
            let end = scanned + off;
            lines += 1;
            if !router.deliver(trim_newline(&line_buf[start..end])).await? {
                tracing::debug!(stream = stream.label(), "colorizer closed, stopping reader");
                return Ok(lines);
            }
            start = end + 1;
            scanned = start;
        }
        line_buf.drain(..start);
        scanned = line_buf.len();
    }

    // EOF flush: deliver the last partial line if it doesn't end with '\n'.
    if !line_buf.is_empty() {
        lines += 1;
        router.deliver(trim_newline(&line_buf)).await?;
    }

    tracing::debug!(stream = stream.label(), lines, "stream closed");
    Ok(lines)
}

fn trim_newline(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
