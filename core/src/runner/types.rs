use super::io_pump::LineStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub exit_code: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerStartArgs {
    pub cmd: String,
    pub args: Vec<String>,
}

/// What a finished run observed. The child's exit code is informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub stdout_lines: u64,
    pub stderr_lines: u64,
    pub exit_code: Option<i32>,
}

impl RunSummary {
    pub(crate) fn record_lines(&mut self, stream: LineStream, lines: u64) {
        match stream {
            LineStream::Stdout => self.stdout_lines = lines,
            LineStream::Stderr => self.stderr_lines = lines,
        }
    }
}
