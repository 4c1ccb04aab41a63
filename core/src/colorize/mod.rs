//! Colorization of captured test output: a per-character tokenizer plus the
//! field extractor for `[LOG]` lines.
mod log_line;
mod palette;
mod styled;
mod tokenizer;

pub use log_line::{format_log_line, next_word, split_log_line, LogFields, LOG_MARKER};
pub use palette::{Role, Severity};
pub use styled::{Fragment, StyledLine};
pub use tokenizer::{tokenize, Tokenizer};

/// Styling applied to a line read from the wrapped command's stdout.
pub fn colorize_stdout_line(line: &str) -> StyledLine {
    format_log_line(line)
}

/// Styling applied to a line read from the wrapped command's stderr.
pub fn colorize_stderr_line(line: &str) -> StyledLine {
    let mut out = StyledLine::new();
    out.push(Some(Role::ErrorLine), line);
    out
}

/// Whether a raw line carries the structured-log marker.
pub fn is_log_line(line: &[u8]) -> bool {
    line.starts_with(LOG_MARKER.as_bytes())
}
