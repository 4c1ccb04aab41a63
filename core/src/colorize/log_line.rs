use super::palette::{Role, Severity};
use super::styled::StyledLine;
use super::tokenizer::tokenize;

/// Leading marker of a structured log line, e.g.
/// `[LOG] 0:00.003 INFO a.package body`.
pub const LOG_MARKER: &str = "[LOG]";

/// Skips leading spaces, then splits at the first single space.
/// Without a separator the whole input is the word and the rest is empty.
pub fn next_word(s: &str) -> (&str, &str) {
    let s = s.trim_start_matches(' ');
    s.split_once(' ').unwrap_or((s, ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogFields<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub package: &'a str,
    pub body: &'a str,
}

pub fn split_log_line(line: &str) -> Option<LogFields<'_>> {
    if !line.starts_with(LOG_MARKER) {
        return None;
    }
    let (_marker, rest) = next_word(line);
    let (timestamp, rest) = next_word(rest);
    let (level, rest) = next_word(rest);
    let (package, body) = next_word(rest);
    Some(LogFields {
        timestamp,
        level,
        package,
        body,
    })
}

fn heading() -> StyledLine {
    let mut out = StyledLine::new();
    out.push(Some(Role::HeadingBracket), "[");
    out.push(Some(Role::HeadingLabel), "LOG");
    out.push(Some(Role::HeadingBracket), "]");
    out
}

/// Decorates a stdout line. `[LOG]` lines get their fields styled before the
/// body is tokenized; any other line is tokenized whole.
pub fn format_log_line(line: &str) -> StyledLine {
    let Some(fields) = split_log_line(line) else {
        return tokenize(line);
    };

    let (level_role, level) = match Severity::from_token(fields.level) {
        Some(sev) => (Some(Role::Level(sev)), sev.label()),
        None => (None, fields.level),
    };

    let mut out = heading();
    push_field(&mut out, Some(Role::Timestamp), fields.timestamp);
    push_field(&mut out, level_role, level);
    push_field(&mut out, Some(Role::Package), fields.package);
    if !fields.body.is_empty() {
        out.push(None, " ");
        out.append(tokenize(fields.body));
    }
    out
}

/// Empty fields add neither text nor a separator.
fn push_field(out: &mut StyledLine, role: Option<Role>, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push(None, " ");
    out.push(role, text);
}
