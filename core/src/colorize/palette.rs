use crossterm::style::{ContentStyle, Stylize};

/// Severity categories recognised in the level field of a `[LOG]` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Error,
    Info,
    Warn,
}

impl Severity {
    /// Match order matters: the first category whose name prefixes the token wins.
    const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Error,
        Severity::Info,
        Severity::Warn,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Error => "ERROR",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
        }
    }

    /// Case-sensitive prefix match, so `ERRORS` is still an error.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|sev| token.starts_with(sev.label()))
    }
}

/// What a piece of a decorated line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Bracket,
    Quote,
    KvNumber,
    KvSeparator,
    StringContent,
    EscapeMarker,
    Escaped,
    HeadingBracket,
    HeadingLabel,
    Timestamp,
    Level(Severity),
    Package,
    ErrorLine,
}

impl Role {
    pub fn style(self) -> ContentStyle {
        let s = ContentStyle::new();
        match self {
            Role::Bracket => s.dark_blue(),
            Role::Quote => s.dark_blue().bold().italic(),
            Role::KvNumber => s.dark_yellow().bold(),
            Role::KvSeparator => s.grey().bold().italic(),
            Role::StringContent => s.grey().bold(),
            Role::EscapeMarker => s.dark_cyan().bold(),
            Role::Escaped => s.dark_magenta().bold(),
            Role::HeadingBracket => s.grey().bold(),
            Role::HeadingLabel => s.dark_yellow().bold(),
            Role::Timestamp => s.dark_red().italic(),
            Role::Level(Severity::Debug) => s.dark_cyan(),
            Role::Level(Severity::Error) => s.dark_red(),
            Role::Level(Severity::Info) => s.dark_green(),
            Role::Level(Severity::Warn) => s.dark_magenta(),
            Role::Package => s.grey().italic().bold(),
            Role::ErrorLine => s.dark_green().underlined(),
        }
    }
}
