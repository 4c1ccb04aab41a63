use std::path::PathBuf;

pub const DEFAULT_OUT_FILE: &str = "tests.log";
pub const DEFAULT_GO_BIN: &str = "go";

/// Everything one invocation needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    /// When set, raw lines from both streams are also written here.
    pub out_file: Option<PathBuf>,
    pub colorize: bool,
    pub verbose: bool,
    /// Test-name filter forwarded as `-gocheck.f`.
    pub filter: Option<String>,
    pub passthrough: Vec<String>,
    pub go_bin: String,
}

impl Default for InvocationConfig {
    fn default() -> Self {
        Self {
            out_file: None,
            colorize: false,
            verbose: false,
            filter: None,
            passthrough: Vec::new(),
            go_bin: DEFAULT_GO_BIN.to_string(),
        }
    }
}

impl InvocationConfig {
    /// The filter, treating an empty string as no filter.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// EnvFilter string, e.g. "warn" or "nolog_core=debug".
    pub level: String,
}

fn default_logging_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_logging_level(),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `NOLOG_LOG` wins over `RUST_LOG`; blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = ["NOLOG_LOG", "RUST_LOG"]
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .unwrap_or_else(default_logging_level);
        Self { level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_counts_as_absent() {
        let cfg = InvocationConfig {
            filter: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(cfg.filter(), None);
    }

    #[test]
    fn logging_level_prefers_nolog_log() {
        let cfg = LoggingConfig::from_lookup(|key| match key {
            "NOLOG_LOG" => Some("debug".into()),
            "RUST_LOG" => Some("trace".into()),
            _ => None,
        });
        assert_eq!(cfg.level, "debug");
    }

    #[test]
    fn logging_level_skips_blank_values() {
        let cfg = LoggingConfig::from_lookup(|key| match key {
            "NOLOG_LOG" => Some("  ".into()),
            "RUST_LOG" => Some("info".into()),
            _ => None,
        });
        assert_eq!(cfg.level, "info");

        let cfg = LoggingConfig::from_lookup(|_| None);
        assert_eq!(cfg.level, "warn");
    }
}
