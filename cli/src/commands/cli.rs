use std::path::PathBuf;

use clap::Parser;
use nolog_core::config::{InvocationConfig, DEFAULT_GO_BIN, DEFAULT_OUT_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "nolog",
    about = "Run go test with readable output: tee it to a file, hide or colorize [LOG] lines"
)]
pub struct Args {
    /// Also write the raw output to a file.
    #[arg(short = 'f')]
    pub out_to_file: bool,

    /// Output file used with -f.
    #[arg(long = "name", default_value = DEFAULT_OUT_FILE)]
    pub out_file_name: String,

    /// Colorize the output.
    #[arg(short = 'c')]
    pub color: bool,

    /// Run the tests with -test.v=true.
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Filter tests with -gocheck.f (requires gocheck).
    #[arg(long)]
    pub filter: Option<String>,

    #[arg(long, default_value = DEFAULT_GO_BIN)]
    pub go_bin: String,

    /// Forwarded to `go test` as-is.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub go_args: Vec<String>,
}

impl Args {
    pub fn into_config(self) -> InvocationConfig {
        let Args {
            out_to_file,
            out_file_name,
            color,
            verbose,
            filter,
            go_bin,
            go_args,
        } = self;

        InvocationConfig {
            out_file: out_to_file.then(|| PathBuf::from(out_file_name)),
            colorize: color,
            verbose,
            filter,
            passthrough: go_args,
            go_bin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize_go_flags;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> InvocationConfig {
        let argv = std::iter::once("nolog")
            .chain(args.iter().copied())
            .map(String::from);
        Args::parse_from(normalize_go_flags(argv)).into_config()
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]), InvocationConfig::default());
    }

    #[test]
    fn file_flag_uses_default_name() {
        let cfg = parse(&["-f"]);
        assert_eq!(cfg.out_file, Some(PathBuf::from("tests.log")));
    }

    #[test]
    fn name_without_f_does_not_enable_file() {
        let cfg = parse(&["-name", "out.log"]);
        assert_eq!(cfg.out_file, None);
    }

    #[test]
    fn go_style_flags() {
        let cfg = parse(&["-f", "-name=run.log", "-c", "-v", "-filter", "Suite.TestX"]);
        assert_eq!(
            cfg,
            InvocationConfig {
                out_file: Some(PathBuf::from("run.log")),
                colorize: true,
                verbose: true,
                filter: Some("Suite.TestX".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn everything_after_first_positional_passes_through() {
        let cfg = parse(&["-c", "./state/...", "-run", "TestOpen", "-v"]);
        assert!(cfg.colorize);
        assert!(!cfg.verbose);
        assert_eq!(cfg.passthrough, vec!["./state/...", "-run", "TestOpen", "-v"]);
    }

    #[test]
    fn double_dash_ends_flags() {
        let cfg = parse(&["--", "-run", "TestOpen"]);
        assert_eq!(cfg.passthrough, vec!["-run", "TestOpen"]);
    }
}
