use clap::Parser;
use nolog_cli::app;
use nolog_cli::commands::cli;
use nolog_cli::utils::normalize_go_flags;
use nolog_core::config::LoggingConfig;
use nolog_core::error::CliError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let argv = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
    let args = cli::Args::parse_from(normalize_go_flags(argv));
    init_tracing(&LoggingConfig::from_env()).map_err(CliError::Logging)?;

    let exit = app::run_app(args).await?;
    Ok(exit)
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 1: any setup, spawn or stream failure
    // 2: usage error (reported by clap before we get here)
    match e {
        CliError::Runner(_) | CliError::Logging(_) => 1,
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    let filter = EnvFilter::try_new(&logging.level).map_err(|e| e.to_string())?;

    // Diagnostics go to stderr only; stdout carries the wrapped command's output.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();

    Ok(())
}
