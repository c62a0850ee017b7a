use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use go_remove::cli::{self, Dependencies};
use go_remove::core::config::{self, CliOverrides, LogLevel};
use go_remove::fs::RealFs;
use go_remove::logging;
use go_remove::tui::TerminalRunner;

#[derive(Parser)]
#[command(name = "go-remove", about = "Remove Go-installed binaries", version)]
struct Args {
    /// Binary to remove. Opens the interactive selector when omitted.
    binary: Option<String>,

    /// Verbose logging, with a log panel in the selector
    #[arg(short, long)]
    verbose: bool,

    /// Target GOROOT/bin instead of GOBIN or GOPATH/bin
    #[arg(long)]
    goroot: bool,

    /// Minimum log level (only applies with --verbose)
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevel>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = config::load_config(args.config.as_deref())?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            verbose: args.verbose,
            goroot: args.goroot,
            log_level: args.log_level,
        },
    );

    let capture = logging::init(
        resolved.log_level.to_level_filter(),
        resolved.log_file.as_deref(),
    )?;
    log::debug!("Config file: {:?}", file_config);
    log::debug!("Resolved config: {:?}", resolved);

    let deps = Dependencies {
        fs: &RealFs,
        capture: &capture,
    };
    cli::run(&deps, &resolved, args.binary.as_deref(), &mut TerminalRunner)?;
    Ok(())
}
