use logpuzzle_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Bare invocation: usage and exit 1, before anything touches disk.
    if std::env::args_os().len() <= 1 {
        cli::exit_with_usage();
    }

    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("logpuzzle error: {:#}", err);
        std::process::exit(1);
    }
}
