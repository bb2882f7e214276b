use clap::Parser;
use tracing_subscriber::EnvFilter;

use bite_sized::cli::Cli;
use bite_sized::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and are not failures.
            let exit_code = if e.use_stderr() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_SUCCESS
            };
            // If stderr/stdout is gone there is nowhere left to report to;
            // the exit code still carries the outcome.
            e.print().ok();
            std::process::exit(exit_code);
        }
    };

    init_tracing(cli.verbose);

    std::process::exit(commands::run(&cli));
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
