use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bite-sized")]
#[command(
    author,
    version,
    about = "Checks that the code is bite-sized in width (line length) and height (number of lines)"
)]
#[command(long_about = "Checks that the code is bite-sized in width (line length) \
    and height (number of lines).\n\n\
    Settings may also come from a .bite-sized.toml file in the current directory.\n\n\
    Exit codes:\n  \
    0 - All input files passed\n  \
    1 - One or more files failed the checks, or the arguments were invalid")]
pub struct Cli {
    /// Glob patterns of the files to be inspected
    #[arg(short, long, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Glob patterns of the files to be excluded from inspection
    #[arg(short, long, num_args = 1..)]
    pub excludes: Vec<String>,

    /// Ignore lines matching the regular expression(s)
    #[arg(long, num_args = 1..)]
    pub ignore_lines_matching: Vec<String>,

    /// Maximum allowed line length [default: 120]
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Maximum number of lines allowed in a file [default: 2000]
    #[arg(long)]
    pub max_lines_in_file: Option<usize>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
