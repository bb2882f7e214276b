use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::cli::Cli;
use crate::config::{CheckConfig, Config, ConfigLoader, FileConfigLoader};
use crate::error::{BiteSizedError, Result};
use crate::inspector::{InspectionRecord, Inspector};
use crate::output::{NEWLINE, report, write_ignore_summary};
use crate::pattern::{IgnorePatterns, LineMatcher};
use crate::scanner::GlobResolver;
use crate::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

pub const FAILURE_MESSAGE: &str = "One or more input files failed the checks.";

#[must_use]
pub fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_CHECKS_FAILED,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> Result<bool> {
    // 1. Load configuration
    let loader = FileConfigLoader::new();
    let mut settings = load_config(&loader, cli.config.as_deref(), cli.no_config)?.check;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut settings, cli);

    // 3. Inspect relative to the working directory
    let cwd = std::env::current_dir()?;
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    run_check(&settings, &cwd, &mut stdout, &mut stderr)
}

/// Load the explicit config file, the local one, or nothing at all.
///
/// # Errors
/// Returns an error if a config file is present but unreadable or invalid.
pub fn load_config<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// `--inputs` replaces the configured inputs; excludes and ignore patterns
/// add to the configured ones; limits override.
pub fn apply_cli_overrides(settings: &mut CheckConfig, cli: &Cli) {
    if !cli.inputs.is_empty() {
        settings.inputs.clone_from(&cli.inputs);
    }
    settings.excludes.extend(cli.excludes.iter().cloned());
    settings
        .ignore_lines_matching
        .extend(cli.ignore_lines_matching.iter().cloned());

    if let Some(max_line_length) = cli.max_line_length {
        settings.max_line_length = max_line_length;
    }
    if let Some(max_lines_in_file) = cli.max_lines_in_file {
        settings.max_lines_in_file = max_lines_in_file;
    }
}

/// Inspect and report every file matched by `settings`, relative to `root`.
///
/// Returns `true` if every file passed. Invalid ignore patterns are reported
/// on `stderr` and skipped.
///
/// # Errors
/// Returns an error if no inputs are configured, a glob is invalid, a file
/// cannot be read, or writing the report fails.
pub fn run_check<O: Write, E: Write>(
    settings: &CheckConfig,
    root: &Path,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<bool> {
    if settings.inputs.is_empty() {
        return Err(BiteSizedError::Config(
            "Option '--inputs' is required (or set `inputs` under [check] in .bite-sized.toml)"
                .to_string(),
        ));
    }

    let resolver = GlobResolver::with_excludes(root, &settings.inputs, &settings.excludes)?;

    let (ignore, rejected) = IgnorePatterns::compile(&settings.ignore_lines_matching);
    for err in &rejected {
        write!(stderr, "Warning: {err}{NEWLINE}")?;
    }

    let inspector = Inspector::new(settings.max_line_length, &ignore);
    let mut success = true;

    for path in resolver.resolve() {
        let record = inspect_file(&inspector, &root.join(&path))?;
        tracing::debug!(
            path = %path.display(),
            lines = record.line_count(),
            too_long = record.lines_too_long().len(),
            "inspected"
        );

        let passed = report(
            &path,
            &record,
            settings.max_line_length,
            settings.max_lines_in_file,
            stdout,
        )?;
        success &= passed;
    }

    if !success {
        if !ignore.is_empty() {
            write_ignore_summary(&ignore, stdout)?;
        }
        write!(stderr, "{FAILURE_MESSAGE}{NEWLINE}")?;
    }

    Ok(success)
}

fn inspect_file<M: LineMatcher + ?Sized>(
    inspector: &Inspector<'_, M>,
    path: &Path,
) -> Result<InspectionRecord> {
    let file = File::open(path).map_err(|source| BiteSizedError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    inspector
        .inspect_reader(BufReader::new(file))
        .map_err(|source| BiteSizedError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
