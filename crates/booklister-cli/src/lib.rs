/// booklister CLI — argument parsing, prompts and console output.
///
/// All scanning and exporting lives in `booklister-core`; this crate only
/// assembles a `RunConfig` and prints what the run reports.
pub mod args;
pub mod prompt;
pub mod report;

pub use args::{parse_args, Cli};

use anyhow::{Context, Result};
use booklister_core::{FileErrorPolicy, RunConfig};
use prompt::Prompter;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Merge the config file, flags and prompt answers into a validated config.
///
/// Precedence: flags over the `--config` file; prompts only fill in roots
/// and naming that neither supplied.
pub fn build_config<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_json_file(path)
            .with_context(|| format!("could not load {}", path.display()))?,
        None => RunConfig::default(),
    };
    // A config file decides naming even when it leaves the field at its default.
    let mut naming_decided = cli.config.is_some();

    if !cli.roots.is_empty() {
        config.roots = cli.roots.clone();
    } else if let Some(line) = &cli.paths {
        config.roots = booklister_core::config::parse_roots(line);
    }
    if let Some(naming) = cli.naming() {
        config.naming = naming;
        naming_decided = true;
    }
    if cli.strict {
        config.on_file_error = FileErrorPolicy::Abort;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = Some(dir.clone());
    }

    if config.roots.is_empty() {
        config.roots = prompter.read_roots()?;
    }
    if !naming_decided {
        config.naming = prompter.read_naming()?;
    }

    config.validate().context("invalid run configuration")?;
    debug!("Run configuration: {config:?}");
    Ok(config)
}

/// Run booklister with parsed arguments against stdin/stdout.
pub fn execute(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let config = build_config(cli, &mut prompter)?;
    drop(prompter);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut print_error = None;
    let mut error_events = 0usize;
    let summary = booklister_core::run(&config, &mut |event| {
        if event.is_error() {
            error_events += 1;
        }
        if print_error.is_none() {
            if let Err(err) = report::write_event(&mut out, event) {
                print_error = Some(err);
            }
        }
    });
    if let Some(err) = print_error {
        return Err(err).context("failed to write to stdout");
    }

    if cli.summary {
        report::write_summary(&mut out, &summary).context("failed to write to stdout")?;
    }
    if error_events > 0 {
        warn!(
            "{error_events} error(s) reported; {} of {} directories could not be processed",
            summary.failed_count(),
            summary.roots.len()
        );
    }
    Ok(())
}
