use std::io::Write;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, CountSettings, FileConfigLoader};
use crate::counter::Classifier;
use crate::output::{ErrorOutput, formatter_for};
use crate::source::{CountOutcome, LineSource, count_sources};
use crate::{EXIT_CONFIG_ERROR, EXIT_HELP, EXIT_SUCCESS};

/// Entry point for a counting run. Returns the process exit code.
#[must_use]
pub fn run_count(cli: &Cli) -> i32 {
    let diagnostics = ErrorOutput::new(cli.color.into());

    if cli.help {
        println!("{}", Cli::render_help());
        return EXIT_HELP;
    }

    match run_count_impl(cli, &diagnostics) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            diagnostics.report(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_count_impl(cli: &Cli, diagnostics: &ErrorOutput) -> crate::Result<i32> {
    let config = load_config(cli)?;
    let settings = CountSettings::resolve(&cli.overrides(), &config)?;

    let sources = LineSource::from_paths(&cli.files);
    let outcome = count_with_settings(&settings, &sources, |e| diagnostics.report(e));

    let report = formatter_for(settings.format, settings.verbose).format(&outcome.tally)?;
    write_report(&mut std::io::stdout().lock(), &report)?;

    Ok(EXIT_SUCCESS)
}

/// Write the report. A reader that closed the pipe early (`coco | head`) is
/// not an error; any other write failure is.
fn write_report<W: Write>(w: &mut W, report: &str) -> crate::Result<()> {
    match w.write_all(report.as_bytes()).and_then(|()| w.flush()) {
        Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}

fn load_config(cli: &Cli) -> crate::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match &cli.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Count every source with one classifier built from `settings`.
pub fn count_with_settings<F>(
    settings: &CountSettings,
    sources: &[LineSource],
    on_error: F,
) -> CountOutcome
where
    F: FnMut(&crate::CocoError),
{
    let mut classifier = Classifier::new(&settings.syntax);
    count_sources(sources, &mut classifier, on_error)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
