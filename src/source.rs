use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::counter::{Classifier, LineTally};
use crate::error::CocoError;

const STDIN_NAME: &str = "<stdin>";

/// Where lines are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    Stdin,
    File(PathBuf),
}

impl LineSource {
    /// Sources for the given paths; no paths means standard input.
    #[must_use]
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            vec![Self::Stdin]
        } else {
            paths.iter().cloned().map(Self::File).collect()
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Stdin => Path::new(STDIN_NAME),
            Self::File(path) => path,
        }
    }
}

impl fmt::Display for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

/// Totals after every source has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountOutcome {
    pub tally: LineTally,
    /// Sources that failed to open or stopped early on a read error.
    pub failed_sources: usize,
}

/// Feed every newline-delimited record of `reader` to the classifier.
///
/// The `\n` terminator and a preceding `\r` are stripped. Invalid UTF-8 is
/// replaced rather than rejected. A trailing record without a newline is
/// counted when non-empty.
///
/// Returns the number of lines fed.
///
/// # Errors
/// Returns the first read error. Lines read before it stay counted.
pub fn feed_reader<R: BufRead>(mut reader: R, classifier: &mut Classifier<'_>) -> io::Result<u64> {
    let mut buf = Vec::new();
    let mut fed = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(fed);
        }

        let record = strip_terminator(&buf);
        classifier.classify(&String::from_utf8_lossy(record));
        fed += 1;
    }
}

fn strip_terminator(buf: &[u8]) -> &[u8] {
    match buf.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => buf,
    }
}

/// Count one source into the classifier.
///
/// # Errors
/// `SourceOpen` if a file cannot be opened, `SourceRead` if reading stops
/// early.
pub fn count_source(source: &LineSource, classifier: &mut Classifier<'_>) -> crate::Result<u64> {
    let result = match source {
        LineSource::Stdin => feed_reader(io::stdin().lock(), classifier),
        LineSource::File(path) => {
            let file = File::open(path).map_err(|e| CocoError::SourceOpen {
                path: path.clone(),
                source: e,
            })?;
            feed_reader(BufReader::new(file), classifier)
        }
    };

    result.map_err(|e| CocoError::SourceRead {
        path: source.path().to_path_buf(),
        source: e,
    })
}

/// Count all sources in order against one classifier.
///
/// A failing source is reported through `on_error` and skipped; the rest
/// are still counted.
pub fn count_sources<F>(
    sources: &[LineSource],
    classifier: &mut Classifier<'_>,
    mut on_error: F,
) -> CountOutcome
where
    F: FnMut(&CocoError),
{
    let mut failed_sources = 0;

    for source in sources {
        if let Err(e) = count_source(source, classifier) {
            on_error(&e);
            failed_sources += 1;
        }
    }

    CountOutcome {
        tally: classifier.tally(),
        failed_sources,
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
