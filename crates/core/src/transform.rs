//! Projection of staticcheck findings into Code Quality entries

use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::gitlab::{CodeQualityEntry, CodeQualityLocation, CodeQualitySeverity, Lines};
use crate::staticcheck::{parse_entry, StaticcheckEntry};

/// Deduplication key for a finding.
///
/// Code, file, line and column are concatenated with no separator, so
/// `("A1", "/x", 12, 3)` and `("A1", "/x", 1, 23)` collide.
pub fn fingerprint(entry: &StaticcheckEntry) -> String {
    format!(
        "{}{}{}{}",
        entry.code, entry.location.file, entry.location.line, entry.location.column
    )
}

/// Strip one leading `<cwd>/` from `file`, otherwise return it unchanged.
pub fn relative_path(file: &str, cwd: &Path) -> String {
    let prefix = format!("{}/", cwd.to_string_lossy());

    file.strip_prefix(prefix.as_str())
        .unwrap_or(file)
        .to_string()
}

/// Build the Code Quality entry for a single finding
pub fn transform_entry(entry: StaticcheckEntry, cwd: &Path) -> CodeQualityEntry {
    let fingerprint = fingerprint(&entry);
    let path = relative_path(&entry.location.file, cwd);

    CodeQualityEntry {
        check_name: entry.code,
        description: entry.message,
        fingerprint,
        severity: CodeQualitySeverity::from(entry.severity),
        location: CodeQualityLocation {
            path,
            lines: Lines {
                begin: entry.location.line,
            },
        },
    }
}

/// Line-by-line accumulator of Code Quality entries.
///
/// Empty lines are skipped but still counted, so decode errors point at the
/// physical line of the input. The working directory is resolved through
/// `resolve_cwd` once, when the first finding is decoded.
pub struct Transcoder<F> {
    resolve_cwd: F,
    cwd: Option<PathBuf>,
    line: usize,
    entries: Vec<CodeQualityEntry>,
}

impl<F> Transcoder<F>
where
    F: FnMut() -> io::Result<PathBuf>,
{
    pub fn new(resolve_cwd: F) -> Self {
        Self {
            resolve_cwd,
            cwd: None,
            line: 0,
            entries: Vec::new(),
        }
    }

    /// Decode and project one input line.
    ///
    /// Returns the appended entry, or `None` when the line was empty.
    pub fn push(&mut self, line: &str) -> Result<Option<&CodeQualityEntry>, Error> {
        self.line += 1;

        if line.is_empty() {
            return Ok(None);
        }

        let entry = parse_entry(line).map_err(|source| Error::Decode {
            line: self.line,
            source,
        })?;

        let cwd = match self.cwd.take() {
            Some(cwd) => cwd,
            None => (self.resolve_cwd)().map_err(Error::WorkingDirectory)?,
        };

        self.entries.push(transform_entry(entry, &cwd));
        self.cwd = Some(cwd);

        Ok(self.entries.last())
    }

    /// Number of input lines seen so far, empty ones included
    pub fn lines_read(&self) -> usize {
        self.line
    }

    pub fn into_entries(self) -> Vec<CodeQualityEntry> {
        self.entries
    }
}
