use crate::prelude::{eprintln, *};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use staticcheck_gitlab_core::report::{exit_status, render_report, ExitStatus};
use staticcheck_gitlab_core::transform::Transcoder;

/// Module entry point
pub fn run(_app: crate::App) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let status = transcode(stdin.lock(), stdout.lock(), || {
        let cwd = working_dir()?;
        log::debug!("Resolving paths relative to {}", cwd.display());
        Ok(cwd)
    })?;

    Ok(ExitCode::from(status.code()))
}

/// Working directory as the invoking shell reports it.
///
/// `$PWD` is used when it is absolute and names the same directory as the
/// physical path, so findings under a symlinked checkout stay relative.
fn working_dir() -> io::Result<PathBuf> {
    let physical = std::env::current_dir()?;
    Ok(logical_dir(std::env::var_os("PWD").map(PathBuf::from), physical))
}

fn logical_dir(pwd: Option<PathBuf>, physical: PathBuf) -> PathBuf {
    match pwd {
        Some(pwd) if pwd.is_absolute() && same_dir(&pwd, &physical) => pwd,
        _ => physical,
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Read staticcheck lines from `input` and write the report to `output`.
///
/// `resolve_cwd` is only called once a finding has been decoded. Decode, read
/// and working directory failures abort before anything is written. A failure
/// to encode the report is only printed to stderr, the status still reflects
/// the number of findings.
pub fn transcode<R, W, F>(input: R, mut output: W, resolve_cwd: F) -> Result<ExitStatus>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> io::Result<PathBuf>,
{
    let mut transcoder = Transcoder::new(resolve_cwd);

    for line in input.lines() {
        let line = line.context("Failed to read line from stdin")?;
        let number = transcoder.lines_read() + 1;

        if let Some(entry) = transcoder.push(&line)? {
            log::trace!(
                "Line {number}: {} at {}",
                entry.check_name,
                entry.location.path
            );
        }
    }

    let entries = transcoder.into_entries();
    log::debug!("Collected {} findings", entries.len());

    let report = match render_report(&entries) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            String::new()
        }
    };

    writeln!(output, "{report}").context("Failed to write report to stdout")?;
    output.flush().context("Failed to flush stdout")?;

    Ok(exit_status(&entries))
}
