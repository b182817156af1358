//! Report encoding and exit status

use crate::error::Error;
use crate::gitlab::CodeQualityEntry;

/// Process exit status derived from the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No findings
    Clean,
    /// At least one finding
    Findings,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Findings => 1,
        }
    }
}

/// Encode the entries as a compact JSON array, without a trailing newline
pub fn render_report(entries: &[CodeQualityEntry]) -> Result<String, Error> {
    serde_json::to_string(entries).map_err(Error::Encode)
}

pub fn exit_status(entries: &[CodeQualityEntry]) -> ExitStatus {
    if entries.is_empty() {
        ExitStatus::Clean
    } else {
        ExitStatus::Findings
    }
}
