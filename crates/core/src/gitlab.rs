//! Records of the GitLab Code Quality report
//!
//! Only the fields GitLab requires are produced, see
//! <https://docs.gitlab.com/ee/ci/testing/code_quality.html#implement-a-custom-tool>.

use serde::Serialize;

use crate::staticcheck::StaticcheckSeverity;

/// Severity vocabulary understood by GitLab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum CodeQualitySeverity {
    Info,
    Minor,
    Major,
    /// Unmapped value, written out unchanged
    Other(String),
}

impl From<CodeQualitySeverity> for String {
    fn from(value: CodeQualitySeverity) -> Self {
        match value {
            CodeQualitySeverity::Info => "info".to_string(),
            CodeQualitySeverity::Minor => "minor".to_string(),
            CodeQualitySeverity::Major => "major".to_string(),
            CodeQualitySeverity::Other(other) => other,
        }
    }
}

/// Fixed staticcheck to GitLab translation.
///
/// `ignored -> info`, `warning -> minor`, `error -> major`. Any other value
/// passes through unchanged, even when it happens to be a GitLab word.
impl From<StaticcheckSeverity> for CodeQualitySeverity {
    fn from(value: StaticcheckSeverity) -> Self {
        match value {
            StaticcheckSeverity::Ignored => CodeQualitySeverity::Info,
            StaticcheckSeverity::Warning => CodeQualitySeverity::Minor,
            StaticcheckSeverity::Error => CodeQualitySeverity::Major,
            StaticcheckSeverity::Other(other) => CodeQualitySeverity::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lines {
    pub begin: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeQualityLocation {
    /// Path relative to the repository root
    pub path: String,
    pub lines: Lines,
}

/// One entry of the Code Quality report array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeQualityEntry {
    pub check_name: String,
    pub description: String,
    pub fingerprint: String,
    pub severity: CodeQualitySeverity,
    pub location: CodeQualityLocation,
}
