//! Records emitted by `staticcheck -f json`
//!
//! Staticcheck writes one JSON object per finding, one finding per line.
//! Missing fields decode to their zero value; a field of the wrong type is a
//! decode error.

use serde::Deserialize;

/// Severity vocabulary used by staticcheck.
///
/// See `lintcmd/lint.go` in `dominikh/go-tools` for the emitting side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StaticcheckSeverity {
    Ignored,
    Warning,
    Error,
    /// Anything staticcheck may add later, kept verbatim
    Other(String),
}

impl Default for StaticcheckSeverity {
    fn default() -> Self {
        StaticcheckSeverity::Other(String::new())
    }
}

impl From<String> for StaticcheckSeverity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ignored" => StaticcheckSeverity::Ignored,
            "warning" => StaticcheckSeverity::Warning,
            "error" => StaticcheckSeverity::Error,
            _ => StaticcheckSeverity::Other(value),
        }
    }
}

/// Position inside a source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaticcheckLocation {
    pub file: String,
    pub line: i64,
    pub column: i64,
}

/// A single staticcheck finding
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaticcheckEntry {
    pub code: String,
    pub severity: StaticcheckSeverity,
    pub location: StaticcheckLocation,
    /// Decoded for completeness, the report only uses `location`
    pub end: Option<StaticcheckLocation>,
    pub message: String,
}

/// Decode one line of staticcheck output
pub fn parse_entry(line: &str) -> Result<StaticcheckEntry, serde_json::Error> {
    serde_json::from_str(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // parse_entry tests
    // ============================================================================

    #[test]
    fn test_parse_entry_full() {
        let line = r#"{"code":"SA1000","severity":"error","location":{"file":"/src/main.go","line":12,"column":7},"end":{"file":"/src/main.go","line":12,"column":19},"message":"error parsing regexp"}"#;
        let entry = parse_entry(line).unwrap();

        assert_eq!(entry.code, "SA1000");
        assert_eq!(entry.severity, StaticcheckSeverity::Error);
        assert_eq!(entry.location.file, "/src/main.go");
        assert_eq!(entry.location.line, 12);
        assert_eq!(entry.location.column, 7);
        assert_eq!(entry.end.unwrap().column, 19);
        assert_eq!(entry.message, "error parsing regexp");
    }

    #[test]
    fn test_parse_entry_ignores_unknown_fields() {
        let line = r#"{"code":"S1002","severity":"warning","location":{"file":"a.go","line":1,"column":1,"offset":4},"message":"m","related":[]}"#;
        let entry = parse_entry(line).unwrap();

        assert_eq!(entry.code, "S1002");
        assert_eq!(entry.location.file, "a.go");
    }

    #[test]
    fn test_parse_entry_missing_fields_default() {
        let entry = parse_entry(r#"{"code":"U1000"}"#).unwrap();

        assert_eq!(entry.code, "U1000");
        assert_eq!(entry.severity, StaticcheckSeverity::Other(String::new()));
        assert_eq!(entry.location, StaticcheckLocation::default());
        assert!(entry.end.is_none());
    }

    #[test]
    fn test_parse_entry_null_end() {
        let entry = parse_entry(r#"{"code":"U1000","end":null}"#).unwrap();
        assert!(entry.end.is_none());
    }

    #[test]
    fn test_parse_entry_invalid_json() {
        assert!(parse_entry("{not json").is_err());
    }

    #[test]
    fn test_parse_entry_wrong_type() {
        let line = r#"{"code":"SA1000","location":{"file":"a.go","line":"ten","column":1}}"#;
        assert!(parse_entry(line).is_err());
    }

    #[test]
    fn test_parse_entry_not_an_object() {
        assert!(parse_entry("[1, 2]").is_err());
    }

    // ============================================================================
    // StaticcheckSeverity tests
    // ============================================================================

    #[test]
    fn test_severity_known_values() {
        assert_eq!(
            StaticcheckSeverity::from("ignored".to_string()),
            StaticcheckSeverity::Ignored
        );
        assert_eq!(
            StaticcheckSeverity::from("warning".to_string()),
            StaticcheckSeverity::Warning
        );
        assert_eq!(
            StaticcheckSeverity::from("error".to_string()),
            StaticcheckSeverity::Error
        );
    }

    #[test]
    fn test_severity_is_case_sensitive() {
        assert_eq!(
            StaticcheckSeverity::from("Error".to_string()),
            StaticcheckSeverity::Other("Error".to_string())
        );
    }
}
