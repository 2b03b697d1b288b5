use serde::{Deserialize, Serialize};

/// Errors that stop a document from compiling into a page.
///
/// These are the structural failures: the returned HTML is an error page and
/// `success` is false. Everything softer is reported as a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("{message}")]
    Yaml {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("Expected a mapping at the document root, found {found}")]
    RootNotMapping { found: String },
}

impl CompileError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::Yaml { .. } => "E001",
            CompileError::RootNotMapping { .. } => "E002",
        }
    }

    /// Convert this error into an error-severity diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let path = match self {
            CompileError::Yaml {
                line: Some(line),
                column,
                ..
            } => Some(match column {
                Some(col) => format!("line {line}, column {col}"),
                None => format!("line {line}"),
            }),
            _ => None,
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.to_string(),
            path,
            code: Some(self.code().into()),
        }
    }
}

impl From<serde_yaml::Error> for CompileError {
    fn from(err: serde_yaml::Error) -> Self {
        let location = err.location();
        CompileError::Yaml {
            message: err.to_string(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
        }
    }
}

/// A diagnostic message produced while lowering or validating a document.
///
/// Diagnostics are non-fatal: the compiler keeps going and still produces a
/// full page when only diagnostics are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Dotted location inside the document, e.g. `body.children[2].items`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Diagnostic {
    pub(crate) fn warning(path: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            path: Some(path.to_string()),
            code: Some(code.to_string()),
        }
    }

    pub(crate) fn info(path: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            path: Some(path.to_string()),
            code: Some(code.to_string()),
        }
    }

    pub(crate) fn error(path: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            path: Some(path.to_string()),
            code: Some(code.to_string()),
        }
    }
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn yaml_error_keeps_parser_message() {
        let err = serde_yaml::from_str::<serde_yaml::Value>("a: [1, 2").unwrap_err();
        let expected = err.to_string();
        let compile_err = CompileError::from(err);
        assert_eq!(compile_err.to_string(), expected);
        assert_eq!(compile_err.code(), "E001");
    }

    #[test]
    fn yaml_error_diagnostic_carries_location() {
        let err = CompileError::Yaml {
            message: "boom".into(),
            line: Some(3),
            column: Some(7),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.path.as_deref(), Some("line 3, column 7"));
        assert_eq!(diag.code.as_deref(), Some("E001"));
    }

    #[test]
    fn root_error_message() {
        let err = CompileError::RootNotMapping {
            found: "a boolean".into(),
        };
        assert_eq!(
            err.to_string(),
            "Expected a mapping at the document root, found a boolean"
        );
    }

    #[test]
    fn diagnostic_serializes_lowercase_severity() {
        let diag = Diagnostic::warning("body", "L001", "odd");
        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"path\":\"body\""));
    }
}
