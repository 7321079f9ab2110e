//! Diagnostics and error reporting for shell simulations
//!
//! This module provides the types used to report problems found in a
//! parameter set before a run, and helpers to format errors for users.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single finding about a parameter set
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    /// Name of the offending parameter, when the finding is about one
    pub parameter: Option<&'static str>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, parameter: Option<&'static str>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            message: message.into(),
            parameter,
        }
    }

    pub fn warning(message: impl Into<String>, parameter: Option<&'static str>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            parameter,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// Ordered collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| !d.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any diagnostic refers to `parameter`
    pub fn mentions(&self, parameter: &str) -> bool {
        self.items.iter().any(|d| d.parameter == Some(parameter))
    }
}

/// Only errors are listed; warnings never block a run.
impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors().map(|d| d.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Format an error together with its chain of sources
pub fn format_error(error: &dyn std::error::Error) -> String {
    let mut msg = format!("Error: {}", error);
    let mut source = error.source();
    while let Some(cause) = source {
        msg.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    msg
}
