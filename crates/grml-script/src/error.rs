use std::fmt;

use thiserror::Error;

/// Fatal import failure. Nothing is drawn when this is returned.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{source_name}: can't import graphics script")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Category of a recoverable problem found while importing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DiagnosticKind {
    /// Element name absent from the schema (and not the wrapper element).
    UnknownElement,
    /// Missing `=`, or a missing opening or closing quote.
    MalformedAttribute,
    /// The element ended before its signature was exhausted.
    MissingAttribute,
    /// Validation mode only: attribute name differs from the reference ordering.
    AttributeNameMismatch,
    /// More list-valued float attributes than there are list slots.
    ListSlotOverflow,
}

/// A non-fatal problem in the script. The driver records it and moves on
/// to the next line.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line number.
    pub line: usize,
    /// 1-based byte column.
    pub col: usize,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, line: usize, col: usize, msg: impl Into<String>) -> Self {
        Self { kind, line, col, message: msg.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}:{}: {}", self.line, self.col, self.message)
    }
}

/// Outcome of one import run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Physical lines scanned.
    pub lines: usize,
    /// Drawing calls issued.
    pub dispatched: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ImportReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}
