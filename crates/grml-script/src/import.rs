//! Import driver.
//!
//! Walks the script one physical line at a time:
//!
//! 1. skip leading spaces and tabs; a line not starting with `<` followed by
//!    a letter carries no element (`</gr>`, `<?xml ...?>`, blank lines, prose)
//! 2. read the element name and look it up in the schema
//! 3. parse the attributes against the entry's signature and dispatch
//! 4. discard the rest of the line, whatever it contains
//!
//! Only the first element on a line is ever seen. Unknown names and bad
//! attributes abandon the element with one diagnostic; the next line is
//! scanned normally.
//!
//! All scratch state lives in an [`ImportContext`] created per call, so one
//! [`Importer`] can serve any number of concurrent imports.

use memchr::memchr;

use crate::dispatch::dispatch;
use crate::error::{Diagnostic, DiagnosticKind, ImportError, ImportReport};
use crate::frame::ArgFrame;
use crate::graphics::Graphics;
use crate::options::ImportOptions;
use crate::schema::{SchemaEntry, WRAPPER_ELEMENT, lookup};
use crate::source::ByteSource;
use crate::tokenizer::{Origin, parse_attributes};

/// Splits a script into physical lines, dropping the `\n` and a preceding `\r`.
pub(crate) fn lines(script: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = script;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match memchr(b'\n', rest) {
            Some(i) => {
                let line = &rest[..i];
                rest = &rest[i + 1..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    })
}

/// Reusable, stateless import entry point.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    options: ImportOptions,
}

impl Importer {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports an in-memory script, issuing drawing calls on `g`.
    pub fn import<G: Graphics + ?Sized>(&self, script: &[u8], g: &mut G) -> ImportReport {
        let mut ctx = ImportContext::new(&self.options);
        for line in lines(script) {
            ctx.scan_line(line, g);
        }
        ctx.finish()
    }

    /// Reads the whole source, then imports it.
    ///
    /// # Errors
    ///
    /// [`ImportError::SourceUnavailable`] if the source cannot be read. No
    /// drawing call is made in that case.
    pub fn import_from<S, G>(&self, source: S, g: &mut G) -> Result<ImportReport, ImportError>
    where
        S: ByteSource,
        G: Graphics + ?Sized,
    {
        let source_name = source.name();
        let script = source.read_all().map_err(|source| ImportError::SourceUnavailable {
            source_name: source_name.clone(),
            source,
        })?;
        log::debug!("{}: read {} bytes", source_name, script.len());
        Ok(self.import(&script, g))
    }
}

/// Per-run parser state: the argument frame with its list storage, the
/// current line number and the report being built.
pub struct ImportContext<'o, 'a> {
    options: &'o ImportOptions,
    frame: ArgFrame<'a>,
    line_no: usize,
    report: ImportReport,
}

impl<'o, 'a> ImportContext<'o, 'a> {
    pub fn new(options: &'o ImportOptions) -> Self {
        Self {
            options,
            frame: ArgFrame::new(),
            line_no: 0,
            report: ImportReport::default(),
        }
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        if self.options.log_diagnostics {
            log::warn!("{}", diagnostic);
        }
        self.report.diagnostics.push(diagnostic);
    }

    /// Handles one physical line (without its terminator).
    pub fn scan_line<G: Graphics + ?Sized>(&mut self, line: &'a [u8], g: &mut G) {
        self.line_no += 1;
        self.report.lines += 1;

        let indent = line.iter().take_while(|&&b| b == b' ' || b == b'\t').count();
        if line.get(indent) != Some(&b'<') {
            return;
        }
        let name_start = indent + 1;
        if !matches!(line.get(name_start), Some(b) if b.is_ascii_alphabetic()) {
            return;
        }
        let name_end = name_start
            + line[name_start..].iter().take_while(|b| b.is_ascii_alphanumeric()).count();
        let name = &line[name_start..name_end];

        match lookup(name) {
            Some(entry) => {
                let origin = Origin { line: self.line_no, col: name_end + 1 };
                self.element(entry, &line[name_end..], origin, g);
            }
            None if name == WRAPPER_ELEMENT.as_bytes() => {}
            None => {
                let diagnostic = Diagnostic::new(
                    DiagnosticKind::UnknownElement,
                    self.line_no,
                    name_start + 1,
                    format!("{}: unknown XML element", String::from_utf8_lossy(name)),
                );
                self.record(diagnostic);
            }
        }
    }

    fn element<G: Graphics + ?Sized>(
        &mut self,
        entry: &SchemaEntry,
        attrs: &'a [u8],
        origin: Origin,
        g: &mut G,
    ) {
        let mut notes = Vec::new();
        let parsed = parse_attributes(
            attrs,
            entry,
            &mut self.frame,
            origin,
            self.options.validate_attribute_names,
            &mut notes,
        );
        for note in notes {
            self.record(note);
        }

        match parsed {
            Ok(_) => {
                log::trace!("line {}: {}", origin.line, entry.name);
                dispatch(entry.kind, &self.frame, g);
                self.report.dispatched += 1;
            }
            Err(diagnostic) => self.record(diagnostic),
        }
    }

    /// Releases list storage and returns the report.
    pub fn finish(mut self) -> ImportReport {
        self.frame.release();
        log::debug!(
            "import finished: {} lines, {} calls, {} diagnostics",
            self.report.lines,
            self.report.dispatched,
            self.report.diagnostics.len()
        );
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(script: &[u8]) -> Vec<&[u8]> {
        lines(script).collect()
    }

    #[test]
    fn lines_split_on_newline() {
        assert_eq!(collect(b"a\nbc\n"), vec![&b"a"[..], &b"bc"[..]]);
    }

    #[test]
    fn last_line_without_newline() {
        assert_eq!(collect(b"a\nb"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn crlf_is_stripped() {
        assert_eq!(collect(b"a\r\nb\r\n"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(collect(b"\n\nx"), vec![&b""[..], &b""[..], &b"x"[..]]);
    }

    #[test]
    fn empty_script_has_no_lines() {
        assert!(collect(b"").is_empty());
    }
}
