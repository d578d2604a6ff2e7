//! Positional attribute tokenizer.
//!
//! Reads `name="value"` pairs left to right and binds the n-th pair to the
//! n-th position of the element's signature. The attribute name is scanned
//! only to find `="`; it never selects a position. Producers depend on this
//! ordering, so an element written as `<polyline y="..." x="..." n="3"/>` still
//! binds the first value as the count.
//!
//! Running out of attributes before the signature is exhausted does not
//! dispatch: the element is reported as [`DiagnosticKind::MissingAttribute`]
//! and skipped, so unfilled slots never reach a drawing call.
//!
//! The tokenizer only ever sees the current line. A value whose closing quote
//! is missing on that line is malformed; it is never continued onto the next.

use memchr::memchr;

use crate::error::{Diagnostic, DiagnosticKind};
use crate::frame::ArgFrame;
use crate::lenient::{parse_float, parse_int};
use crate::schema::{SchemaEntry, TypeTag};

/// Bytes separating numbers inside a list-valued attribute.
#[inline]
fn is_list_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'"')
}

fn list_tokens(value: &[u8]) -> impl Iterator<Item = &[u8]> {
    value.split(|&b| is_list_delimiter(b)).filter(|t| !t.is_empty())
}

/// Where the text handed to the tokenizer starts in the script.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Origin {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the first byte.
    pub col: usize,
}

struct AttrTokenizer<'a> {
    src: &'a [u8],
    pos: usize,
    origin: Origin,
}

impl<'a> AttrTokenizer<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn diag(&self, kind: DiagnosticKind, msg: impl Into<String>) -> Diagnostic {
        Diagnostic::new(kind, self.origin.line, self.origin.col + self.pos, msg)
    }

    /// Scans one attribute. `Ok(None)` means no further attribute starts here.
    fn next_attribute(&mut self) -> Result<Option<(&'a [u8], &'a [u8])>, Diagnostic> {
        self.advance_while(|b| b.is_ascii_whitespace());
        if !matches!(self.peek(), Some(b) if b.is_ascii_alphabetic()) {
            return Ok(None);
        }
        let name = self.advance_while(|b| b.is_ascii_alphanumeric());

        if !self.eat(b'=') {
            return Err(self.diag(DiagnosticKind::MalformedAttribute, "'=' expected"));
        }
        if !self.eat(b'"') {
            return Err(self.diag(DiagnosticKind::MalformedAttribute, "'\"' expected"));
        }
        let Some(len) = memchr(b'"', &self.src[self.pos..]) else {
            return Err(self.diag(DiagnosticKind::MalformedAttribute, "closing '\"' expected"));
        };
        let value = &self.src[self.pos..self.pos + len];
        self.pos += len + 1;
        Ok(Some((name, value)))
    }
}

/// Fills `frame` from the attribute text of one element.
///
/// `text` is the remainder of the line after the element name. On success
/// returns the offset just past the last attribute consumed. Name mismatches
/// found in validation mode are pushed to `notes` and do not stop parsing.
///
/// # Errors
///
/// Returns the diagnostic that abandons the element: a malformed attribute,
/// a signature position with no attribute, or a float-list slot overflow.
pub fn parse_attributes<'a>(
    text: &'a [u8],
    entry: &SchemaEntry,
    frame: &mut ArgFrame<'a>,
    origin: Origin,
    validate_names: bool,
    notes: &mut Vec<Diagnostic>,
) -> Result<usize, Diagnostic> {
    frame.begin();
    let mut tok = AttrTokenizer { src: text, pos: 0, origin };

    for &(expected, tag) in entry.params {
        let attr_col = origin.col + tok.pos;
        let Some((name, value)) = tok.next_attribute()? else {
            return Err(tok.diag(
                DiagnosticKind::MissingAttribute,
                format!("{}: missing attribute '{}'", entry.name, expected),
            ));
        };

        if validate_names && name != expected.as_bytes() {
            notes.push(Diagnostic::new(
                DiagnosticKind::AttributeNameMismatch,
                origin.line,
                attr_col,
                format!(
                    "{}: attribute '{}' where '{}' was expected",
                    entry.name,
                    String::from_utf8_lossy(name),
                    expected
                ),
            ));
        }

        match tag {
            TypeTag::Int => frame.push_int(parse_int(value)),
            TypeTag::Float => frame.push_float(parse_float(value)),
            TypeTag::Str => frame.push_string(String::from_utf8_lossy(value)),
            TypeTag::IntList => {
                let list = frame.int_list_mut();
                for t in list_tokens(value) {
                    list.push(parse_int(t));
                }
            }
            TypeTag::FloatList => {
                let list = frame.next_float_list().map_err(|overflow| {
                    Diagnostic::new(
                        DiagnosticKind::ListSlotOverflow,
                        origin.line,
                        attr_col,
                        format!("{}: {}", entry.name, overflow),
                    )
                })?;
                for t in list_tokens(value) {
                    list.push(parse_float(t));
                }
            }
        }
    }

    Ok(tok.pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaEntry, lookup};

    const AT: Origin = Origin { line: 1, col: 10 };

    fn entry(name: &str) -> &'static SchemaEntry {
        lookup(name.as_bytes()).unwrap()
    }

    fn parse<'a>(
        name: &str,
        text: &'a str,
        frame: &mut ArgFrame<'a>,
    ) -> Result<usize, Diagnostic> {
        parse_attributes(text.as_bytes(), entry(name), frame, AT, false, &mut Vec::new())
    }

    #[test]
    fn scalars_in_signature_order() {
        let mut frame = ArgFrame::new();
        parse("setspace", r#" zmin="0.5" zmax="2" rotation="30" tilt="60"/>"#, &mut frame).unwrap();
        assert_eq!(frame.float_count(), 2);
        assert_eq!(frame.float(0), 0.5);
        assert_eq!(frame.float(1), 2.0);
        assert_eq!(frame.int(0), 30);
        assert_eq!(frame.int(1), 60);
    }

    #[test]
    fn returns_offset_past_attributes() {
        let mut frame = ArgFrame::new();
        let text = r#" width="2.5"/>"#;
        let end = parse("setlinewidth", text, &mut frame).unwrap();
        assert_eq!(&text[end..], "/>");
    }

    #[test]
    fn string_borrows_input() {
        let mut frame = ArgFrame::new();
        let text = r#" x="0.1" y="0.2" string="hello world"/>"#;
        parse("text", text, &mut frame).unwrap();
        assert_eq!(frame.string(0), "hello world");
        let range = text.as_bytes().as_ptr_range();
        assert!(range.contains(&frame.string(0).as_ptr()));
    }

    #[test]
    fn names_are_not_load_bearing() {
        let mut a = ArgFrame::new();
        let mut b = ArgFrame::new();
        parse("polyline", r#" n="3" x="1 2 3" y="4 5 6"/>"#, &mut a).unwrap();
        parse("polyline", r#" y="3" n="1 2 3" x="4 5 6"/>"#, &mut b).unwrap();
        assert_eq!(a.int(0), b.int(0));
        assert_eq!(a.float_list(0), b.float_list(0));
        assert_eq!(a.float_list(1), b.float_list(1));
    }

    #[test]
    fn float_lists_take_successive_slots() {
        let mut frame = ArgFrame::new();
        parse("herrorbars", r#" n="2" x="1 2" y="3 4" e1="0.1 0.2" e2="0.3 0.4"/>"#, &mut frame)
            .unwrap();
        assert_eq!(frame.float_lists_used(), 4);
        assert_eq!(frame.float_list(0), &[1.0, 2.0]);
        assert_eq!(frame.float_list(1), &[3.0, 4.0]);
        assert_eq!(frame.float_list(2), &[0.1, 0.2]);
        assert_eq!(frame.float_list(3), &[0.3, 0.4]);
    }

    #[test]
    fn int_list_with_tabs_and_lenient_tokens() {
        let mut frame = ArgFrame::new();
        parse(
            "drawimage",
            " xmin=\"0\" xmax=\"1\" ymin=\"0\" ymax=\"1\" width=\"2\" height=\"2\" data=\"\t1  2\tz 4 \"/>",
            &mut frame,
        )
        .unwrap();
        assert_eq!(frame.int_list(), &[1, 2, 0, 4]);
    }

    #[test]
    fn lists_reset_between_elements() {
        let mut frame = ArgFrame::new();
        parse("polyline", r#" n="3" x="1 2 3" y="4 5 6""#, &mut frame).unwrap();
        parse("polyline", r#" n="1" x="9" y="8""#, &mut frame).unwrap();
        assert_eq!(frame.float_list(0), &[9.0]);
        assert_eq!(frame.float_list(1), &[8.0]);
    }

    #[test]
    fn empty_signature_consumes_nothing() {
        let mut frame = ArgFrame::new();
        assert_eq!(parse("colormap", "/>", &mut frame).unwrap(), 0);
    }

    #[test]
    fn unterminated_quote_is_malformed() {
        let mut frame = ArgFrame::new();
        let err = parse("text", r#" x="1" y="2" s="unterminated/>"#, &mut frame).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::MalformedAttribute);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn missing_equals_is_malformed() {
        let mut frame = ArgFrame::new();
        let err = parse("setlinewidth", r#" width 2"/>"#, &mut frame).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::MalformedAttribute);
        assert_eq!(err.col, AT.col + 6);
    }

    #[test]
    fn missing_open_quote_is_malformed() {
        let mut frame = ArgFrame::new();
        let err = parse("setlinewidth", " width=2/>", &mut frame).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::MalformedAttribute);
    }

    #[test]
    fn short_element_reports_missing_attribute() {
        let mut frame = ArgFrame::new();
        let err = parse("polyline", r#" n="3" x="1 2 3"/>"#, &mut frame).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::MissingAttribute);
        assert!(err.message.contains("'y'"));
    }

    #[test]
    fn validation_reports_mismatch_without_changing_binding() {
        let mut frame = ArgFrame::new();
        let mut notes = Vec::new();
        parse_attributes(
            br#" w="2.5"/>"#,
            entry("setlinewidth"),
            &mut frame,
            AT,
            true,
            &mut notes,
        )
        .unwrap();
        assert_eq!(frame.float(0), 2.5);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, DiagnosticKind::AttributeNameMismatch);
        assert_eq!(notes[0].col, AT.col + 1);
    }

    #[test]
    fn validation_quiet_on_reference_names() {
        let mut frame = ArgFrame::new();
        let mut notes = Vec::new();
        parse_attributes(
            br#" n="2" x="1 2" y="3 4"/>"#,
            entry("polyline"),
            &mut frame,
            AT,
            true,
            &mut notes,
        )
        .unwrap();
        assert!(notes.is_empty());
    }

    #[test]
    fn invalid_utf8_string_is_copied_lossily() {
        let mut frame = ArgFrame::new();
        let text: &[u8] = b" x=\"0\" y=\"0\" string=\"a\xffb\"";
        parse_attributes(text, entry("text"), &mut frame, AT, false, &mut Vec::new()).unwrap();
        assert_eq!(frame.string(0), "a\u{fffd}b");
    }

    mod property_tests {
        use super::parse;
        use crate::frame::ArgFrame;
        use proptest::prelude::*;

        fn separator() -> impl Strategy<Value = String> {
            prop::collection::vec(prop_oneof![Just(' '), Just('\t')], 1..4)
                .prop_map(|v| v.into_iter().collect())
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn prop_float_list_preserves_every_value(
                values in prop::collection::vec(-1.0e6f64..1.0e6, 0..64),
                seps in prop::collection::vec(separator(), 66),
            ) {
                let mut body = seps[0].clone();
                for (i, v) in values.iter().enumerate() {
                    body.push_str(&format!("{v:?}"));
                    body.push_str(&seps[i + 1]);
                }
                let text = format!(r#" n="{}" x="{}" y="0"/>"#, values.len(), body);
                let mut frame = ArgFrame::new();
                parse("polyline", &text, &mut frame).unwrap();
                prop_assert_eq!(frame.float_list(0), values.as_slice());
            }
        }
    }
}
