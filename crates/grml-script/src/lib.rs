//! Importer for **graphics scripts** (`.grml`): flat, line-oriented markup
//! where each line names one drawing operation and carries its arguments as
//! quoted attributes.
//!
//! ```text
//! <gr>
//! <setlinewidth width="2.5"/>
//! <polyline n="3" x="1 2 3" y="4 5 6"/>
//! </gr>
//! ```
//!
//! Attribute values bind **by position**: the n-th attribute on a line fills
//! the n-th slot of the element's type signature, whatever its name. See
//! [`schema`] for the element table.
//!
//! This crate does no drawing itself. Implement [`Graphics`] for a backend
//! and pass it to [`Importer::import`].
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`schema`] | `SCHEMA`, `SchemaEntry`, `TypeTag`, `ElementKind`, `lookup` |
//! | [`buffer`] | `GrowBuffer` list storage |
//! | [`frame`] | `ArgFrame` marshaled arguments |
//! | [`tokenizer`] | `parse_attributes` |
//! | [`graphics`] | `Graphics` primitive contract |
//! | [`dispatch`] | `dispatch` element → call binding |
//! | [`import`] | `Importer`, `ImportContext` |
//! | [`source`] | `ByteSource`, `FileSource`, `ReaderSource` |
//! | [`error`] | `ImportError`, `Diagnostic`, `ImportReport` |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use grml_script::{ImportOptions, Importer};
//!
//! let mut backend = MyBackend::new();
//! let report = Importer::new(ImportOptions::default())
//!     .import(b"<setlinewidth width=\"2\"/>\n", &mut backend);
//! assert_eq!(report.dispatched, 1);
//! ```

pub mod buffer;
pub mod dispatch;
pub mod error;
pub mod frame;
pub mod graphics;
pub mod import;
pub mod lenient;
pub mod options;
pub mod schema;
pub mod source;
pub mod tokenizer;

use std::path::Path;

pub use error::{Diagnostic, DiagnosticKind, ImportError, ImportReport};
pub use graphics::Graphics;
pub use import::{ImportContext, Importer};
pub use options::ImportOptions;
pub use schema::{ElementKind, SCHEMA, SchemaEntry, TypeTag, lookup};
pub use source::{ByteSource, FileSource, ReaderSource};

/// Imports an in-memory script with default options.
pub fn import_bytes<G: Graphics + ?Sized>(script: &[u8], g: &mut G) -> ImportReport {
    Importer::default().import(script, g)
}

/// Imports a script file with default options.
///
/// # Errors
///
/// [`ImportError::SourceUnavailable`] if the file cannot be read.
pub fn import_file<G: Graphics + ?Sized>(
    path: impl AsRef<Path>,
    g: &mut G,
) -> Result<ImportReport, ImportError> {
    Importer::default().import_from(FileSource::new(path), g)
}
