//! grml engine crate.
//!
//! Owns the pieces a front end needs around the importer: logger setup and
//! a recording [`Graphics`](grml_script::Graphics) backend.

pub mod logging;
pub mod scene;

pub use scene::{DrawCmd, DrawList};
