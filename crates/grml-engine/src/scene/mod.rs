//! Recorded draw stream.
//!
//! Responsibilities:
//! - store one owned command per drawing call, in call order
//! - act as a [`Graphics`](grml_script::Graphics) backend so imports can be
//!   inspected, diffed, or replayed

mod cmd;
mod list;
mod record;

pub use cmd::DrawCmd;
pub use list::DrawList;
