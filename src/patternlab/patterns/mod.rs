//! One module per demonstrated pattern. Each module exposes its domain types
//! plus a `run(sink)` entry point that writes the demo transcript through the
//! injected [`Sink`](crate::sink::Sink). Modules are leaves: no pattern
//! depends on another, only the runner composes them.

use crate::error::Result;
use crate::sink::Sink;

pub mod adapter;
pub mod decorator;
pub mod factory;
pub mod observer;
pub mod singleton;
pub mod strategy;

/// Transcript framing shared by every demo.
pub(crate) fn section_header(sink: &mut dyn Sink, title: &str) -> Result<()> {
    sink.write_line(&format!("=== {} ===", title))
}

pub(crate) fn completed(sink: &mut dyn Sink, pattern: &str) -> Result<()> {
    sink.write_line(&format!(
        "{} pattern demonstration completed successfully!",
        pattern
    ))
}
