//! # Sink Layer
//!
//! This module defines the output abstraction for patternlab. The [`Sink`]
//! trait is the single destination every demo writes its transcript through.
//!
//! ## Design Rationale
//!
//! Output is abstracted behind a trait to:
//! - Enable **testing** with `MemorySink` (no filesystem needed)
//! - Allow **future destinations** (console, network, etc.) without changing
//!   demo logic
//! - Keep pattern logic **decoupled** from where its transcript lands
//!
//! ## Implementations
//!
//! - [`fs::FileSink`]: Production file-backed sink
//!   - One UTF-8 text file per demo, buffered writes
//!   - `finish()` flushes and closes the transcript
//!
//! - [`memory::MemorySink`]: In-memory sink for testing
//!   - Captures lines in a `Vec<String>`
//!   - Fast, isolated test execution
//!
//! The trait is object-safe on purpose: observers, strategies and adapters
//! receive `&mut dyn Sink`, so the same trait-object plumbing works for both
//! backends.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract write destination for demo transcripts.
pub trait Sink {
    /// Append one line of transcript (a newline is added by the sink).
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Append an empty line.
    fn blank_line(&mut self) -> Result<()> {
        self.write_line("")
    }
}
