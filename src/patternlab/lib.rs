//! # Patternlab Architecture
//!
//! Patternlab is a **UI-agnostic pattern-demo library**. The binary is a thin
//! client: everything it does goes through the library, and the library never
//! touches the terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs + args.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Runner Layer (runner.rs)                                   │
//! │  - Sequences the six demos, owns the results directory      │
//! │  - Writes summary.txt, returns a structured RunReport       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Demo Layer (patterns/*.rs)                                 │
//! │  - Pure pattern logic, one module per pattern               │
//! │  - No I/O assumptions beyond the injected Sink              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sink Layer (sink/)                                         │
//! │  - Abstract Sink trait                                      │
//! │  - FileSink (production), MemorySink (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `runner.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<RunReport>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Every line a demo produces goes through the [`sink::Sink`] it was handed,
//! so the same demo code serves file transcripts and in-memory test capture.
//!
//! ## Testing Strategy
//!
//! 1. **Demos** (`patterns/*.rs`): thorough unit tests of pattern behavior
//!    against `MemorySink`. This is where the lion's share of testing lives.
//! 2. **Runner** (`runner.rs`): tests that the right files land in the right
//!    place with the right framing.
//! 3. **CLI** (`tests/`): end-to-end runs of the real binary in a temp dir.
//!
//! ## Module Overview
//!
//! - [`runner`]: sequences all demos and writes the summary report
//! - [`patterns`]: one module per demonstrated pattern
//! - [`sink`]: the output abstraction and its implementations
//! - [`error`]: error types

pub mod error;
pub mod patterns;
pub mod runner;
pub mod sink;
