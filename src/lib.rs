//! # wahy
//!
//! An interpreter for the Wahy (وحي) page-description language.
//!
//! Wahy source is a sequence of Arabic keyword commands, one per line; a
//! successful run produces one self-contained HTML document. The interpreter
//! is strictly synchronous and fail-fast: the first unknown command or page
//! violation aborts the run with the offending line number.
//!
//! ## Entry points
//!
//! - [`wahy::interpreter::Interpreter`] — interpret in-memory source.
//! - [`wahy::source::interpret_path`] — interpret a file on disk.

pub mod wahy;
