//! File boundary for the interpreter
//!
//! Reads a source file and delegates to the driver. Acquisition failures —
//! missing file, non-UTF-8 content, other I/O — are reported in the same
//! failure shape as core errors, with line number 0 since no line was ever
//! processed.

use crate::wahy::interpreter::{Interpretation, Interpreter};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Line number used for failures that happen before any line is read.
const BOUNDARY_LINE: usize = 0;

/// Interpret the Wahy source file at `path`.
pub fn interpret_path<P: AsRef<Path>>(path: P) -> Interpretation {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) => {
            let message = match error.kind() {
                ErrorKind::NotFound => format!("file not found: {}", path.display()),
                _ => format!("could not read {}: {}", path.display(), error),
            };
            return Interpretation::failure(message, BOUNDARY_LINE);
        }
    };

    let source = match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(_) => {
            return Interpretation::failure(
                format!("{} is not valid UTF-8", path.display()),
                BOUNDARY_LINE,
            );
        }
    };

    Interpreter::new().interpret(&source)
}
