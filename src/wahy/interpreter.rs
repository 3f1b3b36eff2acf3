//! Interpreter driver
//!
//! Drives one run: tokenize each line, dispatch through the registry, mutate
//! a fresh `PageBuilder`, and validate the final state. The first failure
//! terminates the run; every failure carries the 1-based line number of the
//! offending command (0 is reserved for boundary failures, see `source`).

use crate::wahy::document::PageBuilder;
use crate::wahy::registry::CommandRegistry;
use crate::wahy::tokenizer;
use serde::Serialize;

/// The result record of one interpretation run.
///
/// Success carries the complete HTML document; failure carries the error
/// message and the line it happened on. Partial content is never surfaced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interpretation {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "lineNumber", skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

impl Interpretation {
    pub fn success(html: String) -> Self {
        Interpretation {
            success: true,
            html: Some(html),
            error: None,
            line_number: None,
        }
    }

    pub fn failure(error: String, line_number: usize) -> Self {
        Interpretation {
            success: false,
            html: None,
            error: Some(error),
            line_number: Some(line_number),
        }
    }
}

/// Interprets Wahy source. Each call to `interpret` constructs its own
/// `PageBuilder`, so one `Interpreter` can serve any number of independent
/// runs without state leaking between them.
pub struct Interpreter {
    registry: CommandRegistry,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            registry: CommandRegistry::with_defaults(),
        }
    }

    /// Interpret a whole source text (lines separated by `\n`).
    pub fn interpret(&self, source: &str) -> Interpretation {
        let lines: Vec<&str> = source.split('\n').collect();
        self.interpret_lines(&lines)
    }

    /// Interpret an ordered sequence of lines, counted from 1.
    pub fn interpret_lines(&self, lines: &[&str]) -> Interpretation {
        let mut page = PageBuilder::new();

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let Some(command) = tokenizer::tokenize(line) else {
                continue;
            };

            match self
                .registry
                .execute(&command.phrase, &command.args, &mut page)
            {
                Ok(true) => {}
                Ok(false) => {
                    return Interpretation::failure(
                        format!("unknown command: {}", command.phrase),
                        line_number,
                    );
                }
                Err(error) => {
                    return Interpretation::failure(error.to_string(), line_number);
                }
            }
        }

        if !page.is_complete() {
            return Interpretation::failure(
                "document incomplete: the page was never closed with \"أغلق صفحة\"".to_string(),
                lines.len(),
            );
        }

        Interpretation::success(page.html())
    }
}
