//! Parse failure reporting.

use std::fmt;

use super::range::{Position, SourceLocation};

/// No grammar rule matched at some offset: an unterminated string, brace,
/// interpolation, or quote-like literal.
///
/// Carries the furthest byte offset the scan reached before every
/// alternative was exhausted, plus the derived line/column and a source
/// excerpt for display. A failed scan produces no partial tree.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub offset: usize,
    pub position: Position,
    context: String,
}

impl ParseError {
    pub(crate) fn at(source: &str, offset: usize) -> Self {
        let position = SourceLocation::new(source).byte_to_position(offset);
        let context = format_source_context(source, position.line);
        Self {
            offset,
            position,
            context,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "parse error at line {}, column {} (byte {})",
            self.position.line + 1,
            self.position.column + 1,
            self.offset
        )?;
        write!(f, "{}", self.context)
    }
}

impl std::error::Error for ParseError {}

/// Format source code context around an error line.
///
/// Shows 2 lines before the error, the error line with a >> marker, and
/// 2 lines after. All lines are numbered for easy reference.
fn format_source_context(source: &str, error_line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();

    // an end-of-input failure can land one past the last line
    let error_line = error_line.min(lines.len().saturating_sub(1));
    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!(
            "{} {:3} | {}\n",
            marker,
            line_num + 1,
            lines[line_num]
        ));
    }
    context
}
