//! Source code representation, positions and diagnostic rendering.

use console::style;
use std::{fmt, ops::Range};

/// Represents source code.
pub struct Source<'a> {
    /// Original source code.
    pub content: &'a str,
    /// Byte offset of the first character of every line.
    line_starts: Vec<usize>,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `content`.
    pub fn new(content: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            content,
            line_starts,
        }
    }

    /// Returns the line/column of the byte at `offset`.
    /// Lines start at `1`, columns at `0`. Columns count characters, not bytes.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.content.len());
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        };
        let line_start = self.line_starts[line_index];
        let column = self.content[line_start..offset].chars().count();
        Position {
            line: line_index + 1,
            column,
        }
    }

    /// Returns the [`Location`] of the byte range `span`.
    pub fn location(&self, span: Range<usize>) -> Location {
        let Position { line, column } = self.position(span.start);
        Location { line, column, span }
    }

    /// Returns the text of the 1-based `line`, without its line terminator.
    pub fn line(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or_else(|| self.content.len());
        Some(self.content[start..end].trim_end_matches('\r'))
    }
}

/// A line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Where a token or node starts, plus the byte range it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub span: Range<usize>,
}

impl Location {
    pub fn new(line: usize, column: usize, span: Range<usize>) -> Self {
        Self { line, column, span }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Returns a location starting at `self` and ending where `other` ends.
    pub fn to(&self, other: &Location) -> Location {
        Location {
            line: self.line,
            column: self.column,
            span: self.span.start..other.span.end.max(self.span.end),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An error message attached to a position in a [`Source`].
/// Rendering shows the offending line with a caret under the column.
pub struct Diagnostic<'s, 'a> {
    source: &'s Source<'a>,
    message: String,
    position: Position,
}

impl<'s, 'a> Diagnostic<'s, 'a> {
    pub fn new(source: &'s Source<'a>, message: impl ToString, position: Position) -> Self {
        Self {
            source,
            message: message.to_string(),
            position,
        }
    }
}

impl fmt::Display for Diagnostic<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", style("ERROR:").red().bold(), self.message)?;
        if let Some(line) = self.source.line(self.position.line) {
            let gutter = self.position.line.to_string();
            writeln!(f, "{} {} {}", style(&gutter).blue(), style("|").blue(), line)?;
            writeln!(
                f,
                "{} {} {}{}",
                " ".repeat(gutter.len()),
                style("|").blue(),
                " ".repeat(self.position.column),
                style("^").red().bold()
            )?;
        }
        Ok(())
    }
}
