//! Errors raised while parsing.

use crate::ast::ValidationError;
use crate::lexer::{LexError, Token};
use sprig_source::Position;
use std::{error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxError {
    /// A token that cannot appear at this position.
    UnexpectedToken {
        kind: &'static str,
        text: String,
        line: usize,
        column: usize,
    },
    /// Input ended where more tokens were required.
    UnexpectedEnd { line: usize, column: usize },
    /// The parsed pieces do not form a legal node.
    InvalidNode(ValidationError),
}

impl SyntaxError {
    pub fn unexpected(token: &Token) -> Self {
        SyntaxError::UnexpectedToken {
            kind: token.kind.name(),
            text: token.text.clone(),
            line: token.line(),
            column: token.column(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            SyntaxError::UnexpectedToken { line, column, .. }
            | SyntaxError::UnexpectedEnd { line, column } => Position {
                line: *line,
                column: *column,
            },
            SyntaxError::InvalidNode(err) => err.loc.position(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken {
                kind,
                text,
                line,
                column,
            } => write!(
                f,
                "Syntax error: unexpected {} \"{}\" at {}:{}",
                kind, text, line, column
            ),
            SyntaxError::UnexpectedEnd { line, column } => write!(
                f,
                "Syntax error: unexpected end of input at {}:{}",
                line, column
            ),
            SyntaxError::InvalidNode(err) => write!(f, "Syntax error: {}", err),
        }
    }
}

impl error::Error for SyntaxError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Lex(LexError),
    Syntax(SyntaxError),
    /// A second `main` declaration. Points at the duplicate.
    DuplicateEntryPoint { line: usize, column: usize },
    /// A block was opened but never closed. Points at the opening brace.
    /// Callers reading interactively should ask for more input.
    Incomplete { line: usize, column: usize },
}

impl ParseError {
    pub fn is_incomplete(&self) -> bool {
        matches!(self, ParseError::Incomplete { .. })
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax(_))
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex(err) => Position {
                line: err.line,
                column: err.column,
            },
            ParseError::Syntax(err) => err.position(),
            ParseError::DuplicateEntryPoint { line, column }
            | ParseError::Incomplete { line, column } => Position {
                line: *line,
                column: *column,
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::Syntax(err) => write!(f, "{}", err),
            ParseError::DuplicateEntryPoint { line, column } => write!(
                f,
                "Syntax error: duplicate main declaration at {}:{}",
                line, column
            ),
            ParseError::Incomplete { line, column } => write!(
                f,
                "Incomplete input: block opened at {}:{} is not closed",
                line, column
            ),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            ParseError::Syntax(SyntaxError::InvalidNode(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}

impl From<ValidationError> for ParseError {
    fn from(err: ValidationError) -> Self {
        ParseError::Syntax(SyntaxError::InvalidNode(err))
    }
}
