use crate::ast::Node;
use crate::error::{ParseError, SyntaxError};
use crate::lexer::{tokenize_source, LexError, Token};
use sprig_source::{Location, Source};

pub mod cursor;
mod expr;
mod stmt;

pub use cursor::{Cursor, Mark};

/// Parses `content` into a `Program` node.
pub fn parse(content: &str) -> Result<Node, ParseError> {
    let source = Source::new(content);
    Parser::new(&source)?.parse_program()
}

pub struct Parser<'a> {
    cursor: Cursor,
    /// Source code
    source: &'a Source<'a>,
    /// Location of the `main` declaration, once seen.
    entry_point: Option<Location>,
}

impl<'a> Parser<'a> {
    /// Tokenizes `source` in strict mode and creates a parser over the tokens.
    pub fn new(source: &'a Source<'a>) -> Result<Self, LexError> {
        let tokens = tokenize_source(source, true)?;
        Ok(Self::with_tokens(source, tokens))
    }

    pub fn with_tokens(source: &'a Source<'a>, tokens: Vec<Token>) -> Self {
        Self {
            cursor: Cursor::new(tokens),
            source,
            entry_point: None,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses statements until the tokens run out.
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let mut body = Vec::new();
        while let Some(token) = self.cursor.advance() {
            body.push(self.parse_statement(token)?);
        }

        let loc = self.source.location(0..self.source.content.len());
        Ok(Node::program(body, loc)?)
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    /// Consumes the next token, failing at the end of input.
    fn next_token(&mut self) -> Result<Token, ParseError> {
        match self.cursor.advance() {
            Some(token) => Ok(token),
            None => Err(self.unexpected_end()),
        }
    }

    fn unexpected(&self, token: &Token) -> ParseError {
        SyntaxError::unexpected(token).into()
    }

    fn unexpected_end(&self) -> ParseError {
        let end = self.source.position(self.source.content.len());
        SyntaxError::UnexpectedEnd {
            line: end.line,
            column: end.column,
        }
        .into()
    }
}
