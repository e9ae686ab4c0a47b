use super::*;
use crate::ast::NodeKind;
use crate::lexer::{Keyword, TokenKind};

impl<'a> Parser<'a> {
    /// Parses a statement starting at the already consumed `token`.
    pub fn parse_statement(&mut self, token: Token) -> Result<Node, ParseError> {
        match token.kind {
            TokenKind::Keyword(Keyword::Main) => self.parse_main_declaration(token),
            TokenKind::Keyword(Keyword::Type) => {
                let value = self.parse_value()?;
                let loc = token.loc.to(value.loc());
                Ok(Node::type_declaration(value, loc)?)
            }
            TokenKind::Keyword(Keyword::Let) => {
                let value = self.parse_value()?;
                let loc = token.loc.to(value.loc());
                Ok(Node::let_declaration(value, loc)?)
            }
            TokenKind::Keyword(Keyword::Fun) | TokenKind::Keyword(Keyword::Func) => {
                let value = self.parse_value()?;
                let loc = token.loc.to(value.loc());
                Ok(Node::function_declaration(value, loc)?)
            }
            TokenKind::Keyword(Keyword::Return) => {
                let value = self.parse_value()?;
                let loc = token.loc.to(value.loc());
                Ok(Node::return_statement(value, loc)?)
            }
            TokenKind::OpenBrace => self.parse_block_stmt(token),
            _ => Err(self.unexpected(&token)),
        }
    }

    /// Parses the expression following a statement keyword.
    fn parse_value(&mut self) -> Result<Node, ParseError> {
        let head = self.next_token()?;
        self.parse_expr(head)
    }

    fn parse_main_declaration(&mut self, token: Token) -> Result<Node, ParseError> {
        if self.entry_point.is_some() {
            return Err(ParseError::DuplicateEntryPoint {
                line: token.line(),
                column: token.column(),
            });
        }
        self.entry_point = Some(token.loc.clone());

        let mut value = self.parse_value()?;
        // `main run` invokes `run`
        if value.is_kind(NodeKind::Identifier) {
            let loc = value.loc().clone();
            value = Node::application(NodeKind::FunctionCallExpression, value, Vec::new(), loc)?;
        }

        let loc = token.loc.to(value.loc());
        Ok(Node::main_declaration(value, loc)?)
    }

    /// Parses the statements of a block up to the closing brace. `open` is the consumed `{`.
    /// Running out of tokens anywhere inside the block, or meeting anything that cannot start a
    /// block statement, means the block is not finished yet.
    pub fn parse_block_stmt(&mut self, open: Token) -> Result<Node, ParseError> {
        let incomplete = ParseError::Incomplete {
            line: open.line(),
            column: open.column(),
        };

        let mut body = Vec::new();
        loop {
            let token = match self.cursor.advance() {
                Some(token) => token,
                None => return Err(incomplete),
            };

            match token.kind {
                TokenKind::CloseBrace => {
                    let loc = open.loc.to(&token.loc);
                    return Ok(Node::block_statement(body, loc)?);
                }
                TokenKind::Keyword(Keyword::Type)
                | TokenKind::Keyword(Keyword::Let)
                | TokenKind::Keyword(Keyword::Return) => match self.parse_statement(token) {
                    Ok(stmt) => body.push(stmt),
                    Err(ParseError::Syntax(SyntaxError::UnexpectedEnd { .. })) => {
                        return Err(incomplete)
                    }
                    Err(err) => return Err(err),
                },
                _ => return Err(incomplete),
            }
        }
    }
}
