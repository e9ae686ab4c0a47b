//! Backtracking cursor over an immutable token buffer.

use crate::lexer::Token;

/// A saved cursor position, see [`Cursor::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// The cursor sits *after* the last consumed token: [`Cursor::current`] is the token most recently
/// returned by [`Cursor::advance`] and [`Cursor::peek`] is the one the next `advance` will return.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: Vec<Token>,
    /// Number of consumed tokens.
    consumed: usize,
}

impl Cursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            consumed: 0,
        }
    }

    /// Consumes and returns the next token. Does not move at the end of input.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.consumed)?.clone();
        self.consumed += 1;
        Some(token)
    }

    /// Un-consumes the current token and returns the token that is now current.
    pub fn retreat(&mut self) -> Option<&Token> {
        self.consumed = self.consumed.saturating_sub(1);
        self.current()
    }

    /// The most recently consumed token.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.consumed.checked_sub(1)?)
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.consumed)
    }

    /// Index of the most recently consumed token.
    pub fn current_index(&self) -> Option<usize> {
        self.consumed.checked_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn mark(&self) -> Mark {
        Mark(self.consumed)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.consumed = mark.0;
    }

    /// Walks backwards from the token before `index` and returns the first token matching
    /// `predicate`. The cursor position is unaffected.
    pub fn look_behind(&self, index: usize, predicate: impl Fn(&Token) -> bool) -> Option<&Token> {
        self.tokens[..index.min(self.tokens.len())]
            .iter()
            .rev()
            .find(|token| predicate(token))
    }
}
