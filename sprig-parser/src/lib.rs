//! Front end of the Sprig language: source text to a validated syntax tree.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod visitor;

pub use error::{ParseError, SyntaxError};
pub use parser::parse;
