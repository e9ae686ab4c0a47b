//! Sprig compiler driver: source text to JavaScript.

pub mod repl;

use sprig_emit::emit;
use sprig_parser::ast::Node;
use sprig_parser::{parse, ParseError};
use sprig_source::{Diagnostic, Source};
use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    Parse(ParseError),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Output of a successful compilation.
pub struct Compiled {
    pub ast: Node,
    pub javascript: String,
}

/// Parses `source` and emits it as JavaScript.
pub fn compile(source: &str) -> Result<Compiled, ParseError> {
    let ast = parse(source)?;
    let javascript = emit(&ast);
    Ok(Compiled { ast, javascript })
}

/// Renders `err` with the offending source line.
pub fn render_error(source: &str, err: &ParseError) -> String {
    let source = Source::new(source);
    Diagnostic::new(&source, err, err.position()).to_string()
}
