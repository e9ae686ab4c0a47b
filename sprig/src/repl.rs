//! Interactive shell.
//!
//! Every input is compiled from scratch. When the parser reports an unclosed block, the line is
//! kept and the shell asks for more input with a continuation prompt.

use crate::{compile, render_error};
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">>> ";
const CONTINUATION_PROMPT: &str = "... ";

pub struct Repl<R, W, E> {
    input: R,
    output: W,
    errors: E,
    /// Print the syntax tree of every input to the error stream.
    pub dump_ast: bool,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
            dump_ast: false,
        }
    }

    /// Reads inputs until end of input or `:quit`.
    pub fn run(&mut self) -> io::Result<()> {
        let mut buffer = String::new();
        loop {
            let prompt = if buffer.is_empty() {
                PROMPT
            } else {
                CONTINUATION_PROMPT
            };
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }
            if buffer.is_empty() && line.trim() == ":quit" {
                return Ok(());
            }

            buffer.push_str(&line);
            if buffer.trim().is_empty() {
                buffer.clear();
                continue;
            }

            if self.eval(&buffer)? {
                buffer.clear();
            }
        }
    }

    /// Compiles `source` and prints the result or the error.
    /// Returns `false` when `source` is incomplete and nothing was printed.
    pub fn eval(&mut self, source: &str) -> io::Result<bool> {
        match compile(source) {
            Ok(compiled) => {
                if self.dump_ast {
                    writeln!(self.errors, "{}", compiled.ast)?;
                }
                let javascript = compiled
                    .javascript
                    .trim_start_matches("'use strict';")
                    .trim();
                if !javascript.is_empty() {
                    writeln!(self.output, "{}", javascript)?;
                }
                Ok(true)
            }
            Err(err) if err.is_incomplete() => Ok(false),
            Err(err) => {
                write!(self.errors, "{}", render_error(source, &err))?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a session and returns what was written to the output and error streams.
    fn session(input: &str, dump_ast: bool) -> (String, String) {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        {
            let mut repl = Repl::new(input.as_bytes(), &mut output, &mut errors);
            repl.dump_ast = dump_ast;
            repl.run().unwrap();
        }
        (
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    #[test]
    fn test_single_line() {
        let (output, errors) = session("main add 3 4\n", false);
        assert_eq!(output, ">>> add(3, 4);\n>>> \n");
        assert_eq!(errors, "");
    }

    #[test]
    fn test_continuation() {
        let (output, _) = session("fun add a b = {\n  return a + b\n}\nmain add 1 2\n:quit\n", false);
        assert_eq!(
            output,
            ">>> ... ... function add(a, b) {\n  return a + b;\n}\n>>> add(1, 2);\n>>> "
        );
    }

    #[test]
    fn test_continuation_inside_statement() {
        let (output, errors) = session(
            "fun add a b = {\n  let c = a +\n  b\n  return\n  c\n}\n",
            false,
        );
        assert_eq!(
            output,
            ">>> ... ... ... ... ... function add(a, b) {\n  var c = a + b;\n  return c;\n}\n>>> \n"
        );
        assert_eq!(errors, "");
    }

    #[test]
    fn test_error_clears_buffer() {
        let (output, errors) = session("let a = )\nlet b = 2\n", false);
        assert_eq!(output, ">>> >>> var b = 2;\n>>> \n");
        assert!(errors.contains("unexpected close-paren \")\" at 1:8"));
        assert!(errors.contains("let a = )"));
    }

    #[test]
    fn test_types_print_nothing() {
        let (output, _) = session("type A = B | C\n", false);
        assert_eq!(output, ">>> >>> \n");
    }

    #[test]
    fn test_dump_ast() {
        let (_, errors) = session("let a = 1\n", true);
        assert_eq!(errors, "(program (let (= a 1)))\n");
    }

    #[test]
    fn test_blank_lines() {
        let (output, errors) = session("\n\n:quit\n", false);
        assert_eq!(output, ">>> >>> >>> ");
        assert_eq!(errors, "");
    }
}
