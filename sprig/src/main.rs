use clap::Parser;
use sprig::repl::Repl;
use sprig::{compile, render_error, Error};
use std::path::{Path, PathBuf};
use std::{fs, io, process};

/// Compiles Sprig programs to JavaScript.
#[derive(Parser)]
#[command(name = "sprig", version)]
struct Args {
    /// Program to compile. Starts the interactive shell when omitted.
    file: Option<PathBuf>,
    /// Dump the syntax tree to stderr.
    #[arg(long)]
    ast: bool,
    /// Disable colored diagnostics.
    #[arg(long)]
    no_color: bool,
}

fn run_file(path: &Path, dump_ast: bool) -> Result<(), Error> {
    let source = fs::read_to_string(path)?;
    match compile(&source) {
        Ok(compiled) => {
            if dump_ast {
                eprintln!("{}", compiled.ast);
            }
            print!("{}", compiled.javascript);
            Ok(())
        }
        Err(err) => {
            eprint!("{}", render_error(&source, &err));
            Err(err.into())
        }
    }
}

fn main() {
    let args = Args::parse();
    if args.no_color {
        console::set_colors_enabled(false);
    }

    match &args.file {
        Some(path) => match run_file(path, args.ast) {
            Ok(()) => {}
            Err(Error::Io(err)) => {
                eprintln!("{}: {}", path.display(), err);
                process::exit(1);
            }
            Err(Error::Parse(_)) => process::exit(1),
        },
        None => {
            let stdin = io::stdin();
            let mut repl = Repl::new(stdin.lock(), io::stdout(), io::stderr());
            repl.dump_ast = args.ast;
            if let Err(err) = repl.run() {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    }
}
