#![allow(clippy::needless_return)]

//! rlox is a tree-walking interpreter for Lox, the language from Bob
//! Nystrom's *Crafting Interpreters*. It is dynamically typed, lexically
//! scoped, and supports closures and single-inheritance classes.
//!
//! ## Scanning
//! The first step is scanning: converting a string of source characters into
//! a flat list of tokens. The scanner is implemented in the
//! [`scanner`](scanner) module as a state machine over the source text. It
//! reports syntax errors as a [`ScanError`](error::ScanError) and keeps
//! scanning past them so a user can see every lexical mistake in a file at
//! once, rather than only the first.
//!
//! ## Parsing
//! The second step is parsing: converting the token list into an abstract
//! syntax tree. The parser is implemented in the [`parser`](parser) module as
//! a recursive-descent parser. [`Expressions`](expr::Expr) produce a value;
//! [`statements`](stmt::Stmt) perform an action. The parser reports syntax
//! errors as a [`ParseError`](error::ParseError) and recovers from them by
//! synchronizing to the next statement boundary, so it too can surface more
//! than one mistake per run.
//!
//! ## Resolving
//! The third step is resolving: a static pass between parsing and
//! interpreting that, for every variable reference, counts how many
//! enclosing scopes away its declaration lives. This lets the interpreter
//! look a variable up directly instead of searching outward at runtime, and
//! is what gives closures their precise, block-scoped semantics. The
//! resolver is implemented in the [`resolver`](resolver) module and reports
//! errors as a [`ResolveError`](error::ResolveError) — syntactically valid
//! programs that are nonetheless invalid, such as a `return` at the top
//! level or `this` outside a class.
//!
//! ## Interpreting
//! The final step is interpreting: walking the tree and evaluating it. The
//! interpreter is implemented in the [`interpreter`](interpreter) module. It
//! owns the global environment and the chain of local environments entered
//! by blocks, calls, and methods, and reports errors as a
//! [`RuntimeError`](error::RuntimeError) — problems that can only be caught
//! while the program is actually running, such as calling a non-callable
//! value or dividing by zero.

use std::io::{self, Write};
use std::path::PathBuf;
use std::{fs, process};

pub mod ast;
pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use interpreter::Interpreter;
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// The driver that owns a single interpreter across however many source
/// strings it is asked to run: one, for a script; as many as the user types,
/// for a REPL session. Reusing the interpreter across REPL lines is what
/// lets a variable declared on one line be visible on the next.
#[allow(non_camel_case_types)]
pub struct rlox {
    interpreter: Interpreter,
}

impl rlox {
    pub fn new() -> Self {
        rlox { interpreter: Interpreter::new(Box::new(io::stdout())) }
    }

    /// Runs a script file to completion and exits the process with the
    /// status the pipeline produced: 65 for a scan/parse/resolve error, 70
    /// for a runtime error, 0 otherwise.
    pub fn run_file(&mut self, path: String) {
        let contents = fs::read_to_string(&path)
            .unwrap_or_else(|err| {
                eprintln!("Could not read file '{path}': {err}");
                process::exit(74);
            });

        self.run(&contents);

        if error::did_error() {
            process::exit(65);
        }
        if error::did_runtime_error() {
            process::exit(70);
        }
    }

    /// Runs an interactive read-eval-print loop, persisting history to
    /// `~/.rlox_history` across sessions via `rustyline`.
    pub fn run_prompt(&mut self) {
        let mut editor = rustyline::DefaultEditor::new().expect("rustyline to initialize");
        let history_path = history_path();

        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run(&line);
                    error::reset_error();
                },
                Err(rustyline::error::ReadlineError::Interrupted) => continue,
                Err(rustyline::error::ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error reading input: {err}");
                    break;
                },
            }
        }

        if let Some(path) = &history_path {
            let _ = editor.save_history(path);
        }
    }

    fn run(&mut self, source: &str) {
        let tokens = Scanner::new(source).scan_tokens();

        if error::did_error() {
            return;
        }

        let statements = Parser::new(tokens).parse();

        if error::did_error() {
            return;
        }

        let mut resolver = Resolver::new(&mut self.interpreter);
        resolver.resolve(&statements);

        if error::did_error() {
            return;
        }

        self.interpreter.interpret(&statements);
    }
}

impl Default for rlox {
    fn default() -> Self {
        Self::new()
    }
}

fn history_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".rlox_history"))
}
