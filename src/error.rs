use std::sync::atomic::{AtomicBool, Ordering};

use crate::token::{Token, Type};

static HAD_ERROR: AtomicBool = AtomicBool::new(false);
static HAD_RUNTIME_ERROR: AtomicBool = AtomicBool::new(false);

/// Checks if a scan, parse, or resolve error occurred.
pub fn did_error() -> bool {
    HAD_ERROR.load(Ordering::Relaxed)
}

/// Checks if a runtime error occurred.
pub fn did_runtime_error() -> bool {
    HAD_RUNTIME_ERROR.load(Ordering::Relaxed)
}

/// Resets the `hadError` flag between REPL lines. `hadRuntimeError` is left
/// alone, matching the original source's `runPrompt` (only `hadError` is
/// cleared so a script run afterwards would still reflect a prior crash).
pub fn reset_error() {
    HAD_ERROR.store(false, Ordering::Relaxed);
}

/// Every diagnostic kind implements this: printing itself to stderr and
/// flipping the flag that `lib.rs` inspects between pipeline stages.
pub trait Error {
    fn throw(&self);
}

/// Raised while lexing. Recovery: scanning continues at the next character.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl Error for ScanError {
    fn throw(&self) {
        eprintln!("[line {}] Error: {}", self.line, self.message);
        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// Raised while parsing. Recovery: panic-mode synchronization to the next
/// statement boundary.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl Error for ParseError {
    fn throw(&self) {
        report_at_token(&self.token, &self.message);
        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

/// Raised by the static resolver. Recovery: resolution continues.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl Error for ResolveError {
    fn throw(&self) {
        report_at_token(&self.token, &self.message);
        HAD_ERROR.store(true, Ordering::Relaxed);
    }
}

fn report_at_token(token: &Token, message: &str) {
    if token.kind == Type::EOF {
        eprintln!("[line {}] Error at end: {}", token.line, message);
    } else {
        eprintln!("[line {}] Error at '{}': {}", token.line, token.lexeme, message);
    }
}

/// Raised by the interpreter. Unlike the other three kinds, this unwinds
/// every intervening call/block frame instead of letting the offending
/// phase continue; see [`crate::interpreter::Unwind`].
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl Error for RuntimeError {
    fn throw(&self) {
        eprintln!("{}\n[line {}]", self.message, self.token.line);
        HAD_RUNTIME_ERROR.store(true, Ordering::Relaxed);
    }
}
