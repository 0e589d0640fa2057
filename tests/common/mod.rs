use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use rlox::interpreter::Interpreter;
use rlox::parser::Parser;
use rlox::resolver::Resolver;
use rlox::scanner::Scanner;

struct SharedWriter(Rc<RefCell<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Scans, parses, resolves, and interprets `source` against a fresh
/// interpreter, returning everything it wrote to stdout. Scan/parse/resolve
/// errors go to stderr (untouched here, since the global error flag is
/// process-wide and these tests only assert on stdout); use `lox_err!` for
/// scenarios that should fail.
pub fn run(source: &str) -> String {
    let tokens = Scanner::new(source).scan_tokens();
    let statements = Parser::new(tokens).parse();

    let output = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = Interpreter::new(Box::new(SharedWriter(Rc::clone(&output))));

    let mut resolver = Resolver::new(&mut interpreter);
    resolver.resolve(&statements);

    interpreter.interpret(&statements);

    let bytes = output.borrow().clone();
    String::from_utf8(bytes).expect("program output to be valid UTF-8")
}

/// Writes `source` to a uniquely-named file in the system temp directory and
/// returns its path. Tests that need to observe the real process exit code
/// or stderr output drive the built `rlox` binary directly (via
/// `assert_cmd`) rather than the library API, since the error flags are
/// global process state that only a fresh process isolates cleanly.
pub fn write_temp_source(name: &str, source: &str) -> std::path::PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("rlox-test-{name}-{}-{unique}.lox", std::process::id()));
    std::fs::write(&path, source).expect("write temp source file");
    path
}

/// Asserts that running `source` prints `expected` (a `\n`-joined block, with
/// a trailing newline) to stdout.
#[macro_export]
macro_rules! lox_ok {
    ($name:ident, $source:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!($crate::common::run($source), $expected);
        }
    };
}

/// Asserts that running `source` as a script produces exactly `stderr` and
/// exits with `code`.
#[macro_export]
macro_rules! lox_err {
    ($name:ident, $source:expr, code: $code:expr, stderr: $stderr:expr) => {
        #[test]
        fn $name() {
            use assert_cmd::Command;

            let path = $crate::common::write_temp_source(stringify!($name), $source);
            Command::cargo_bin("rlox")
                .unwrap()
                .arg(&path)
                .assert()
                .code($code)
                .stderr($stderr);

            let _ = std::fs::remove_file(&path);
        }
    };
}
