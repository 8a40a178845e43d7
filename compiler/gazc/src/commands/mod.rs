//! Command handlers for the `gaz` CLI.
//!
//! Each handler reads its input file, runs one pipeline entry point, and on
//! failure reports a single diagnostic to stderr and exits with status 1.

use gaz_diagnostic::emitter::{ColorMode, DiagnosticEmitter, PlainEmitter, ReportEmitter};

use crate::Problem;

mod debug;
mod emit;
mod explain;
mod run;

pub use debug::{lex_file, parse_file};
pub use emit::emit_file;
pub use explain::explain_error;
pub use run::run_file;

/// How diagnostics are written to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// One `file:line:col:` line per diagnostic instead of a source snippet.
    pub plain: bool,
    pub color: ColorMode,
}

pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Render `problem` against `source` on stderr, then exit with status 1.
pub(crate) fn fail(path: &str, source: &str, problem: &Problem, options: ReportOptions) -> ! {
    let diagnostic = problem.to_diagnostic();
    let stderr = std::io::stderr();
    if options.plain {
        let mut emitter = PlainEmitter::new(stderr.lock(), path, source);
        emitter.emit(&diagnostic);
        emitter.flush();
    } else {
        let is_tty = std::io::IsTerminal::is_terminal(&stderr);
        let mut emitter = ReportEmitter::new(stderr.lock(), source, options.color, is_tty);
        emitter.emit(&diagnostic);
        emitter.flush();
    }
    std::process::exit(1);
}
