//! Diagnostic emitters.
//!
//! - [`PlainEmitter`]: one `file:line:col: error[CODE]: message` line per
//!   diagnostic, for scripts and test harnesses.
//! - [`ReportEmitter`]: source snippets with underlined spans, rendered by
//!   `ariadne`.

mod plain;
mod report;

pub use plain::PlainEmitter;
pub use report::{ColorMode, ReportEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
