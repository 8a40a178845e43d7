use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

use super::DiagnosticEmitter;

/// Compiler-style single-line output.
///
/// ```text
/// prog.gaz:3:9: error[E0002]: invalid character '#'
///   = note: ...
/// ```
pub struct PlainEmitter<'src, W: Write> {
    writer: W,
    path: &'src str,
    source: &'src str,
    lines: LineOffsetTable,
}

impl<'src, W: Write> PlainEmitter<'src, W> {
    pub fn new(writer: W, path: &'src str, source: &'src str) -> Self {
        PlainEmitter {
            writer,
            path,
            source,
            lines: LineOffsetTable::build(source),
        }
    }
}

impl<W: Write> DiagnosticEmitter for PlainEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let location = match diagnostic.primary_span() {
            Some(span) => {
                let (line, col) = self.lines.span_start(self.source, span);
                format!("{}:{line}:{col}", self.path)
            }
            None => self.path.to_string(),
        };
        let _ = writeln!(
            self.writer,
            "{location}: {}[{}]: {}",
            diagnostic.severity, diagnostic.code, diagnostic.message
        );
        for note in &diagnostic.notes {
            let _ = writeln!(self.writer, "  = note: {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
