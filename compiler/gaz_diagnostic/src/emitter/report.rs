use std::io::Write;

use ariadne::{Config, Label, Report, ReportKind, Source};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// Color output mode for the report emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Renders diagnostics with the offending source lines underlined.
pub struct ReportEmitter<'src, W: Write> {
    writer: W,
    source: Source<&'src str>,
    colors: bool,
}

impl<'src, W: Write> ReportEmitter<'src, W> {
    pub fn new(writer: W, source: &'src str, mode: ColorMode, is_tty: bool) -> Self {
        ReportEmitter {
            writer,
            source: Source::from(source),
            colors: mode.should_use_colors(is_tty),
        }
    }
}

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    }
}

impl<W: Write> DiagnosticEmitter for ReportEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let offset = diagnostic
            .primary_span()
            .map_or(0, |span| span.start as usize);

        let mut report = Report::build(report_kind(diagnostic.severity), (), offset)
            .with_config(Config::default().with_color(self.colors))
            .with_code(diagnostic.code)
            .with_message(&diagnostic.message);

        for label in &diagnostic.labels {
            let range = label.span.to_range();
            let order = if label.is_primary { 0 } else { 1 };
            report = report.with_label(
                Label::new(range)
                    .with_message(&label.message)
                    .with_order(order),
            );
        }
        for note in &diagnostic.notes {
            report = report.with_note(note);
        }

        let _ = report.finish().write(&mut self.source, &mut self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
