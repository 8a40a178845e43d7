use gaz_codegen::CodegenError;
use gaz_diagnostic::{Diagnostic, ErrorCode};

#[cold]
pub fn render_codegen_error(err: &CodegenError) -> Diagnostic {
    match err {
        CodegenError::UndefinedVariable { name, span } => Diagnostic::error(ErrorCode::E5001)
            .with_message(format!("undefined variable: {name}"))
            .with_label(*span, "no earlier assignment in the program text")
            .with_note("slots are assigned in source order, regardless of branches"),
    }
}
