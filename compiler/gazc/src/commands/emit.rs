//! The `emit` command: compile to stack-machine instruction text.

use super::{fail, read_file, ReportOptions};
use crate::emit_source;

/// Compile `path` and write the instructions to `output`, or to stdout when
/// no output file is given.
///
/// Instruction text has no trailing newline of its own. Stdout gets one so
/// the shell prompt starts on a fresh line; the file gets the text exactly.
pub fn emit_file(path: &str, output: Option<&str>, options: ReportOptions) {
    let content = read_file(path);
    let text = match emit_source(&content) {
        Ok(text) => text,
        Err(problem) => fail(path, &content, &problem, options),
    };

    match output {
        Some(out) => {
            if let Err(e) = std::fs::write(out, &text) {
                eprintln!("error writing '{out}': {e}");
                std::process::exit(1);
            }
        }
        None if text.is_empty() => {}
        None => println!("{text}"),
    }
}
