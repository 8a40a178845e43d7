//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::{fail, read_file, ReportOptions};
use crate::{lex_source, parse_source, Problem};

/// Lex a file and print one token per line.
pub fn lex_file(path: &str, options: ReportOptions) {
    let content = read_file(path);
    let tokens = match lex_source(&content) {
        Ok(tokens) => tokens,
        Err(err) => fail(path, &content, &Problem::from(err), options),
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in &tokens {
        println!("  {tok} @ {:?}", tok.span);
    }
}

/// Parse a file and print its tree.
pub fn parse_file(path: &str, options: ReportOptions) {
    let content = read_file(path);
    let program = match parse_source(&content) {
        Ok(program) => program,
        Err(err) => fail(path, &content, &Problem::from(err), options),
    };

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.len());
    println!();
    println!("{program:#?}");
}
