//! Lexer and parser phase tests, driven through `gazc`.
//!
//! - `lexer` - token streams as the `lex` command sees them
//! - `program` - program shape and syntax failures

mod lexer;
mod program;
