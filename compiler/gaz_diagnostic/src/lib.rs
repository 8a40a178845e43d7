//! Diagnostics for the GazLang toolchain.
//!
//! Every phase reports failures the same way: an [`ErrorCode`] for
//! searchability, a one-line message, and a labelled span into the program
//! text. Emitters in [`emitter`] turn a [`Diagnostic`] into terminal output.
//!
//! Conversion from phase errors (lexer, parser, interpreter, code generator)
//! lives in the driver so this crate does not depend on any phase.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, Phase};
