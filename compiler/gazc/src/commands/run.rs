//! The `run` command: interpret a GazLang source file.

use gaz_eval::stdout_handler;
use tracing::debug;

use super::{fail, read_file, ReportOptions};
use crate::{run_source, Problem};

/// Run a source file, printing `echo` output to stdout.
///
/// Output produced before a runtime error is kept; the error follows it on
/// stderr.
pub fn run_file(path: &str, options: ReportOptions) {
    let content = read_file(path);
    debug!(path, bytes = content.len(), "running");
    if let Err(err) = run_source(&content, stdout_handler()) {
        fail(path, &content, &Problem::from(err), options);
    }
}
