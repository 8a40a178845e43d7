//! The `gaz` command.

use gaz_diagnostic::emitter::ColorMode;
use gazc::commands::{emit_file, explain_error, lex_file, parse_file, run_file, ReportOptions};

fn main() {
    gazc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprint!("{USAGE}");
        std::process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "run" | "emit" | "lex" | "parse" => {
            let (options, output, positional) = parse_file_args(command, rest);
            let Some(path) = positional else {
                eprintln!("Usage: gaz {command} <file.gaz>");
                std::process::exit(1);
            };
            match command {
                "run" => run_file(path, options),
                "emit" => emit_file(path, output, options),
                "lex" => lex_file(path, options),
                _ => parse_file(path, options),
            }
        }
        "help" | "--help" | "-h" => {
            print!("{USAGE}");
        }
        "version" | "--version" | "-v" => {
            println!("GazLang {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: gaz explain <ERROR_CODE>");
                eprintln!("Example: gaz explain E6003");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            // A bare source path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gaz"))
            {
                run_file(command, ReportOptions::default());
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                eprint!("{USAGE}");
                std::process::exit(1);
            }
        }
    }
}

/// Split the arguments after a file command into report options, the `-o`
/// target (emit only) and the single input path.
fn parse_file_args<'a>(
    command: &str,
    args: &'a [String],
) -> (ReportOptions, Option<&'a str>, Option<&'a str>) {
    let mut options = ReportOptions::default();
    let mut output = None;
    let mut path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--plain" => options.plain = true,
            "-o" | "--output" if command == "emit" => {
                let Some(out) = iter.next() else {
                    eprintln!("Missing file name after '{arg}'");
                    std::process::exit(1);
                };
                output = Some(out.as_str());
            }
            flag if flag.starts_with('-') => {
                let Some(mode) = flag.strip_prefix("--color=") else {
                    eprintln!("Unknown option for '{command}': {flag}");
                    std::process::exit(1);
                };
                options.color = match mode {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    other => {
                        eprintln!("Unknown color mode: {other} (expected auto, always or never)");
                        std::process::exit(1);
                    }
                };
            }
            file => {
                if path.is_some() {
                    eprintln!("Unexpected argument: {file}");
                    std::process::exit(1);
                }
                path = Some(file);
            }
        }
    }

    (options, output, path)
}

const USAGE: &str = "\
GazLang toolchain

Usage: gaz <command> [options]

Commands:
  run <file.gaz>                 Interpret a program
  emit <file.gaz> [-o <out>]     Compile to stack-machine instructions
  lex <file.gaz>                 Print the token stream
  parse <file.gaz>               Print the syntax tree
  explain <ERROR_CODE>           Describe a diagnostic code
  help                           Show this message
  version                        Show the version

Options:
  --plain                        One-line diagnostics (file:line:col)
  --color=<auto|always|never>    Diagnostic colors (default: auto)

Set RUST_LOG (e.g. RUST_LOG=gaz_eval=trace) to trace the pipeline.
";
