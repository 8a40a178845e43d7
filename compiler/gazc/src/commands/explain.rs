//! The `explain` command: describe a diagnostic code.

use gaz_diagnostic::ErrorCode;

/// Print what an error code means and which phase reports it.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E5001, E6003");
        std::process::exit(1);
    };

    println!("{code} ({:?} phase)", code.phase());
    println!();
    println!("{}", code.explanation());
}
