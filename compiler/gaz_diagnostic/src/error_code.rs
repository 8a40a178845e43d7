use std::fmt;

/// Error codes for all toolchain diagnostics.
///
/// Format: E#### where the first digit names the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E5xxx: Code generation errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Integer literal does not fit in 64 bits
    E0003,
    /// `$` not followed by a valid name
    E0004,
    /// Bare word that is not a keyword
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,

    // Codegen Errors (E5xxx)
    /// Variable read before any assignment
    E5001,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Operator applied to unsupported operand types
    E6002,
    /// Division by zero
    E6003,
    /// Integer overflow
    E6004,
}

/// Pipeline phase an [`ErrorCode`] belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lex,
    Parse,
    Codegen,
    Runtime,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E5001 => "E5001",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::E0001
            | ErrorCode::E0002
            | ErrorCode::E0003
            | ErrorCode::E0004
            | ErrorCode::E0005 => Phase::Lex,
            ErrorCode::E1001 => Phase::Parse,
            ErrorCode::E5001 => Phase::Codegen,
            ErrorCode::E6001 | ErrorCode::E6002 | ErrorCode::E6003 | ErrorCode::E6004 => {
                Phase::Runtime
            }
        }
    }

    /// Short explanation, as printed by `gaz explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a string literal was opened with `\"` but never closed",
            ErrorCode::E0002 => "the source contains a character that starts no token",
            ErrorCode::E0003 => "an integer literal is larger than 9223372036854775807",
            ErrorCode::E0004 => "`$` must be followed by a letter or underscore",
            ErrorCode::E0005 => "only `echo`, `if`, `else`, `true` and `false` are words",
            ErrorCode::E1001 => "the parser found a token where another was required",
            ErrorCode::E5001 => "a variable is read before it is ever assigned",
            ErrorCode::E6001 => "a variable is read before it has a value",
            ErrorCode::E6002 => "arithmetic was applied to a string operand",
            ErrorCode::E6003 => "the right operand of `/` evaluated to zero",
            ErrorCode::E6004 => "an arithmetic result does not fit in 64 bits",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 11] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E5001,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
    ];
}
