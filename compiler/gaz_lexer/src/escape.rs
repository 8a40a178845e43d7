//! Escape resolution for string literals.
//!
//! Recognized: `\n` `\t` `\"` `\\`. Any other `\x` yields `x` unchanged,
//! so `"\q"` is the one-character string `q`.

/// Resolve the character following a backslash.
#[inline]
pub(crate) fn resolve_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        '"' => '"',
        '\\' => '\\',
        other => other,
    }
}

#[cfg(test)]
mod tests;
