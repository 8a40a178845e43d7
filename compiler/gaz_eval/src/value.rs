//! Runtime values.

use std::fmt;

/// A runtime value. Every expression evaluates to one of these.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Value {
    Int(i64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Text used by `echo` and by `+` concatenation. Booleans print as
    /// `1`/`0`.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Str(s) => s.clone(),
            Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        }
    }

    /// Boolean coercion: nonzero integers and non-empty text are true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }

    /// Integer view used by arithmetic. Booleans count as `1`/`0`; text has
    /// no integer view.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Str(_) => None,
        }
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Loose equality, as used by `==` and `!=`.
    ///
    /// Rules, first match wins:
    /// 1. either side is a bool: compare both sides as bools, where the
    ///    text `"0"` counts as false (unlike [`Value::is_truthy`]);
    /// 2. int and int: compare numerically;
    /// 3. int and text: numerically if the text is a numeric string,
    ///    otherwise compare the integer's decimal text with it;
    /// 4. text and text: numerically if both are numeric strings,
    ///    otherwise byte for byte.
    ///
    /// Numeric strings may carry a fraction or an exponent (`"1.0"`,
    /// `"1e1"`); those compare as floats.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Bool(_), _) | (_, Value::Bool(_)) => {
                self.loose_bool() == other.loose_bool()
            }
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(n), Value::Str(s)) | (Value::Str(s), Value::Int(n)) => {
                match parse_numeric(s) {
                    Some(m) => Number::Int(*n).same(m),
                    None => n.to_string() == *s,
                }
            }
            (Value::Str(a), Value::Str(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x.same(y),
                _ => a == b,
            },
        }
    }

    /// Bool conversion for comparisons against a bool: like truthiness,
    /// except that `"0"` is false.
    fn loose_bool(&self) -> bool {
        match self {
            Value::Str(s) => !(s.is_empty() || s == "0"),
            other => other.is_truthy(),
        }
    }
}

/// Value of a numeric string.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(
        clippy::cast_precision_loss,
        clippy::float_cmp,
        reason = "loose equality compares mixed int/float operands as floats"
    )]
    fn same(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Int(a), Number::Float(b)) | (Number::Float(b), Number::Int(a)) => {
                a as f64 == b
            }
            (Number::Float(a), Number::Float(b)) => a == b,
        }
    }
}

#[inline]
fn is_numeric_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Parse a numeric string: optional surrounding whitespace, an optional
/// sign, digits with an optional fraction (`1.5`, `1.`, `.5`), then an
/// optional exponent (`e3`, `E-2`). Plain integers that fit in `i64` stay
/// integers; everything else numeric becomes a float.
fn parse_numeric(text: &str) -> Option<Number> {
    let trimmed = text.trim_matches(is_numeric_space);
    let bytes = trimmed.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    let mut integral = true;

    if bytes.get(i) == Some(&b'.') {
        integral = false;
        i += 1;
        let frac_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        integral = false;
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        if i == exp_start {
            return None;
        }
    }
    if i != bytes.len() {
        return None;
    }

    if integral {
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(Number::Int(n));
        }
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
