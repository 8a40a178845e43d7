//! The instruction set and its text encoding.

use std::fmt;

/// Variable slot in the stack machine's memory.
pub type Address = u32;

/// Which construct a label belongs to. Each construct takes one counter
/// value and names both of its labels with it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelKind {
    /// `&&` short-circuit target.
    ScAnd,
    EndAnd,
    /// `||` short-circuit target.
    ScOr,
    EndOr,
    Else,
    EndIf,
}

impl LabelKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            LabelKind::ScAnd => "SC_AND",
            LabelKind::EndAnd => "END_AND",
            LabelKind::ScOr => "SC_OR",
            LabelKind::EndOr => "END_OR",
            LabelKind::Else => "ELSE",
            LabelKind::EndIf => "ENDIF",
        }
    }
}

/// Jump target, rendered `<PREFIX>_<id>`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub kind: LabelKind,
    pub id: u32,
}

impl Label {
    #[inline]
    pub const fn new(kind: LabelKind, id: u32) -> Self {
        Label { kind, id }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind.prefix(), self.id)
    }
}

/// One stack-machine instruction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Instruction {
    Push(i64),
    PushStr(String),
    Load(Address),
    Store(Address),
    Label(Label),
    Jmp(Label),
    /// Jump if the popped value is zero.
    Jz(Label),
    /// Jump if the popped value is nonzero.
    Jnz(Label),
    Dup,
    Pop,
    ToBool,
    Not,
    /// Eager logical and. Part of the instruction set; the generator lowers
    /// `&&` to jumps instead.
    And,
    /// Eager logical or, likewise never emitted for `||`.
    Or,
    /// Adds integers, or concatenates if either operand is a string.
    AddOrConcat,
    Sub,
    Mul,
    Div,
    Equals,
    NotEquals,
    Print,
}

impl Instruction {
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Push(_) => "PUSH",
            Instruction::PushStr(_) => "PUSH_STR",
            Instruction::Load(_) => "LOAD",
            Instruction::Store(_) => "STORE",
            Instruction::Label(_) => "LABEL",
            Instruction::Jmp(_) => "JMP",
            Instruction::Jz(_) => "JZ",
            Instruction::Jnz(_) => "JNZ",
            Instruction::Dup => "DUP",
            Instruction::Pop => "POP",
            Instruction::ToBool => "TO_BOOL",
            Instruction::Not => "NOT",
            Instruction::And => "AND",
            Instruction::Or => "OR",
            Instruction::AddOrConcat => "ADD_OR_CONCAT",
            Instruction::Sub => "SUB",
            Instruction::Mul => "MUL",
            Instruction::Div => "DIV",
            Instruction::Equals => "EQUALS",
            Instruction::NotEquals => "NOT_EQUALS",
            Instruction::Print => "PRINT",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.mnemonic();
        match self {
            Instruction::Push(n) => write!(f, "{mnemonic} {n}"),
            Instruction::PushStr(s) => write!(f, "{mnemonic} \"{}\"", escape_string(s)),
            Instruction::Load(addr) | Instruction::Store(addr) => write!(f, "{mnemonic} {addr}"),
            Instruction::Label(label)
            | Instruction::Jmp(label)
            | Instruction::Jz(label)
            | Instruction::Jnz(label) => write!(f, "{mnemonic} {label}"),
            _ => f.write_str(mnemonic),
        }
    }
}

/// Escape text for a `PUSH_STR` operand: `"`, `\`, newline, carriage
/// return and tab become two-character escapes. Everything else is copied.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
