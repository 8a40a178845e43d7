//! Reference stack machine for emitted instruction text.
//!
//! Only as much machine as the tests need: it reads the text format back,
//! resolves labels, and runs with the interpreter's own value and operator
//! semantics so that differences point at the generator.

use gaz_eval::{evaluate_binary, Value};
use gaz_ir::{BinaryOp, Span};
use rustc_hash::FxHashMap;

#[derive(Debug)]
enum Op {
    Push(Value),
    Load(usize),
    Store(usize),
    Label,
    Jmp(String),
    Jz(String),
    Jnz(String),
    Dup,
    Pop,
    ToBool,
    Not,
    Binary(BinaryOp),
    Print,
}

fn unescape(quoted: &str) -> String {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or_else(|| panic!("PUSH_STR operand not quoted: {quoted}"));
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => panic!("dangling escape in {quoted}"),
        }
    }
    out
}

fn decode(line: &str) -> (Op, Option<String>) {
    let (mnemonic, operand) = match line.split_once(' ') {
        Some((m, rest)) => (m, Some(rest)),
        None => (line, None),
    };
    let arg = || operand.unwrap_or_else(|| panic!("{mnemonic} needs an operand"));
    let op = match mnemonic {
        "PUSH" => Op::Push(Value::Int(arg().parse().unwrap())),
        "PUSH_STR" => Op::Push(Value::Str(unescape(arg()))),
        "LOAD" => Op::Load(arg().parse().unwrap()),
        "STORE" => Op::Store(arg().parse().unwrap()),
        "LABEL" => return (Op::Label, Some(arg().to_string())),
        "JMP" => Op::Jmp(arg().to_string()),
        "JZ" => Op::Jz(arg().to_string()),
        "JNZ" => Op::Jnz(arg().to_string()),
        "DUP" => Op::Dup,
        "POP" => Op::Pop,
        "TO_BOOL" => Op::ToBool,
        "NOT" => Op::Not,
        "AND" => Op::Binary(BinaryOp::And),
        "OR" => Op::Binary(BinaryOp::Or),
        "ADD_OR_CONCAT" => Op::Binary(BinaryOp::Add),
        "SUB" => Op::Binary(BinaryOp::Sub),
        "MUL" => Op::Binary(BinaryOp::Mul),
        "DIV" => Op::Binary(BinaryOp::Div),
        "EQUALS" => Op::Binary(BinaryOp::Eq),
        "NOT_EQUALS" => Op::Binary(BinaryOp::NotEq),
        "PRINT" => Op::Print,
        other => panic!("unknown mnemonic {other}"),
    };
    (op, None)
}

/// Execute instruction text and return everything `PRINT` wrote.
pub fn execute(text: &str) -> String {
    let mut program = Vec::new();
    let mut labels = FxHashMap::default();
    for line in text.lines() {
        let (op, label) = decode(line);
        if let Some(name) = label {
            assert!(
                labels.insert(name.clone(), program.len()).is_none(),
                "label {name} defined twice"
            );
        }
        program.push(op);
    }

    let target = |name: &String| -> usize {
        *labels
            .get(name)
            .unwrap_or_else(|| panic!("jump to undefined label {name}"))
    };

    let mut stack: Vec<Value> = Vec::new();
    let mut slots: FxHashMap<usize, Value> = FxHashMap::default();
    let mut output = String::new();
    let mut pc = 0;
    while let Some(op) = program.get(pc) {
        pc += 1;
        match op {
            Op::Push(value) => stack.push(value.clone()),
            Op::Load(addr) => stack.push(slots[addr].clone()),
            Op::Store(addr) => {
                slots.insert(*addr, stack.pop().unwrap());
            }
            Op::Label => {}
            Op::Jmp(name) => pc = target(name),
            Op::Jz(name) => {
                if !stack.pop().unwrap().is_truthy() {
                    pc = target(name);
                }
            }
            Op::Jnz(name) => {
                if stack.pop().unwrap().is_truthy() {
                    pc = target(name);
                }
            }
            Op::Dup => stack.push(stack.last().unwrap().clone()),
            Op::Pop => {
                stack.pop().unwrap();
            }
            Op::ToBool => {
                let value = stack.pop().unwrap();
                stack.push(Value::Bool(value.is_truthy()));
            }
            Op::Not => {
                let value = stack.pop().unwrap();
                stack.push(Value::Bool(!value.is_truthy()));
            }
            Op::Binary(op) => {
                let right = stack.pop().unwrap();
                let left = stack.pop().unwrap();
                stack.push(evaluate_binary(left, right, *op, Span::DUMMY).unwrap());
            }
            Op::Print => {
                output.push_str(&stack.pop().unwrap().to_display_string());
                output.push('\n');
            }
        }
    }
    assert!(stack.is_empty(), "stack not balanced at exit: {stack:?}");
    output
}
